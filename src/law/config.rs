//! Configuration loader.
//!
//! `defaults/pt-law.default.toml` is embedded into the library so that the documented
//! defaults and the runtime behavior stay in sync. Applications layer user files and key
//! overrides on top of those defaults via [`Loader`] before deserializing into [`LawConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/pt-law.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LawConfig {
    pub parser: ParserConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Vocabulary of the parser: which texts trigger which observers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParserConfig {
    pub tokenizer: TokenizerConfig,
    pub references: ReferencesConfig,
    pub eu_law: EuLawConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenizerConfig {
    pub extra_terms: Vec<String>,
}

/// Citation words, per kind of reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReferencesConfig {
    pub document_types: Vec<String>,
    pub articles: Vec<String>,
    pub numbers: Vec<String>,
    pub lines: Vec<String>,
}

/// EU act designations, split by the order of year and id in their numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EuLawConfig {
    pub year_first: Vec<String>,
    pub id_first: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputConfig {
    pub normalize: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

/// The parser section of the embedded defaults, deserialized once.
static DEFAULT_PARSER: Lazy<ParserConfig> = Lazy::new(|| {
    load_defaults()
        .expect("embedded defaults deserialize")
        .parser
});

/// The vocabulary of the embedded defaults, available without going through the loader.
impl Default for ParserConfig {
    fn default() -> Self {
        DEFAULT_PARSER.clone()
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (e.g. `output.format` from the command line).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<LawConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LawConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(config.input.normalize);
        assert_eq!(config.output.format, "treeviz");
        assert!(config.parser.tokenizer.extra_terms.contains(&"\n".to_string()));
    }

    #[test]
    fn parser_default_is_the_embedded_vocabulary() {
        let parser = ParserConfig::default();
        assert_eq!(parser, load_defaults().expect("defaults to deserialize").parser);
        assert_eq!(parser.references.articles, vec!["artigo", "artigos"]);
        assert!(parser.references.document_types.iter().any(|name| name == "Decreto-Lei"));
        assert_eq!(parser.eu_law.id_first, vec!["Regulamento (CE)", "Regulamento (UE)"]);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "json")
            .expect("override to apply")
            .set_override("input.normalize", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
        assert!(!config.input.normalize);
    }

    #[test]
    fn layers_user_files() {
        let mut file = NamedTempFile::with_suffix(".toml").expect("create config file");
        writeln!(file, "[output]\nformat = \"json\"").expect("write config");
        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
        // untouched keys keep their defaults
        assert!(config.input.normalize);
        assert_eq!(config.parser, ParserConfig::default());
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/pt-law.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.parser, ParserConfig::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new().with_file("/nonexistent/pt-law.toml").build();
        assert!(result.is_err());
    }
}
