//! File processing API
//!
//! A [`Processor`] runs the whole pipeline over raw text or a file: optional normalization,
//! annotation and assembly, then serialization through the [`FormatRegistry`].
//!
//! ```rust,ignore
//! let config = pt_law_parser::law::config::load_defaults()?;
//! let processor = Processor::from_config(&config);
//! let json = processor.process_file("lei.html", "json")?;
//! ```

use crate::law::ast::Document;
use crate::law::config::LawConfig;
use crate::law::error::LawError;
use crate::law::formats::FormatRegistry;
use crate::law::normalization::normalize;
use crate::law::parsing::Parser;
use crate::law::token::Token;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

pub struct Processor {
    parser: Parser,
    normalize: bool,
    registry: FormatRegistry,
}

impl Processor {
    pub fn new(parser: Parser, normalize: bool) -> Self {
        Processor {
            parser,
            normalize,
            registry: FormatRegistry::with_defaults(),
        }
    }

    pub fn from_config(config: &LawConfig) -> Self {
        Self::new(Parser::from_config(&config.parser), config.input.normalize)
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// The text the parser reads: `raw`, normalized when the processor is configured so.
    pub fn prepare<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.normalize {
            Cow::Owned(normalize(raw))
        } else {
            Cow::Borrowed(raw)
        }
    }

    pub fn tokens(&self, raw: &str) -> Vec<Token> {
        self.parser.parse(&self.prepare(raw))
    }

    pub fn document(&self, raw: &str) -> Document {
        self.parser.analyse(&self.prepare(raw))
    }

    /// Assemble `raw` and serialize it with the named format.
    pub fn process_str(&self, raw: &str, format: &str) -> Result<String, LawError> {
        // fail before parsing when the format is unknown
        if !self.registry.has(format) {
            return Err(LawError::UnknownFormat(format.to_string()));
        }
        let document = self.document(raw);
        self.registry.serialize(&document, format)
    }

    pub fn process_file<P: AsRef<Path>>(&self, path: P, format: &str) -> Result<String, LawError> {
        let raw = read_source(path)?;
        self.process_str(&raw, format)
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(Parser::standard(), true)
    }
}

pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, LawError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| LawError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "read source");
    Ok(raw)
}

/// One token per line, with its position: the positions are what reference parents point at.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut result = String::new();
    for (index, token) in tokens.iter().enumerate() {
        if token.is_empty() {
            continue;
        }
        result.push_str(&format!("{index:>5} {token}\n"));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::law::token::AnchorKind;
    use tempfile::tempdir;

    #[test]
    fn test_process_str() {
        let processor = Processor::new(Parser::standard(), false);
        let text = processor
            .process_str("Artigo 1º\nObjecto\n", "text")
            .unwrap();
        assert_eq!(text, "Artigo 1º\nObjecto\n");
    }

    #[test]
    fn test_normalizes_when_configured() {
        let processor = Processor::default();
        let document = processor.document("<p>ARTIGO 1.º Objecto</p>");
        assert_eq!(document.count(AnchorKind::Article), 1);
        assert_eq!(document.to_text(), "Artigo 1º\nObjecto\n");
    }

    #[test]
    fn test_unknown_format() {
        let error = Processor::default().process_str("Texto\n", "yaml").unwrap_err();
        assert!(matches!(error, LawError::UnknownFormat(_)));
    }

    #[test]
    fn test_process_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lei.html");
        fs::write(&path, "<p>Artigo 2.º - Texto</p>").unwrap();

        let output = Processor::default().process_file(&path, "text").unwrap();
        assert_eq!(output, "Artigo 2º\nTexto\n");
    }

    #[test]
    fn test_missing_file() {
        let error = Processor::default()
            .process_file("/nonexistent/lei.html", "json")
            .unwrap_err();
        assert!(error.to_string().starts_with("failed to read /nonexistent/lei.html"));
    }

    #[test]
    fn test_format_tokens_skips_blanks() {
        let tokens = vec![
            Token::blank(),
            Token::anchor(AnchorKind::Article, "1º"),
            Token::plain("Texto"),
        ];
        assert_eq!(
            format_tokens(&tokens),
            "    1 <Article \"1º\">\n    2 <\"Texto\">\n"
        );
    }
}
