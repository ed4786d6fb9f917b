//! Format registry for document serialization
//!
//! Each format implements the `Formatter` trait and is looked up by name in a
//! `FormatRegistry`, which is how the command line resolves `--format`.

use crate::law::ast::Document;
use crate::law::error::LawError;
use std::collections::HashMap;

/// Trait for document formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "json", "treeviz")
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, LawError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of document formatters, keyed by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter of the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, LawError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| LawError::UnknownFormat(format.to_string()))?;
        formatter.serialize(doc)
    }

    /// All format names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// `(name, description)` of every format, sorted by name.
    pub fn describe(&self) -> Vec<(String, String)> {
        self.list_formats()
            .into_iter()
            .map(|name| {
                let description = self
                    .get(&name)
                    .map(|formatter| formatter.description().to_string())
                    .unwrap_or_default();
                (name, description)
            })
            .collect()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::JsonFormatter);
        registry.register(super::TextFormatter);
        registry.register(super::TreevizFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
