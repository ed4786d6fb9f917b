//! Parse driver
//!
//! [`parse`] is the single pass over the token stream. [`Parser`] bundles a vocabulary
//! (see [`ParserConfig`]) and builds fresh managers for every call, so one parser can be
//! shared between threads.

use crate::law::ast::Document;
use crate::law::building::analyse;
use crate::law::config::ParserConfig;
use crate::law::parsing::manager::ObserverManager;
use crate::law::parsing::standard;
use crate::law::token::Token;
use crate::law::tokenizer::tokenize;
use std::collections::BTreeSet;

/// Tokenize `text` and run every manager over it, in order.
///
/// The key terms are the triggers of all managers plus `extra_terms`. Returns the annotated
/// token sequence; concatenating its tokens reproduces `text`.
pub fn parse<I, T>(text: &str, managers: &mut [ObserverManager], extra_terms: I) -> Vec<Token>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut terms: BTreeSet<String> = extra_terms
        .into_iter()
        .map(|term| term.as_ref().to_string())
        .collect();
    for manager in managers.iter() {
        terms.extend(manager.terms().map(str::to_string));
    }

    let tokens = tokenize(text, &terms);
    tracing::debug!(
        tokens = tokens.len(),
        terms = terms.len(),
        managers = managers.len(),
        "parsing"
    );

    for manager in managers.iter_mut() {
        manager.start();
    }

    let mut result = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.into_iter().enumerate() {
        result.push(token.clone());
        for manager in managers.iter_mut() {
            manager.generate(index, &token);
            manager.observe(index, &token, false);
            manager.replace_in(&mut result);
        }
    }

    for manager in managers.iter_mut() {
        manager.finish(&mut result);
    }
    result
}

/// A configured parser of legal acts.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// The Portuguese vocabulary of the embedded defaults.
    pub fn standard() -> Self {
        Parser {
            config: ParserConfig::default(),
        }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Parser {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Fresh managers, in the order they must run.
    pub fn managers(&self) -> Vec<ObserverManager> {
        standard::managers(&self.config)
    }

    /// Every key term the tokenizer keeps intact.
    pub fn key_terms(&self) -> BTreeSet<String> {
        let mut terms: BTreeSet<String> =
            self.config.tokenizer.extra_terms.iter().cloned().collect();
        for manager in self.managers() {
            terms.extend(manager.terms().map(str::to_string));
        }
        terms
    }

    /// Split `text` into plain tokens with this parser's key terms.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize(text, &self.key_terms())
    }

    /// Annotate normalized `text`.
    pub fn parse(&self, text: &str) -> Vec<Token> {
        let mut managers = self.managers();
        parse(text, &mut managers, &self.config.tokenizer.extra_terms)
    }

    /// Annotate normalized `text` and assemble it into a document.
    pub fn analyse(&self, text: &str) -> Document {
        analyse(&self.parse(text))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::standard()
    }
}
