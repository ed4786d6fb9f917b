//! Citation observers
//!
//! Spawned on a citation word (`artigo`, `nº`, `alíneas`, a document type such as
//! `Decreto-Lei`), a reference observer collects every following token shaped like a number
//! of its kind until the sentence ends (`.` or a newline).
//!
//! A token shaped like a number of a higher kind becomes the parent of all the collected
//! numbers instead, and stops the collection:
//!
//!     no nº 2 do artigo 26º do Decreto-Lei 2/2013,
//!        ^^ captures 2, parent is 26º
//!                ^^^^^^ captures 26º, parent is 2/2013
//!                          ^^^^^^^^^^^ captures 2/2013, parent is the trigger itself
//!
//! Capture honours `caught` (a token claimed by another observer of the same manager is
//! left alone) but parent detection does not.

use crate::law::patterns;
use crate::law::token::{ReferenceKind, Token};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

type Pattern = &'static Lazy<Regex>;

fn capture_patterns(kind: ReferenceKind) -> &'static [Pattern] {
    static DOCUMENT: [Pattern; 1] = [&patterns::DOCUMENT_NUMBER];
    static ARTICLE: [Pattern; 1] = [&patterns::ARTICLE_NUMBER];
    static NUMBER: [Pattern; 1] = [&patterns::NUMBER];
    static LINE: [Pattern; 1] = [&patterns::LINE_NUMBER];
    static EU_LAW: [Pattern; 2] = [&patterns::EU_LAW_NUMBER, &patterns::EU_REGULATION_NUMBER];
    match kind {
        ReferenceKind::Document => &DOCUMENT,
        ReferenceKind::Article => &ARTICLE,
        ReferenceKind::Number => &NUMBER,
        ReferenceKind::Line => &LINE,
        ReferenceKind::EuLaw => &EU_LAW,
    }
}

fn parent_patterns(kind: ReferenceKind) -> &'static [Pattern] {
    static ARTICLE: [Pattern; 1] = [&patterns::DOCUMENT_NUMBER];
    static NUMBER: [Pattern; 2] = [&patterns::ARTICLE_NUMBER, &patterns::DOCUMENT_NUMBER];
    static LINE: [Pattern; 3] = [
        &patterns::NUMBER,
        &patterns::ARTICLE_NUMBER,
        &patterns::DOCUMENT_NUMBER,
    ];
    match kind {
        ReferenceKind::Article => &ARTICLE,
        ReferenceKind::Number => &NUMBER,
        ReferenceKind::Line => &LINE,
        ReferenceKind::Document | ReferenceKind::EuLaw => &[],
    }
}

fn matches_any(patterns: &[Pattern], text: &str) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(text))
}

/// Collects the numbers cited after a citation word.
#[derive(Debug, Clone)]
pub struct ReferenceObserver {
    kind: ReferenceKind,
    trigger: usize,
    numbers: BTreeMap<usize, String>,
    parent: Option<usize>,
    done: bool,
}

impl ReferenceObserver {
    pub fn new(kind: ReferenceKind, index: usize) -> Self {
        // documents (and EU acts) are children of the word that named their type
        let parent = match kind {
            ReferenceKind::Document | ReferenceKind::EuLaw => Some(index),
            ReferenceKind::Article | ReferenceKind::Number | ReferenceKind::Line => None,
        };
        ReferenceObserver {
            kind,
            trigger: index,
            numbers: BTreeMap::new(),
            parent,
            done: false,
        }
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    pub fn observe(&mut self, index: usize, token: &Token, caught: bool) -> bool {
        if self.done || index == self.trigger {
            return false;
        }

        let text = token.as_str();
        let ends_sentence = text == "." || text == "\n";

        match self.kind {
            ReferenceKind::Document | ReferenceKind::EuLaw => {
                if !caught && matches_any(capture_patterns(self.kind), &text) {
                    self.capture(index, &text);
                    return true;
                }
                if ends_sentence {
                    self.finish();
                }
                false
            }
            ReferenceKind::Article | ReferenceKind::Number | ReferenceKind::Line => {
                if ends_sentence {
                    self.finish();
                    return false;
                }
                if self.parent.is_some() {
                    return false;
                }
                if !caught && matches_any(capture_patterns(self.kind), &text) {
                    self.capture(index, &text);
                    return true;
                }
                if matches_any(parent_patterns(self.kind), &text) {
                    self.parent = Some(index);
                }
                false
            }
        }
    }

    fn capture(&mut self, index: usize, text: &str) {
        let previous = self.numbers.insert(index, text.to_string());
        assert!(previous.is_none(), "position {index} captured twice");
    }

    pub fn finish(&mut self) {
        self.done = true;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn needs_replace(&self) -> bool {
        self.done && !self.numbers.is_empty()
    }

    pub fn replacements(&self) -> Vec<(usize, Token)> {
        self.numbers
            .iter()
            .map(|(position, number)| {
                (
                    *position,
                    Token::reference(self.kind, number.as_str(), self.parent),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observe_all(observer: &mut ReferenceObserver, texts: &[&str]) {
        for (index, text) in texts.iter().enumerate() {
            observer.observe(index, &Token::plain(*text), false);
        }
    }

    #[test]
    fn test_collects_many_articles() {
        let texts = ["artigos", " ", "3º", ",", " ", "4º-A", " ", "e", " ", "25º", "."];
        let mut observer = ReferenceObserver::new(ReferenceKind::Article, 0);
        observe_all(&mut observer, &texts);
        assert!(observer.needs_replace());
        let numbers: Vec<_> = observer
            .replacements()
            .into_iter()
            .map(|(position, token)| (position, token.as_str().into_owned()))
            .collect();
        assert_eq!(
            numbers,
            vec![(2, "3º".to_string()), (5, "4º-A".to_string()), (9, "25º".to_string())]
        );
    }

    #[test]
    fn test_parent_stops_collection() {
        let texts = ["nº", " ", "2", " ", "do", " ", "artigo", " ", "26º", " ", "e", " ", "3"];
        let mut observer = ReferenceObserver::new(ReferenceKind::Number, 0);
        observe_all(&mut observer, &texts);
        observer.finish();
        assert_eq!(
            observer.replacements(),
            vec![(2, Token::reference(ReferenceKind::Number, "2", Some(8)))]
        );
    }

    #[test]
    fn test_line_of_a_document() {
        let texts = ["alínea", " ", "c)", " ", "da", " ", "Lei", " ", "15/99", "."];
        let mut observer = ReferenceObserver::new(ReferenceKind::Line, 0);
        observe_all(&mut observer, &texts);
        assert_eq!(
            observer.replacements(),
            vec![(2, Token::reference(ReferenceKind::Line, "c)", Some(8)))]
        );
    }

    #[test]
    fn test_document_parent_is_the_trigger() {
        let texts = ["Decreto-Lei", " ", "nº", " ", "2/2013", "."];
        let mut observer = ReferenceObserver::new(ReferenceKind::Document, 0);
        observe_all(&mut observer, &texts);
        assert!(observer.is_done());
        assert_eq!(
            observer.replacements(),
            vec![(4, Token::reference(ReferenceKind::Document, "2/2013", Some(0)))]
        );
    }

    #[test]
    fn test_caught_tokens_are_not_captured_but_can_be_parents() {
        let mut observer = ReferenceObserver::new(ReferenceKind::Number, 0);
        assert!(!observer.observe(2, &Token::plain("26º"), true));
        assert!(!observer.observe(4, &Token::plain("2"), false));
        observer.finish();
        assert!(!observer.needs_replace());

        let mut observer = ReferenceObserver::new(ReferenceKind::Line, 0);
        assert!(!observer.observe(2, &Token::plain("f)"), true));
        observer.finish();
        assert!(!observer.needs_replace());
    }

    #[test]
    fn test_newline_ends_the_sentence() {
        let mut observer = ReferenceObserver::new(ReferenceKind::Line, 0);
        observe_all(&mut observer, &["alínea", " ", "\n", "f)"]);
        assert!(observer.is_done());
        assert!(!observer.needs_replace());
    }

    #[test]
    #[should_panic(expected = "captured twice")]
    fn test_double_capture_is_an_invariant_violation() {
        let mut observer = ReferenceObserver::new(ReferenceKind::Article, 0);
        observer.observe(2, &Token::plain("3º"), false);
        observer.observe(2, &Token::plain("3º"), false);
    }
}
