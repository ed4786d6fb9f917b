//! Rule-table observers
//!
//! A [`RuleTable`] is an ordered list of predicates that must hold for consecutive tokens,
//! starting with the trigger. Every heading kind and both EU-law citation shapes are tables;
//! [`RuleObserver`] is the one state machine that runs them.
//!
//! Tables used for headings, with the rules that follow the line-start trigger:
//!
//!     Artigo 1º      "Artigo", " ", article number, "\n"      number at 3, absorbs 1..=4
//!     Capítulo II    "Capítulo", " ", number, "\n"           number at 3, absorbs 1..=4
//!     Anexo          "Anexo", "\n"                            no number,   absorbs 1..=2
//!     IV             roman, "\n"                              number at 1, absorbs 1..=2
//!     1 -            digits, " ", "-", " "                    number at 1, absorbs 1..=4
//!     a)             line number, " "                         number at 1, absorbs 1..=2
//!     -              bullet, " "                              number at 1, absorbs 1..=2
//!
//! Absorbed positions are blanked, except the number position which becomes the anchor. The
//! anchor renders every absorbed text back (see [`AnchorKind::render`]).

use crate::law::patterns;
use crate::law::token::{AnchorKind, ReferenceKind, Token};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

/// A predicate over the text of one token.
#[derive(Debug, Clone)]
pub enum Predicate {
    Literal(String),
    OneOf(Vec<String>),
    Pattern(&'static Lazy<Regex>),
}

impl Predicate {
    pub fn literal(text: impl Into<String>) -> Self {
        Predicate::Literal(text.into())
    }

    pub fn holds(&self, text: &str) -> bool {
        match self {
            Predicate::Literal(literal) => literal == text,
            Predicate::OneOf(options) => options.iter().any(|option| option == text),
            Predicate::Pattern(pattern) => pattern.is_match(text),
        }
    }
}

/// What a fully matched table turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// A heading: the number position becomes an anchor, other absorbed positions are blanked.
    Anchor(AnchorKind),
    /// An EU-law citation: the number position becomes a reference to the trigger.
    EuLaw,
}

/// Immutable description of a rule-table observer.
#[derive(Debug, Clone)]
pub struct RuleTable {
    pub rules: Vec<Predicate>,
    /// Rule whose token carries the number, if any.
    pub number_at: Option<usize>,
    /// Last rule whose token is absorbed by the replacement.
    pub take_up_to: usize,
    pub outcome: RuleOutcome,
}

impl RuleTable {
    pub fn new(rules: Vec<Predicate>, outcome: RuleOutcome) -> Self {
        assert!(rules.len() >= 2, "a rule table needs a trigger and at least one rule");
        RuleTable {
            rules,
            number_at: None,
            take_up_to: 0,
            outcome,
        }
    }

    pub fn number_at(mut self, rule: usize) -> Self {
        assert!(rule > 0 && rule < self.rules.len());
        self.number_at = Some(rule);
        self
    }

    pub fn take_up_to(mut self, rule: usize) -> Self {
        assert!(rule < self.rules.len());
        self.take_up_to = rule;
        self
    }

    /// `\n{word} {number}\n`, the shape of Annex, Part, Title, Chapter, Section, SubSection
    /// and Article headings.
    pub fn heading(kind: AnchorKind, number: &'static Lazy<Regex>) -> Self {
        let word = kind
            .heading()
            .expect("heading tables are only built for kinds with a heading word");
        RuleTable::new(
            vec![
                Predicate::literal("\n"),
                Predicate::literal(word),
                Predicate::literal(" "),
                Predicate::Pattern(number),
                Predicate::literal("\n"),
            ],
            RuleOutcome::Anchor(kind),
        )
        .number_at(3)
        .take_up_to(4)
    }

    /// `\nAnexo\n`
    pub fn unnumbered_annex() -> Self {
        RuleTable::new(
            vec![
                Predicate::literal("\n"),
                Predicate::literal("Anexo"),
                Predicate::literal("\n"),
            ],
            RuleOutcome::Anchor(AnchorKind::Annex),
        )
        .take_up_to(2)
    }

    /// A roman numeral alone on its line.
    pub fn clause() -> Self {
        RuleTable::new(
            vec![
                Predicate::literal("\n"),
                Predicate::Pattern(&patterns::ROMAN_NUMERAL),
                Predicate::literal("\n"),
            ],
            RuleOutcome::Anchor(AnchorKind::Clause),
        )
        .number_at(1)
        .take_up_to(2)
    }

    /// `\n1 - `
    pub fn number() -> Self {
        RuleTable::new(
            vec![
                Predicate::literal("\n"),
                Predicate::Pattern(&patterns::NUMBER_HEADING),
                Predicate::literal(" "),
                Predicate::literal("-"),
                Predicate::literal(" "),
            ],
            RuleOutcome::Anchor(AnchorKind::Number),
        )
        .number_at(1)
        .take_up_to(4)
    }

    /// `\na) `
    pub fn line() -> Self {
        RuleTable::new(
            vec![
                Predicate::literal("\n"),
                Predicate::Pattern(&patterns::LINE_NUMBER),
                Predicate::literal(" "),
            ],
            RuleOutcome::Anchor(AnchorKind::Line),
        )
        .number_at(1)
        .take_up_to(2)
    }

    /// `\n- `, `\n— ` or `\n• `
    pub fn item() -> Self {
        RuleTable::new(
            vec![
                Predicate::literal("\n"),
                Predicate::Pattern(&patterns::ITEM_BULLET),
                Predicate::literal(" "),
            ],
            RuleOutcome::Anchor(AnchorKind::Item),
        )
        .number_at(1)
        .take_up_to(2)
    }

    /// `{designation} nº {number}`
    pub fn eu_law(designations: Vec<String>, number: &'static Lazy<Regex>) -> Self {
        RuleTable::new(
            vec![
                Predicate::OneOf(designations),
                Predicate::literal(" "),
                Predicate::literal("nº"),
                Predicate::literal(" "),
                Predicate::Pattern(number),
            ],
            RuleOutcome::EuLaw,
        )
        .number_at(4)
    }

    fn last(&self) -> usize {
        self.rules.len() - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Matched,
    Failed,
}

/// Runs a [`RuleTable`] over the tokens following its trigger.
#[derive(Debug, Clone)]
pub struct RuleObserver {
    table: Arc<RuleTable>,
    trigger: Option<usize>,
    /// Position and text of the tokens that satisfied rules `1..`, in order.
    matched: Vec<(usize, String)>,
    state: State,
}

impl RuleObserver {
    pub fn new(table: Arc<RuleTable>, index: usize, token: &Token) -> Self {
        assert!(
            table.rules[0].holds(&token.as_str()),
            "trigger {token} does not satisfy the first rule",
        );
        RuleObserver {
            table,
            trigger: Some(index),
            matched: Vec::new(),
            state: State::Running,
        }
    }

    /// An observer whose first rule is already satisfied without a trigger token.
    pub fn armed(table: Arc<RuleTable>) -> Self {
        RuleObserver {
            table,
            trigger: None,
            matched: Vec::new(),
            state: State::Running,
        }
    }

    pub fn observe(&mut self, index: usize, token: &Token) -> bool {
        if self.state != State::Running || self.trigger == Some(index) {
            return false;
        }

        let rule = self.matched.len() + 1;
        let text = token.as_str();
        if !self.table.rules[rule].holds(&text) {
            self.state = State::Failed;
            return false;
        }

        self.matched.push((index, text.into_owned()));
        if rule == self.table.last() {
            self.state = State::Matched;
        }
        false
    }

    /// An incomplete table at the end of the stream is a failed match.
    pub fn finish(&mut self) {
        if self.state == State::Running {
            self.state = State::Failed;
        }
    }

    pub fn is_done(&self) -> bool {
        self.state != State::Running
    }

    pub fn needs_replace(&self) -> bool {
        self.state == State::Matched
    }

    /// Only meaningful once [`RuleObserver::needs_replace`] holds.
    pub fn replacements(&self) -> Vec<(usize, Token)> {
        assert!(self.needs_replace(), "replacements of an unmatched rule table");
        match self.table.outcome {
            RuleOutcome::Anchor(kind) => {
                let (number_position, number) = match self.table.number_at {
                    Some(rule) => {
                        let (position, text) = &self.matched[rule - 1];
                        (*position, text.as_str())
                    }
                    None => (self.matched[0].0, ""),
                };
                self.matched[..self.table.take_up_to]
                    .iter()
                    .map(|(position, _)| {
                        if *position == number_position {
                            (*position, Token::anchor(kind, number))
                        } else {
                            (*position, Token::blank())
                        }
                    })
                    .collect()
            }
            RuleOutcome::EuLaw => {
                let rule = self.table.number_at.unwrap_or_else(|| self.table.last());
                let (position, number) = &self.matched[rule - 1];
                vec![(
                    *position,
                    Token::reference(ReferenceKind::EuLaw, number.as_str(), self.trigger),
                )]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(table: RuleTable, texts: &[&str]) -> RuleObserver {
        let tokens: Vec<Token> = texts.iter().map(|text| Token::plain(*text)).collect();
        let mut observer = RuleObserver::new(Arc::new(table), 0, &tokens[0]);
        for (index, token) in tokens.iter().enumerate() {
            observer.observe(index, token);
        }
        observer
    }

    #[test]
    fn test_article_heading() {
        let observer = run(
            RuleTable::heading(AnchorKind::Article, &patterns::ARTICLE_HEADING_NUMBER),
            &["\n", "Artigo", " ", "1º", "\n"],
        );
        assert!(observer.is_done());
        assert!(observer.needs_replace());
        assert_eq!(
            observer.replacements(),
            vec![
                (1, Token::blank()),
                (2, Token::blank()),
                (3, Token::anchor(AnchorKind::Article, "1º")),
                (4, Token::blank()),
            ]
        );
    }

    #[test]
    fn test_mismatch_fails_silently() {
        let observer = run(
            RuleTable::heading(AnchorKind::Article, &patterns::ARTICLE_HEADING_NUMBER),
            &["\n", "Artigo", " ", "do", "\n"],
        );
        assert!(observer.is_done());
        assert!(!observer.needs_replace());
    }

    #[test]
    fn test_unnumbered_annex() {
        let observer = run(RuleTable::unnumbered_annex(), &["\n", "Anexo", "\n"]);
        assert_eq!(
            observer.replacements(),
            vec![(1, Token::anchor(AnchorKind::Annex, "")), (2, Token::blank())]
        );
    }

    #[test]
    fn test_number_heading_absorbs_dash() {
        let observer = run(RuleTable::number(), &["\n", "12", " ", "-", " "]);
        let replacements = observer.replacements();
        assert_eq!(replacements[0], (1, Token::anchor(AnchorKind::Number, "12")));
        assert!(replacements[1..].iter().all(|(_, token)| token.is_empty()));
        assert_eq!(replacements.len(), 4);
    }

    #[test]
    fn test_incomplete_observer_fails_on_finish() {
        let mut observer = run(RuleTable::line(), &["\n", "a)"]);
        assert!(!observer.is_done());
        observer.finish();
        assert!(observer.is_done());
        assert!(!observer.needs_replace());
    }

    #[test]
    fn test_armed_observer_starts_at_rule_one() {
        let mut observer = RuleObserver::armed(Arc::new(RuleTable::clause()));
        observer.observe(0, &Token::plain("IV"));
        observer.observe(1, &Token::plain("\n"));
        assert_eq!(
            observer.replacements(),
            vec![(0, Token::anchor(AnchorKind::Clause, "IV")), (1, Token::blank())]
        );
    }

    #[test]
    fn test_eu_law_citation() {
        let table = RuleTable::eu_law(vec!["Diretiva".to_string()], &patterns::EU_LAW_NUMBER);
        let observer = run(table, &["Diretiva", " ", "nº", " ", "2000/29/CE"]);
        assert_eq!(
            observer.replacements(),
            vec![(
                4,
                Token::reference(ReferenceKind::EuLaw, "2000/29/CE", Some(0))
            )]
        );
    }

    #[test]
    #[should_panic(expected = "does not satisfy the first rule")]
    fn test_trigger_must_satisfy_first_rule() {
        RuleObserver::new(Arc::new(RuleTable::clause()), 0, &Token::plain("Artigo"));
    }
}
