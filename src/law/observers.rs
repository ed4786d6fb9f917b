//! Observers
//!
//!     An observer is a small state machine bound to the position of the token that spawned
//!     it (its trigger). It is fed every following token, one at a time, and eventually
//!     resolves to exactly one of two outcomes: no effect, or a set of replacements of
//!     positions of the token sequence with semantic tokens.
//!
//!     There are two families, both plain data-driven structs:
//!
//!     - [`RuleObserver`]: a strict sequence of predicates over consecutive tokens, described
//!       by a [`RuleTable`]. Used for headings (anchors) and EU-law citations.
//!     - [`ReferenceObserver`]: scans forward from a citation word collecting numbers and a
//!       parent until the end of the sentence.
//!
//!     Observers never touch the token sequence themselves. The
//!     [manager](crate::law::parsing::manager) asks finished observers for their
//!     [`Observer::replacements`] and applies them once the observation phase of a step ends.

pub mod references;
pub mod rules;

pub use references::ReferenceObserver;
pub use rules::{Predicate, RuleObserver, RuleOutcome, RuleTable};

use crate::law::token::{ReferenceKind, Token};
use std::sync::Arc;

/// What a manager instantiates when it sees a trigger.
#[derive(Debug, Clone)]
pub enum ObserverKind {
    Rules(Arc<RuleTable>),
    Reference(ReferenceKind),
}

impl ObserverKind {
    pub fn rules(table: RuleTable) -> Self {
        ObserverKind::Rules(Arc::new(table))
    }

    /// Instantiate an observer for the trigger `token` at `index`.
    pub fn spawn(&self, index: usize, token: &Token) -> Observer {
        match self {
            ObserverKind::Rules(table) => {
                Observer::Rule(RuleObserver::new(Arc::clone(table), index, token))
            }
            ObserverKind::Reference(kind) => Observer::Reference(ReferenceObserver::new(*kind, index)),
        }
    }

    /// Instantiate an observer as if its trigger had been seen just before the first token.
    ///
    /// Only rule tables can be armed; reference observers always need a real trigger.
    pub fn arm(&self) -> Option<Observer> {
        match self {
            ObserverKind::Rules(table) => Some(Observer::Rule(RuleObserver::armed(Arc::clone(table)))),
            ObserverKind::Reference(_) => None,
        }
    }
}

/// A live observer.
#[derive(Debug, Clone)]
pub enum Observer {
    Rule(RuleObserver),
    Reference(ReferenceObserver),
}

impl Observer {
    /// Feed the token at `index`. Returns whether this observer captured it.
    ///
    /// `caught` tells whether another observer of the same manager already captured the token
    /// in this step.
    pub fn observe(&mut self, index: usize, token: &Token, caught: bool) -> bool {
        match self {
            Observer::Rule(observer) => observer.observe(index, token),
            Observer::Reference(observer) => observer.observe(index, token, caught),
        }
    }

    /// No more tokens are coming.
    pub fn finish(&mut self) {
        match self {
            Observer::Rule(observer) => observer.finish(),
            Observer::Reference(observer) => observer.finish(),
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            Observer::Rule(observer) => observer.is_done(),
            Observer::Reference(observer) => observer.is_done(),
        }
    }

    pub fn needs_replace(&self) -> bool {
        match self {
            Observer::Rule(observer) => observer.needs_replace(),
            Observer::Reference(observer) => observer.needs_replace(),
        }
    }

    /// Positions to replace and their new tokens. Empty unless [`Observer::needs_replace`].
    pub fn replacements(&self) -> Vec<(usize, Token)> {
        if !self.needs_replace() {
            return Vec::new();
        }
        match self {
            Observer::Rule(observer) => observer.replacements(),
            Observer::Reference(observer) => observer.replacements(),
        }
    }
}
