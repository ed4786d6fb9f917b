//! Observer manager
//!
//! A manager owns one family of observers, keyed by the trigger text that spawns them. Per
//! token it runs three phases:
//!
//!     generate    spawn an observer if the token is a trigger
//!     observe     feed the token to every live observer, most recent first
//!     replace_in  collect the replacements of finished observers and apply them
//!
//! Observers only read during `observe`; the sequence is written in `replace_in`, once the
//! whole family saw the token.

use crate::law::observers::{Observer, ObserverKind};
use crate::law::token::Token;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct ObserverManager {
    triggers: BTreeMap<String, ObserverKind>,
    /// Live observers in creation order.
    observers: Vec<Observer>,
}

impl ObserverManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// A manager spawning `kind` on every one of `triggers`.
    pub fn from_triggers<I, T>(triggers: I, kind: ObserverKind) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        triggers
            .into_iter()
            .fold(Self::new(), |manager, trigger| manager.with_trigger(trigger, kind.clone()))
    }

    pub fn with_trigger(mut self, trigger: impl Into<String>, kind: ObserverKind) -> Self {
        self.triggers.insert(trigger.into(), kind);
        self
    }

    /// The trigger texts, which the tokenizer must keep intact.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.triggers.keys().map(String::as_str)
    }

    /// Number of observers still running.
    pub fn live(&self) -> usize {
        self.observers.len()
    }

    /// Arm the line-start observers before the first token, so a heading on the first line
    /// is recognised as if a newline preceded it.
    pub fn start(&mut self) {
        if let Some(kind) = self.triggers.get("\n") {
            self.observers.extend(kind.arm());
        }
    }

    pub fn generate(&mut self, index: usize, token: &Token) {
        let text = token.as_str();
        if let Some(kind) = self.triggers.get(text.as_ref()) {
            tracing::trace!(index, trigger = %text.escape_debug(), "spawning observer");
            self.observers.push(kind.spawn(index, token));
        }
    }

    /// Feed the token to every live observer. Returns whether any of them captured it.
    pub fn observe(&mut self, index: usize, token: &Token, caught: bool) -> bool {
        let mut caught = caught;
        for observer in self.observers.iter_mut().rev() {
            caught = observer.observe(index, token, caught) || caught;
        }
        caught
    }

    /// Apply the replacements of every finished observer and drop them.
    pub fn replace_in(&mut self, result: &mut [Token]) {
        let patches = self.take_finished();
        apply(result, patches);
    }

    /// Force-finish every live observer and apply what they matched.
    pub fn finish(&mut self, result: &mut [Token]) {
        for observer in &mut self.observers {
            observer.finish();
        }
        self.replace_in(result);
    }

    fn take_finished(&mut self) -> Vec<(usize, Token)> {
        let mut patches = Vec::new();
        for observer in self.observers.iter().rev() {
            if observer.is_done() && observer.needs_replace() {
                patches.extend(observer.replacements());
            }
        }
        self.observers.retain(|observer| !observer.is_done());
        patches
    }
}

fn apply(result: &mut [Token], patches: Vec<(usize, Token)>) {
    let len = result.len();
    for (position, token) in patches {
        assert!(
            position < len,
            "replacement at {position} outside a sequence of {len} tokens",
        );
        if let Token::Reference {
            parent: Some(parent),
            ..
        } = &token
        {
            assert!(*parent < len, "parent link {parent} outside the sequence");
        }
        if !token.is_empty() {
            tracing::debug!(position, %token, "replacing token");
        }
        result[position] = token;
    }
}
