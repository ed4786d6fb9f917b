//! Longest-match tokenizer
//!
//! Splits text into plain tokens so that configured key terms are never broken across token
//! boundaries. Text between key terms is kept as maximal plain runs: only the emission of a
//! key term splits plain text.
//!
//! Matching
//!
//!     The scanner reads one character at a time and keeps:
//!     - a pending buffer of characters not yet emitted;
//!     - partial matches: key terms whose prefix is currently the tail of the buffer, each
//!       with the buffer offset it started at;
//!     - candidates: key terms that fully matched somewhere in the buffer.
//!
//!     The best candidate is the one starting earliest, the longer one on ties. It is emitted
//!     once no partial match starts at or before it, because such a partial could still grow
//!     into a longer match covering it. Emitting flushes the buffered prefix as a plain token,
//!     emits the key term, clears all tracking and replays the rest of the buffer.
//!
//!     At the end of the input partial matches can no longer complete, so the remaining
//!     candidates are emitted in order and whatever is left is flushed as one plain token.
//!
//! Examples (key terms in braces):
//!
//!     "Decreto-Lei"   {Decreto, Decreto-Lei}          -> [Decreto-Lei]
//!     "Decreto-Barro" {Decreto, Decreto-Lei}          -> [Decreto, -Barro]
//!     "n.º 2"         {" ", n.º, .º}                  -> [n.º, " ", 2]

use crate::law::token::Token;
use std::cmp::Reverse;
use std::collections::VecDeque;

/// Tokenize `text`, keeping every key term intact.
///
/// Total over all inputs: the concatenation of the returned tokens is always `text`.
/// Empty key terms are ignored.
pub fn tokenize<I, T>(text: &str, key_terms: I) -> Vec<Token>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut scanner = Scanner::new(key_terms);
    for c in text.chars() {
        scanner.push(c);
    }
    scanner.finish()
}

/// A key term that matched `buffer[start..end]`.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    start: usize,
    end: usize,
}

/// A key term whose first `matched` bytes are the tail of the buffer, starting at `start`.
#[derive(Debug, Clone, Copy)]
struct Partial {
    term: usize,
    start: usize,
    matched: usize,
}

/// Streaming state of the tokenizer.
#[derive(Debug)]
pub struct Scanner {
    terms: Vec<String>,
    buffer: String,
    partials: Vec<Partial>,
    candidates: Vec<Candidate>,
    replay: VecDeque<char>,
    output: Vec<Token>,
}

impl Scanner {
    pub fn new<I, T>(key_terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut terms: Vec<String> = key_terms
            .into_iter()
            .map(|term| term.as_ref().to_string())
            .filter(|term| !term.is_empty())
            .collect();
        terms.sort();
        terms.dedup();

        Scanner {
            terms,
            buffer: String::new(),
            partials: Vec::new(),
            candidates: Vec::new(),
            replay: VecDeque::new(),
            output: Vec::new(),
        }
    }

    /// Feed the next character of the input.
    pub fn push(&mut self, c: char) {
        self.replay.push_back(c);
        self.drain();
    }

    /// Signal the end of the input and return every token.
    pub fn finish(mut self) -> Vec<Token> {
        loop {
            self.partials.clear();
            if !self.resolve(true) {
                break;
            }
            self.drain();
        }

        if !self.buffer.is_empty() {
            let rest = std::mem::take(&mut self.buffer);
            tracing::trace!(token = %rest.escape_debug(), "flushing plain tail");
            self.output.push(Token::Plain(rest));
        }
        self.output
    }

    fn drain(&mut self) {
        while let Some(c) = self.replay.pop_front() {
            self.step(c);
        }
    }

    fn step(&mut self, c: char) {
        let offset = self.buffer.len();
        self.buffer.push(c);

        let mut encoded = [0u8; 4];
        let c: &str = c.encode_utf8(&mut encoded);

        let terms = &self.terms;
        let mut completed = Vec::new();

        self.partials.retain_mut(|partial| {
            let term = &terms[partial.term];
            if !term[partial.matched..].starts_with(c) {
                return false;
            }
            partial.matched += c.len();
            if partial.matched == term.len() {
                completed.push(Candidate {
                    start: partial.start,
                    end: partial.start + term.len(),
                });
                return false;
            }
            true
        });

        for (index, term) in terms.iter().enumerate() {
            if !term.starts_with(c) {
                continue;
            }
            if term.len() == c.len() {
                completed.push(Candidate {
                    start: offset,
                    end: offset + c.len(),
                });
            } else {
                self.partials.push(Partial {
                    term: index,
                    start: offset,
                    matched: c.len(),
                });
            }
        }

        self.candidates.extend(completed);
        self.resolve(false);
    }

    /// Emit the best candidate if nothing can still outgrow it. Returns whether it emitted.
    fn resolve(&mut self, closing: bool) -> bool {
        let Some(best) = self
            .candidates
            .iter()
            .min_by_key(|candidate| (candidate.start, Reverse(candidate.end)))
            .copied()
        else {
            return false;
        };

        if !closing && self.partials.iter().any(|partial| partial.start <= best.start) {
            return false;
        }

        if best.start > 0 {
            self.output
                .push(Token::plain(&self.buffer[..best.start]));
        }
        let term = &self.buffer[best.start..best.end];
        tracing::trace!(term = %term.escape_debug(), "emitting key term");
        self.output.push(Token::plain(term));

        let remainder = self.buffer[best.end..].to_string();
        self.buffer.clear();
        self.partials.clear();
        self.candidates.clear();
        for c in remainder.chars().rev() {
            self.replay.push_front(c);
        }
        true
    }
}
