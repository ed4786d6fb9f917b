//! Paragraph element
//!
//! A paragraph is a run of inline content ending at a newline (included) or at the next
//! heading. Plain text is merged into as few runs as possible; citations stay separate.

use super::super::traits::{AstNode, Visitor};
use super::citation::Citation;
use serde::{Deserialize, Serialize};

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    Text(String),
    Reference(Citation),
}

impl Inline {
    /// The source text of this inline.
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text(text) => text,
            Inline::Reference(citation) => &citation.number,
        }
    }

    pub fn as_citation(&self) -> Option<&Citation> {
        match self {
            Inline::Reference(citation) => Some(citation),
            Inline::Text(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paragraph {
    pub content: Vec<Inline>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        let mut paragraph = Self::new();
        paragraph.push_text(&text.into());
        paragraph
    }

    /// Append text, merging it into the last run when that one is text too.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Inline::Text(last)) = self.content.last_mut() {
            last.push_str(text);
        } else {
            self.content.push(Inline::Text(text.to_string()));
        }
    }

    pub fn push(&mut self, inline: Inline) {
        match inline {
            Inline::Text(text) => self.push_text(&text),
            Inline::Reference(_) => self.content.push(inline),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The source text of the paragraph.
    pub fn text(&self) -> String {
        self.content.iter().map(Inline::as_str).collect()
    }

    pub fn citations(&self) -> impl Iterator<Item = &Citation> {
        self.content.iter().filter_map(Inline::as_citation)
    }

    pub fn citations_mut(&mut self) -> impl Iterator<Item = &mut Citation> {
        self.content.iter_mut().filter_map(|inline| match inline {
            Inline::Reference(citation) => Some(citation),
            Inline::Text(_) => None,
        })
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        let text = self.text();
        let text = text.trim_end_matches('\n');
        if text.chars().count() > 50 {
            let truncated: String = text.chars().take(50).collect();
            format!("{truncated}…")
        } else {
            text.to_string()
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_paragraph(self);
        for citation in self.citations() {
            citation.accept(visitor);
        }
    }
}
