//! Section element
//!
//! A section opens at a heading anchor and holds everything up to the next heading of the
//! same or a higher kind. Headings with a word (`Artigo 1º`, `Capítulo II`) take the
//! paragraph that follows as their title.

use super::super::traits::{visit_children, AstNode, Visitor};
use super::node::Node;
use super::paragraph::Paragraph;
use crate::law::token::AnchorKind;
use serde::{Deserialize, Serialize};

/// The heading that opened a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    pub kind: AnchorKind,
    pub number: String,
}

impl Anchor {
    pub fn new(kind: AnchorKind, number: impl Into<String>) -> Self {
        Anchor {
            kind,
            number: number.into(),
        }
    }

    /// The heading as written in the source.
    pub fn text(&self) -> String {
        self.kind.render(&self.number)
    }

    /// This anchor's part of a hyperlink id, for the kinds that are numbered consistently.
    /// Items are numbered by position instead (see [`Document::link`](super::Document::link)).
    pub fn id_segment(&self) -> Option<String> {
        if !self.kind.is_formal() || self.kind == AnchorKind::Item {
            return None;
        }
        if self.number.is_empty() {
            Some(self.kind.slug().to_string())
        } else {
            Some(format!("{}-{}", self.kind.slug(), self.number))
        }
    }
}

/// How a section is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// A heading block followed by a title.
    Titled,
    /// An entry of a numbered list (numbers and lines).
    Ordered,
    /// An entry of a bulleted list.
    Unordered,
}

impl Layout {
    pub fn of(kind: AnchorKind) -> Self {
        match kind {
            AnchorKind::Number | AnchorKind::Line => Layout::Ordered,
            AnchorKind::Item => Layout::Unordered,
            _ => Layout::Titled,
        }
    }

    pub fn is_inline(self) -> bool {
        self != Layout::Titled
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub anchor: Anchor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Paragraph>,
    #[serde(default)]
    pub children: Vec<Node>,
    pub layout: Layout,
    #[serde(skip)]
    pub(crate) id: Option<String>,
}

impl Section {
    pub fn new(anchor: Anchor) -> Self {
        Section {
            layout: Layout::of(anchor.kind),
            anchor,
            title: None,
            children: Vec::new(),
            id: None,
        }
    }

    pub fn kind(&self) -> AnchorKind {
        self.anchor.kind
    }

    pub fn number(&self) -> &str {
        &self.anchor.number
    }

    /// Hyperlink id built from the formal sections enclosing this one (`artigo-1º-numero-2`).
    ///
    /// `None` inside quotations, and for sections with no formal ancestor.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Whether a paragraph added now becomes the title.
    pub fn wants_title(&self) -> bool {
        self.layout == Layout::Titled && self.title.is_none() && self.children.is_empty()
    }

    pub fn to_text(&self) -> String {
        let mut text = self.anchor.text();
        if let Some(title) = &self.title {
            text.push_str(&title.text());
        }
        for child in &self.children {
            text.push_str(&child.to_text());
        }
        text
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.children.iter().filter_map(Node::as_section)
    }
}

/// Computed ids are not part of a section's value.
impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.anchor == other.anchor
            && self.title == other.title
            && self.children == other.children
            && self.layout == other.layout
    }
}

impl AstNode for Section {
    fn node_type(&self) -> &'static str {
        "Section"
    }

    fn display_label(&self) -> String {
        let mut label = match self.anchor.kind {
            AnchorKind::Clause | AnchorKind::Number | AnchorKind::Line | AnchorKind::Item => {
                format!("{} {}", self.anchor.kind, self.anchor.number)
            }
            _ => self.anchor.text().trim_end().to_string(),
        };
        if let Some(title) = &self.title {
            label.push_str(": ");
            label.push_str(title.text().trim_end());
        }
        label
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_section(self);
        if let Some(title) = &self.title {
            title.accept(visitor);
        }
        visit_children(visitor, &self.children);
    }
}
