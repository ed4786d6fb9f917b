//! Node
//!
//! `Node` is the common wrapper for everything that can appear in the children of a
//! document, a section or a quotation.

use super::super::traits::{visit_children, AstNode, Visitor};
use super::paragraph::Paragraph;
use super::section::Section;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Section(Section),
    Paragraph(Paragraph),
    Quotation(Quotation),
}

impl Node {
    pub fn to_text(&self) -> String {
        match self {
            Node::Section(section) => section.to_text(),
            Node::Paragraph(paragraph) => paragraph.text(),
            Node::Quotation(quotation) => quotation.to_text(),
        }
    }

    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Section(section) => Some(&section.children),
            Node::Quotation(quotation) => Some(&quotation.children),
            Node::Paragraph(_) => None,
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Node::Section(_))
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, Node::Paragraph(_))
    }

    pub fn is_quotation(&self) -> bool {
        matches!(self, Node::Quotation(_))
    }

    pub fn as_section(&self) -> Option<&Section> {
        if let Node::Section(section) = self {
            Some(section)
        } else {
            None
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        if let Node::Paragraph(paragraph) = self {
            Some(paragraph)
        } else {
            None
        }
    }

    pub fn as_quotation(&self) -> Option<&Quotation> {
        if let Node::Quotation(quotation) = self {
            Some(quotation)
        } else {
            None
        }
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Section(section) => section.node_type(),
            Node::Paragraph(paragraph) => paragraph.node_type(),
            Node::Quotation(quotation) => quotation.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::Section(section) => section.display_label(),
            Node::Paragraph(paragraph) => paragraph.display_label(),
            Node::Quotation(quotation) => quotation.display_label(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Node::Section(section) => section.accept(visitor),
            Node::Paragraph(paragraph) => paragraph.accept(visitor),
            Node::Quotation(quotation) => quotation.accept(visitor),
        }
    }
}

/// Text quoted between `«` and `»`, usually the new wording of another act. Its content is
/// assembled on its own: its sections do not nest into the quoting document and have no ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quotation {
    pub children: Vec<Node>,
}

impl Quotation {
    pub fn new(children: Vec<Node>) -> Self {
        Quotation { children }
    }

    pub fn to_text(&self) -> String {
        let mut text = String::from("«");
        for child in &self.children {
            text.push_str(&child.to_text());
        }
        text.push('»');
        text
    }
}

impl AstNode for Quotation {
    fn node_type(&self) -> &'static str {
        "Quotation"
    }

    fn display_label(&self) -> String {
        format!("{} nodes", self.children.len())
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_quotation(self);
        visit_children(visitor, &self.children);
    }
}
