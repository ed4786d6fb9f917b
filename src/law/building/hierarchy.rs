//! Section nesting
//!
//! The builder keeps the chain of open sections, outermost first. Levels strictly increase
//! along the chain, so the last open section is the deepest one and the nearest open section
//! of a higher kind is always the one below it in the chain.

use crate::law::ast::{Anchor, Node, Section};
use crate::law::token::AnchorKind;

#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    root: Vec<Node>,
    open: Vec<Section>,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a section, closing every open section of the same or a lower kind.
    pub fn open(&mut self, anchor: Anchor) {
        self.close_from(anchor.kind.level());
        self.open.push(Section::new(anchor));
    }

    /// Add a paragraph or a quotation to the deepest open section.
    ///
    /// A paragraph becomes the title of a titled section that has none and no content yet.
    /// An item holds a single paragraph and closes after it.
    pub fn add(&mut self, node: Node) {
        let Some(section) = self.open.last_mut() else {
            self.root.push(node);
            return;
        };

        match node {
            Node::Paragraph(paragraph) if section.wants_title() => {
                section.title = Some(paragraph);
            }
            node => section.children.push(node),
        }

        if section.kind() == AnchorKind::Item {
            self.close_last();
        }
    }

    /// Number of open sections.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn finish(mut self) -> Vec<Node> {
        self.close_from(0);
        self.root
    }

    fn close_from(&mut self, level: usize) {
        while self
            .open
            .last()
            .is_some_and(|section| section.kind().level() >= level)
        {
            self.close_last();
        }
    }

    fn close_last(&mut self) {
        if let Some(section) = self.open.pop() {
            match self.open.last_mut() {
                Some(parent) => parent.children.push(Node::Section(section)),
                None => self.root.push(Node::Section(section)),
            }
        }
    }
}
