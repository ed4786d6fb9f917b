//! Document element
//!
//! The root of the tree. Besides rendering and (de)serialization it answers the questions a
//! publisher asks about a parsed act: which other acts it cites, and where those live.

use super::super::traits::{visit_children, AstNode, Visitor};
use super::citation::Citation;
use super::node::Node;
use super::paragraph::Inline;
use super::section::Section;
use crate::law::error::LawError;
use crate::law::token::{AnchorKind, ReferenceKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(children: Vec<Node>) -> Self {
        Document { children }
    }

    /// The normalized text the document was assembled from.
    pub fn to_text(&self) -> String {
        self.children.iter().map(Node::to_text).collect()
    }

    pub fn to_json(&self) -> Result<String, LawError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a document and rebuild its section ids.
    pub fn from_json(json: &str) -> Result<Document, LawError> {
        let mut document: Document = serde_json::from_str(json)?;
        document.link();
        Ok(document)
    }

    /// Assign every section outside quotations its hyperlink id.
    ///
    /// The id joins the segments of the formal sections from the root down to the section
    /// (`anexo-I-artigo-2º`). Items, whose bullets carry no number, are numbered by their
    /// position among the items of their parent (`artigo-1º-item-2`).
    pub fn link(&mut self) {
        link_nodes(&mut self.children, &mut Vec::new());
    }

    /// Top-level sections.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.children.iter().filter_map(Node::as_section)
    }

    /// The section with the given id, anywhere in the tree.
    pub fn find_section(&self, id: &str) -> Option<&Section> {
        fn find<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Section> {
            nodes.iter().find_map(|node| match node {
                Node::Section(section) if section.id() == Some(id) => Some(section),
                Node::Section(section) => find(&section.children, id),
                Node::Paragraph(_) | Node::Quotation(_) => None,
            })
        }
        find(&self.children, id)
    }

    /// Every citation of the document, in reading order.
    pub fn citations(&self) -> Vec<&Citation> {
        let mut citations = Vec::new();
        collect_citations(&self.children, &mut citations);
        citations
    }

    /// Distinct `(document type, number)` pairs of every cited act, e.g.
    /// `("Decreto-Lei", "2/2013")`.
    pub fn document_references(&self) -> BTreeSet<(String, String)> {
        self.citations()
            .into_iter()
            .filter(|citation| citation.kind == ReferenceKind::Document)
            .filter_map(|citation| {
                citation
                    .designation()
                    .map(|designation| (designation.to_string(), citation.number.clone()))
            })
            .collect()
    }

    /// Attach hrefs to the citations of the acts found in `mapping`, keyed like
    /// [`Document::document_references`]. Parent chains are updated too.
    pub fn set_document_hrefs(&mut self, mapping: &HashMap<(String, String), String>) {
        for_each_citation_mut(&mut self.children, &mut |citation: &mut Citation| {
            set_href(citation, mapping);
        });
    }

    /// Number of sections of `kind`, anywhere in the tree.
    pub fn count(&self, kind: AnchorKind) -> usize {
        struct Counter(AnchorKind, usize);
        impl Visitor for Counter {
            fn visit_section(&mut self, section: &Section) {
                if section.kind() == self.0 {
                    self.1 += 1;
                }
            }
        }
        let mut counter = Counter(kind, 0);
        self.accept(&mut counter);
        counter.1
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        format!("{} nodes", self.children.len())
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_children(visitor, &self.children);
    }
}

fn collect_citations<'a>(nodes: &'a [Node], citations: &mut Vec<&'a Citation>) {
    for node in nodes {
        match node {
            Node::Section(section) => {
                if let Some(title) = &section.title {
                    citations.extend(title.citations());
                }
                collect_citations(&section.children, citations);
            }
            Node::Paragraph(paragraph) => citations.extend(paragraph.citations()),
            Node::Quotation(quotation) => collect_citations(&quotation.children, citations),
        }
    }
}

fn set_href(citation: &mut Citation, mapping: &HashMap<(String, String), String>) {
    if citation.kind == ReferenceKind::Document {
        if let Some(designation) = citation.designation() {
            let key = (designation.to_string(), citation.number.clone());
            if let Some(href) = mapping.get(&key) {
                citation.set_href(href.as_str());
            }
        }
    }
    if let Some(Inline::Reference(parent)) = citation.parent.as_deref_mut() {
        set_href(parent, mapping);
    }
}

fn for_each_citation_mut(nodes: &mut [Node], f: &mut dyn FnMut(&mut Citation)) {
    for node in nodes {
        match node {
            Node::Section(section) => {
                if let Some(title) = &mut section.title {
                    title.citations_mut().for_each(&mut *f);
                }
                for_each_citation_mut(&mut section.children, f);
            }
            Node::Paragraph(paragraph) => paragraph.citations_mut().for_each(&mut *f),
            Node::Quotation(quotation) => for_each_citation_mut(&mut quotation.children, f),
        }
    }
}

fn link_nodes(nodes: &mut [Node], path: &mut Vec<String>) {
    let mut items = 0;
    for node in nodes {
        let Node::Section(section) = node else {
            // quotations keep their sections unlinked
            continue;
        };

        let segment = if section.kind() == AnchorKind::Item {
            items += 1;
            Some(format!("{}-{}", AnchorKind::Item.slug(), items))
        } else {
            section.anchor.id_segment()
        };

        let pushed = segment.is_some();
        path.extend(segment);
        section.id = if path.is_empty() {
            None
        } else {
            Some(path.join("-"))
        };
        link_nodes(&mut section.children, path);
        if pushed {
            path.pop();
        }
    }
}
