//! Fluent assertions over document trees
//!
//! Every assertion carries a context path (`doc:children[1]:children[0]`) so a failure says
//! where in the tree it happened.

use crate::law::ast::{AstNode, Citation, Document, Node, Paragraph, Quotation, Section};
use crate::law::token::{AnchorKind, ReferenceKind};

pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion {
        doc,
        context: "doc".to_string(),
    }
}

fn child_at<'a>(children: &'a [Node], index: usize, context: &str) -> &'a Node {
    children.get(index).unwrap_or_else(|| {
        panic!(
            "{}: Child index {} out of bounds ({} children)",
            context,
            index,
            children.len()
        )
    })
}

fn assert_child_count(children: &[Node], expected: usize, context: &str) {
    assert_eq!(
        children.len(),
        expected,
        "{}: Expected {} children, found {}: {:?}",
        context,
        expected,
        children.len(),
        children.iter().map(|c| c.display_label()).collect::<Vec<_>>()
    );
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
    context: String,
}

impl<'a> DocumentAssertion<'a> {
    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.doc.children, expected, &self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node = child_at(&self.doc.children, index, &self.context);
        assertion(NodeAssertion {
            node,
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }

    /// Sections of `kind` anywhere in the tree, quotations included.
    pub fn section_count(self, kind: AnchorKind, expected: usize) -> Self {
        let actual = self.doc.count(kind);
        assert_eq!(
            actual, expected,
            "{}: Expected {} {} sections, found {}",
            self.context, expected, kind, actual
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.doc.to_text(), expected, "{}: text differs", self.context);
        self
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn assert_section(self) -> SectionAssertion<'a> {
        match self.node {
            Node::Section(section) => SectionAssertion {
                section,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Section, found {}",
                self.context,
                other.node_type()
            ),
        }
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.node {
            Node::Paragraph(paragraph) => ParagraphAssertion {
                paragraph,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Paragraph, found {}",
                self.context,
                other.node_type()
            ),
        }
    }

    pub fn assert_quotation(self) -> QuotationAssertion<'a> {
        match self.node {
            Node::Quotation(quotation) => QuotationAssertion {
                quotation,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Quotation, found {}",
                self.context,
                other.node_type()
            ),
        }
    }
}

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn kind(self, expected: AnchorKind) -> Self {
        assert_eq!(
            self.section.kind(),
            expected,
            "{}: Expected a {} section",
            self.context,
            expected
        );
        self
    }

    /// The heading as written, without its newline: `Artigo 1º`, `Capítulo I`.
    pub fn label(self, expected: &str) -> Self {
        let actual = self.section.anchor.text();
        let actual = actual.trim_end();
        assert_eq!(
            actual, expected,
            "{}: Expected heading '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn number(self, expected: &str) -> Self {
        assert_eq!(
            self.section.number(),
            expected,
            "{}: Expected number '{}', found '{}'",
            self.context,
            expected,
            self.section.number()
        );
        self
    }

    /// The title, without its trailing newline.
    pub fn title(self, expected: &str) -> Self {
        let actual = self.section.title.as_ref().map(Paragraph::text);
        assert_eq!(
            actual.as_deref().map(|t| t.trim_end_matches('\n')),
            Some(expected),
            "{}: Expected title '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn no_title(self) -> Self {
        assert!(
            self.section.title.is_none(),
            "{}: Expected no title, found {:?}",
            self.context,
            self.section.title.as_ref().map(Paragraph::text)
        );
        self
    }

    pub fn id(self, expected: &str) -> Self {
        assert_eq!(
            self.section.id(),
            Some(expected),
            "{}: Expected id '{}', found {:?}",
            self.context,
            expected,
            self.section.id()
        );
        self
    }

    pub fn no_id(self) -> Self {
        assert_eq!(
            self.section.id(),
            None,
            "{}: Expected no id",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.section.children, expected, &self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node = child_at(&self.section.children, index, &self.context);
        assertion(NodeAssertion {
            node,
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }
}

pub struct ParagraphAssertion<'a> {
    paragraph: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        let actual = self.paragraph.text();
        assert_eq!(
            actual, expected,
            "{}: Expected paragraph text {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        let actual = self.paragraph.text();
        assert!(
            actual.starts_with(prefix),
            "{}: Expected paragraph to start with {:?}, found {:?}",
            self.context,
            prefix,
            actual
        );
        self
    }

    pub fn citation_count(self, expected: usize) -> Self {
        let actual = self.paragraph.citations().count();
        assert_eq!(
            actual, expected,
            "{}: Expected {} citations, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn citation<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(CitationAssertion<'a>),
    {
        let citation = self.paragraph.citations().nth(index).unwrap_or_else(|| {
            panic!(
                "{}: Citation index {} out of bounds ({} citations)",
                self.context,
                index,
                self.paragraph.citations().count()
            )
        });
        assertion(CitationAssertion {
            citation,
            context: format!("{}:citations[{}]", self.context, index),
        });
        self
    }
}

pub struct CitationAssertion<'a> {
    citation: &'a Citation,
    context: String,
}

impl CitationAssertion<'_> {
    pub fn kind(self, expected: ReferenceKind) -> Self {
        assert_eq!(
            self.citation.kind, expected,
            "{}: Expected a {}",
            self.context, expected
        );
        self
    }

    pub fn number(self, expected: &str) -> Self {
        assert_eq!(
            self.citation.number, expected,
            "{}: Expected number '{}'",
            self.context, expected
        );
        self
    }

    /// `(kind, number)` from the outermost parent down to this citation.
    pub fn chain(self, expected: &[(ReferenceKind, &str)]) -> Self {
        assert_eq!(
            self.citation.chain(),
            expected,
            "{}: parent chain differs",
            self.context
        );
        self
    }

    pub fn designation(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.citation.designation(),
            expected,
            "{}: designation differs",
            self.context
        );
        self
    }
}

pub struct QuotationAssertion<'a> {
    quotation: &'a Quotation,
    context: String,
}

impl<'a> QuotationAssertion<'a> {
    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.quotation.children, expected, &self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node = child_at(&self.quotation.children, index, &self.context);
        assertion(NodeAssertion {
            node,
            context: format!("{}:children[{}]", self.context, index),
        });
        self
    }
}
