//! AST traits - Common interfaces for uniform node access

use super::elements::{Citation, Node, Paragraph, Quotation, Section};

/// Visitor trait for traversing the tree
///
/// Default implementations are empty, so you only need to override the methods you care about.
///
/// # Example
///
/// ```ignore
/// struct ArticleCounter(usize);
///
/// impl Visitor for ArticleCounter {
///     fn visit_section(&mut self, section: &Section) {
///         if section.anchor.kind == AnchorKind::Article {
///             self.0 += 1;
///         }
///     }
/// }
///
/// let mut counter = ArticleCounter(0);
/// document.accept(&mut counter);
/// ```
pub trait Visitor {
    fn visit_section(&mut self, _section: &Section) {}
    fn visit_quotation(&mut self, _quotation: &Quotation) {}
    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {}
    /// Citations as they appear in paragraphs. Parents are not visited separately: every
    /// parent citation is also present in the paragraph that contains it.
    fn visit_citation(&mut self, _citation: &Citation) {}
}

/// Helper function to visit all nodes of a slice
pub fn visit_children(visitor: &mut dyn Visitor, nodes: &[Node]) {
    for node in nodes {
        node.accept(visitor);
    }
}

/// Common interface for all tree nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::law::ast::{Anchor, Inline};
    use crate::law::token::{AnchorKind, ReferenceKind};

    #[derive(Default)]
    struct CountingVisitor {
        sections: usize,
        paragraphs: usize,
        quotations: usize,
        citations: usize,
    }

    impl Visitor for CountingVisitor {
        fn visit_section(&mut self, _: &Section) {
            self.sections += 1;
        }
        fn visit_quotation(&mut self, _: &Quotation) {
            self.quotations += 1;
        }
        fn visit_paragraph(&mut self, _: &Paragraph) {
            self.paragraphs += 1;
        }
        fn visit_citation(&mut self, _: &Citation) {
            self.citations += 1;
        }
    }

    #[test]
    fn test_visitor_traversal() {
        let mut paragraph = Paragraph::new();
        paragraph.push_text("Ver o ");
        paragraph.push(Inline::Reference(Citation::new(ReferenceKind::Article, "2º", None)));
        paragraph.push_text(".\n");

        let mut article = Section::new(Anchor::new(AnchorKind::Article, "1º"));
        article.title = Some(Paragraph::from_text("Objeto\n"));
        article.children.push(Node::Paragraph(paragraph));
        article.children.push(Node::Quotation(Quotation::new(vec![Node::Paragraph(
            Paragraph::from_text("citação"),
        )])));

        let mut visitor = CountingVisitor::default();
        Node::Section(article).accept(&mut visitor);

        assert_eq!(visitor.sections, 1);
        assert_eq!(visitor.quotations, 1);
        // the title, the body paragraph and the quoted one
        assert_eq!(visitor.paragraphs, 3);
        assert_eq!(visitor.citations, 1);
    }
}
