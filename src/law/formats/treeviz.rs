//! Treeviz formatter
//!
//! One line per node, nesting drawn with box connectors:
//!
//! ```text
//! └─ Section: Artigo 1º: Objecto
//!   └─ Section: Number 1
//!     └─ Paragraph: O presente decreto-lei aprova o regime
//! ```
//!
//! Titles are part of their section's label. Citations are listed under the paragraph (or
//! title) that contains them.

use super::registry::Formatter;
use crate::law::ast::{AstNode, Citation, Document, Node, Paragraph};
use crate::law::error::LawError;

const LABEL_WIDTH: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut result = String::new();
    append_children(&mut result, &doc.children, "");
    result
}

fn append_line(result: &mut String, item: &dyn AstNode, prefix: &str, is_last: bool) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let node_type = item.node_type();
    let label = truncate(&item.display_label(), LABEL_WIDTH);
    result.push_str(&format!("{prefix}{connector} {node_type}: {label}\n"));
    let indent = if is_last { "  " } else { "│ " };
    format!("{prefix}{indent}")
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let new_prefix = append_line(result, node, prefix, is_last);

    match node {
        Node::Section(section) => {
            let titled: Vec<&Citation> =
                section.title.iter().flat_map(Paragraph::citations).collect();
            for (i, citation) in titled.iter().enumerate() {
                let is_last = i == titled.len() - 1 && section.children.is_empty();
                append_line(result, *citation, &new_prefix, is_last);
            }
            append_children(result, &section.children, &new_prefix);
        }
        Node::Quotation(quotation) => append_children(result, &quotation.children, &new_prefix),
        Node::Paragraph(paragraph) => {
            let citations: Vec<&Citation> = paragraph.citations().collect();
            for (i, citation) in citations.iter().enumerate() {
                append_line(result, *citation, &new_prefix, i == citations.len() - 1);
            }
        }
    }
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, LawError> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "One line per node, with box-drawing nesting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::law::ast::{Anchor, Inline, Section};
    use crate::law::token::{AnchorKind, ReferenceKind};

    #[test]
    fn test_nesting() {
        let mut number = Section::new(Anchor::new(AnchorKind::Number, "1"));
        let mut paragraph = Paragraph::from_text("nos termos do ");
        paragraph.push(Inline::Reference(Citation::new(
            ReferenceKind::Article,
            "2º",
            None,
        )));
        number.children.push(Node::Paragraph(paragraph));
        let mut article = Section::new(Anchor::new(AnchorKind::Article, "1º"));
        article.title = Some(Paragraph::from_text("Objecto\n"));
        article.children.push(Node::Section(number));
        let doc = Document::with_children(vec![
            Node::Paragraph(Paragraph::from_text("Preâmbulo\n")),
            Node::Section(article),
        ]);

        let expected = [
            "├─ Paragraph: Preâmbulo",
            "└─ Section: Artigo 1º: Objecto",
            "  └─ Section: Number 1",
            "    └─ Paragraph: nos termos do 2º",
            "      └─ Citation: ArticleReference:2º",
        ];
        assert_eq!(to_treeviz_str(&doc), expected.join("\n") + "\n");
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let doc = Document::with_children(vec![Node::Paragraph(Paragraph::from_text(
            "O presente decreto-lei aprova o regime jurídico da urbanização\n",
        ))]);
        assert_eq!(
            to_treeviz_str(&doc),
            "└─ Paragraph: O presente decreto-lei aprova o regime j...\n"
        );
    }
}
