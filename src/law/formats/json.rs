use super::registry::Formatter;
use crate::law::ast::Document;
use crate::law::error::LawError;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, LawError> {
        doc.to_json()
    }

    fn description(&self) -> &str {
        "Document tree as pretty-printed JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::law::ast::{Anchor, Node, Paragraph, Section};
    use crate::law::token::AnchorKind;

    #[test]
    fn test_sections_serialize_without_ids() {
        let mut doc = Document::with_children(vec![Node::Section(Section::new(Anchor::new(
            AnchorKind::Article,
            "1º",
        )))]);
        doc.link();
        let json = JsonFormatter.serialize(&doc).unwrap();
        assert!(json.contains("\"Article\""));
        assert!(!json.contains("artigo-1º"));
    }

    #[test]
    fn test_paragraphs_serialize_as_runs() {
        let doc = Document::with_children(vec![Node::Paragraph(Paragraph::from_text("Texto\n"))]);
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.serialize(&doc).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "children": [{ "Paragraph": [{ "Text": "Texto\n" }] }] })
        );
    }
}
