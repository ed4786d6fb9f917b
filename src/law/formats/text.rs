use super::registry::Formatter;
use crate::law::ast::Document;
use crate::law::error::LawError;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, doc: &Document) -> Result<String, LawError> {
        Ok(doc.to_text())
    }

    fn description(&self) -> &str {
        "The normalized text, rebuilt from the tree"
    }
}
