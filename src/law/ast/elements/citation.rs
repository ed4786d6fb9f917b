//! Citation element
//!
//! A citation is the number of a reference token, with its parent resolved into a value:
//! the citation it belongs to (the article of a number, the document of an article) or the
//! text that named the cited act (`Decreto-Lei`, `Diretiva`).

use super::super::traits::{AstNode, Visitor};
use super::paragraph::Inline;
use crate::law::patterns;
use crate::law::token::ReferenceKind;
use serde::{Deserialize, Serialize};

const EUR_LEX_URL: &str = "http://eur-lex.europa.eu/legal-content/PT/TXT/?uri=CELEX:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub kind: ReferenceKind,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Inline>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Citation {
    pub fn new(kind: ReferenceKind, number: impl Into<String>, parent: Option<Inline>) -> Self {
        Citation {
            kind,
            number: number.into(),
            parent: parent.map(Box::new),
            href: None,
        }
    }

    pub fn parent_citation(&self) -> Option<&Citation> {
        self.parent.as_deref().and_then(Inline::as_citation)
    }

    /// `(kind, number)` of every citation from the outermost parent down to this one.
    ///
    /// `no nº 2 do artigo 26º` gives `[(Article, "26º"), (Number, "2")]`.
    pub fn chain(&self) -> Vec<(ReferenceKind, &str)> {
        let mut chain = vec![(self.kind, self.number.as_str())];
        let mut current = self;
        while let Some(parent) = current.parent_citation() {
            chain.push((parent.kind, parent.number.as_str()));
            current = parent;
        }
        chain.reverse();
        chain
    }

    /// The text that named the cited act, at the top of the parent chain.
    pub fn designation(&self) -> Option<&str> {
        let mut current = self;
        loop {
            match current.parent.as_deref() {
                Some(Inline::Text(text)) => return Some(text.as_str()),
                Some(Inline::Reference(parent)) => current = parent,
                None => return None,
            }
        }
    }

    /// EUR-Lex address of an EU-law citation, from its CELEX number `3{year}{type}{id:04}`.
    ///
    /// Directives (`L`) and decisions (`D`) are numbered year first, regulations (`R`) id
    /// first. Returns `None` for other citations or unknown designations.
    pub fn eur_lex_url(&self) -> Option<String> {
        if self.kind != ReferenceKind::EuLaw {
            return None;
        }

        let designation = self.designation()?;
        let label = if designation.starts_with("Diretiva") {
            'L'
        } else if designation.starts_with("Decisão") {
            'D'
        } else if designation.starts_with("Regulamento") {
            'R'
        } else {
            return None;
        };

        let mut parts = self.number.split('/');
        let (first, second) = (parts.next()?, parts.next()?);
        let (year, id) = if patterns::EU_LAW_NUMBER.is_match(&self.number) {
            (first, second)
        } else if patterns::EU_REGULATION_NUMBER.is_match(&self.number) {
            (second, first)
        } else {
            return None;
        };
        let id: u32 = id.parse().ok()?;

        Some(format!("{EUR_LEX_URL}3{year}{label}{id:04}"))
    }

    pub fn set_href(&mut self, href: impl Into<String>) {
        self.href = Some(href.into());
    }
}

impl AstNode for Citation {
    fn node_type(&self) -> &'static str {
        "Citation"
    }

    fn display_label(&self) -> String {
        self.chain()
            .iter()
            .map(|(kind, number)| format!("{kind}:{number}"))
            .collect::<Vec<_>>()
            .join(" > ")
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_citation(self);
    }
}
