//! Hierarchy assembly
//!
//!     Turns the annotated token sequence into a [`Document`]. The walk is linear:
//!
//!         - blank tokens (absorbed heading syntax) are skipped;
//!         - a newline ends the current paragraph, and belongs to it;
//!         - an anchor ends the current paragraph and opens a section;
//!         - `«` and `»` at the start of a paragraph open and close a quotation, whose content
//!           is assembled by a builder of its own;
//!         - everything else is paragraph content, references becoming citations.
//!
//!     Nesting is decided by the [`HierarchyBuilder`]: a section goes under the nearest open
//!     section of a higher kind, following
//!     [`AnchorKind::HIERARCHY`](crate::law::token::AnchorKind::HIERARCHY).
//!
//!     Parents of references are positions in the token sequence. They are resolved here,
//!     against the final tokens, so a parent replaced after its link was recorded is seen in
//!     its final form.

pub mod hierarchy;

pub use hierarchy::HierarchyBuilder;

use crate::law::ast::{Anchor, Citation, Document, Inline, Node, Paragraph, Quotation};
use crate::law::token::{ReferenceKind, Token};

/// Parent chains are at most document > article > number > line.
const MAX_PARENT_DEPTH: usize = 8;

/// Assemble annotated tokens into a document, with section ids assigned.
pub fn analyse(tokens: &[Token]) -> Document {
    let mut assembler = Assembler::new(tokens);
    for token in tokens {
        assembler.push(token);
    }
    let mut document = Document::with_children(assembler.finish());
    document.link();
    tracing::debug!(
        tokens = tokens.len(),
        nodes = document.children.len(),
        "assembled document"
    );
    document
}

struct Assembler<'t> {
    tokens: &'t [Token],
    /// The document builder, then one per open quotation.
    builders: Vec<HierarchyBuilder>,
    paragraph: Paragraph,
}

impl<'t> Assembler<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Assembler {
            tokens,
            builders: vec![HierarchyBuilder::new()],
            paragraph: Paragraph::new(),
        }
    }

    fn builder(&mut self) -> &mut HierarchyBuilder {
        // the document builder is never popped
        let last = self.builders.len() - 1;
        &mut self.builders[last]
    }

    fn push(&mut self, token: &Token) {
        if token.is_empty() {
            return;
        }

        match token {
            Token::Plain(text) if text == "«" && self.paragraph.is_empty() => {
                self.builders.push(HierarchyBuilder::new());
            }
            Token::Plain(text)
                if text == "»" && self.paragraph.is_empty() && self.builders.len() > 1 =>
            {
                self.close_quotation();
            }
            Token::Plain(text) if text == "\n" => {
                self.paragraph.push_text(text);
                self.flush();
            }
            Token::Plain(text) => self.paragraph.push_text(text),
            Token::Anchor { kind, number } => {
                self.flush();
                self.builder().open(Anchor::new(*kind, number.as_str()));
            }
            Token::Reference {
                kind,
                number,
                parent,
            } => {
                let citation = self.citation(*kind, number, *parent, 0);
                self.paragraph.push(Inline::Reference(citation));
            }
        }
    }

    fn flush(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let paragraph = std::mem::take(&mut self.paragraph);
        self.builder().add(Node::Paragraph(paragraph));
    }

    fn close_quotation(&mut self) {
        if let Some(quoted) = self.builders.pop() {
            let quotation = Quotation::new(quoted.finish());
            self.builder().add(Node::Quotation(quotation));
        }
    }

    /// A `«` never closed was text: it stays a paragraph of its own, and the content
    /// assembled after it moves to the enclosing builder.
    fn abandon_quotation(&mut self) {
        if let Some(unterminated) = self.builders.pop() {
            tracing::debug!("unterminated quotation kept as text");
            let builder = self.builder();
            builder.add(Node::Paragraph(Paragraph::from_text("«")));
            for node in unterminated.finish() {
                builder.add(node);
            }
        }
    }

    fn citation(
        &self,
        kind: ReferenceKind,
        number: &str,
        parent: Option<usize>,
        depth: usize,
    ) -> Citation {
        // only documents and EU acts point at plain text: the word naming their type
        let named = matches!(kind, ReferenceKind::Document | ReferenceKind::EuLaw);
        let parent = parent
            .filter(|_| depth < MAX_PARENT_DEPTH)
            .and_then(|position| self.tokens.get(position))
            .and_then(|token| match token {
                Token::Reference {
                    kind,
                    number,
                    parent,
                } => Some(Inline::Reference(self.citation(
                    *kind,
                    number,
                    *parent,
                    depth + 1,
                ))),
                Token::Plain(text) if named && !text.is_empty() => Some(Inline::Text(text.clone())),
                _ => None,
            });
        Citation::new(kind, number, parent)
    }

    fn finish(mut self) -> Vec<Node> {
        self.flush();
        while self.builders.len() > 1 {
            self.abandon_quotation();
        }
        match self.builders.pop() {
            Some(builder) => builder.finish(),
            None => Vec::new(),
        }
    }
}
