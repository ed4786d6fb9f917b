//! Core token types shared by the tokenizer, the observers and the hierarchy builder.
//!
//!     Every token starts its life as [`Token::Plain`], produced by the
//!     [tokenizer](crate::law::tokenizer). Observers later replace positions of the
//!     sequence with semantic tokens: anchors that open a structural section, and
//!     references that cite another part of this or another document.
//!
//! Positions
//!
//!     A token sequence is an arena. Positions are never removed or reordered; syntax an
//!     observer absorbs is blanked by replacing it with an empty plain token. This is what
//!     makes the round-trip law hold: concatenating [`Token::as_str`] over a sequence always
//!     reproduces the text it was built from.
//!
//!     References link to their parent (the article a number belongs to, the document type
//!     word a document number follows) by position, not by value. The token at that
//!     position may be replaced after the link was recorded, and readers resolve it lazily
//!     so they always see the final token.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Structural levels of a legal act, in hierarchy order (outermost first).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum AnchorKind {
    Annex,
    Part,
    Title,
    Chapter,
    Section,
    SubSection,
    Clause,
    Article,
    Number,
    Line,
    Item,
}

impl AnchorKind {
    /// All kinds, outermost first.
    pub const HIERARCHY: [AnchorKind; 11] = [
        AnchorKind::Annex,
        AnchorKind::Part,
        AnchorKind::Title,
        AnchorKind::Chapter,
        AnchorKind::Section,
        AnchorKind::SubSection,
        AnchorKind::Clause,
        AnchorKind::Article,
        AnchorKind::Number,
        AnchorKind::Line,
        AnchorKind::Item,
    ];

    /// Position of this kind in [`AnchorKind::HIERARCHY`].
    pub fn level(self) -> usize {
        self as usize
    }

    /// The word that introduces a heading of this kind, if headings carry one.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            AnchorKind::Annex => Some("Anexo"),
            AnchorKind::Part => Some("Parte"),
            AnchorKind::Title => Some("Título"),
            AnchorKind::Chapter => Some("Capítulo"),
            AnchorKind::Section => Some("Secção"),
            AnchorKind::SubSection => Some("Sub-Secção"),
            AnchorKind::Article => Some("Artigo"),
            AnchorKind::Number => Some("Número"),
            AnchorKind::Line => Some("Alínea"),
            AnchorKind::Clause | AnchorKind::Item => None,
        }
    }

    /// ASCII slug used when building section ids.
    pub fn slug(self) -> &'static str {
        match self {
            AnchorKind::Annex => "anexo",
            AnchorKind::Part => "parte",
            AnchorKind::Title => "titulo",
            AnchorKind::Chapter => "capitulo",
            AnchorKind::Section => "seccao",
            AnchorKind::SubSection => "subseccao",
            AnchorKind::Clause => "clausula",
            AnchorKind::Article => "artigo",
            AnchorKind::Number => "numero",
            AnchorKind::Line => "alinea",
            AnchorKind::Item => "item",
        }
    }

    /// Formal kinds are the ones that contribute a segment to hyperlink ids.
    pub fn is_formal(self) -> bool {
        matches!(
            self,
            AnchorKind::Annex
                | AnchorKind::Article
                | AnchorKind::Number
                | AnchorKind::Line
                | AnchorKind::Item
        )
    }

    /// The exact source text an anchor of this kind absorbed.
    ///
    /// Must stay in sync with the rule tables in
    /// [`observers::rules`](crate::law::observers::rules): every literal a table blanks is
    /// rendered back here.
    pub fn render(self, number: &str) -> String {
        match self {
            AnchorKind::Annex if number.is_empty() => "Anexo\n".to_string(),
            AnchorKind::Annex
            | AnchorKind::Part
            | AnchorKind::Title
            | AnchorKind::Chapter
            | AnchorKind::Section
            | AnchorKind::SubSection
            | AnchorKind::Article => {
                // every arm here has a heading word
                let heading = self.heading().unwrap_or_default();
                format!("{heading} {number}\n")
            }
            AnchorKind::Clause => format!("{number}\n"),
            AnchorKind::Number => format!("{number} - "),
            AnchorKind::Line | AnchorKind::Item => format!("{number} "),
        }
    }
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnchorKind::Annex => "Annex",
            AnchorKind::Part => "Part",
            AnchorKind::Title => "Title",
            AnchorKind::Chapter => "Chapter",
            AnchorKind::Section => "Section",
            AnchorKind::SubSection => "SubSection",
            AnchorKind::Clause => "Clause",
            AnchorKind::Article => "Article",
            AnchorKind::Number => "Number",
            AnchorKind::Line => "Line",
            AnchorKind::Item => "Item",
        };
        write!(f, "{name}")
    }
}

/// What a reference cites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceKind {
    Document,
    Article,
    Number,
    Line,
    EuLaw,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceKind::Document => "DocumentReference",
            ReferenceKind::Article => "ArticleReference",
            ReferenceKind::Number => "NumberReference",
            ReferenceKind::Line => "LineReference",
            ReferenceKind::EuLaw => "EuLawReference",
        };
        write!(f, "{name}")
    }
}

/// A token of the annotated stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Raw text, as produced by the tokenizer. Empty when an observer absorbed it.
    Plain(String),
    /// Start of a structural section.
    Anchor { kind: AnchorKind, number: String },
    /// A citation. `parent` is the position of the token this citation belongs to.
    Reference {
        kind: ReferenceKind,
        number: String,
        parent: Option<usize>,
    },
}

impl Token {
    pub fn plain(text: impl Into<String>) -> Self {
        Token::Plain(text.into())
    }

    /// The empty token used to blank absorbed syntax.
    pub fn blank() -> Self {
        Token::Plain(String::new())
    }

    pub fn anchor(kind: AnchorKind, number: impl Into<String>) -> Self {
        Token::Anchor {
            kind,
            number: number.into(),
        }
    }

    pub fn reference(kind: ReferenceKind, number: impl Into<String>, parent: Option<usize>) -> Self {
        Token::Reference {
            kind,
            number: number.into(),
            parent,
        }
    }

    /// Textual rendering of the token. Concatenating it over a sequence reproduces the source.
    pub fn as_str(&self) -> Cow<'_, str> {
        match self {
            Token::Plain(text) => Cow::Borrowed(text),
            Token::Reference { number, .. } => Cow::Borrowed(number),
            Token::Anchor { kind, number } => Cow::Owned(kind.render(number)),
        }
    }

    /// True for a plain token with exactly this text.
    pub fn is(&self, text: &str) -> bool {
        matches!(self, Token::Plain(t) if t == text)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Token::Plain(text) => text.is_empty(),
            // anchors always render their heading syntax, references their number
            Token::Anchor { .. } | Token::Reference { .. } => false,
        }
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self, Token::Anchor { .. })
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Token::Reference { .. })
    }

    /// The number carried by an anchor or a reference.
    pub fn number(&self) -> Option<&str> {
        match self {
            Token::Plain(_) => None,
            Token::Anchor { number, .. } | Token::Reference { number, .. } => Some(number),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Plain(text) => write!(f, "<{text:?}>"),
            Token::Anchor { kind, number } => write!(f, "<{kind} {number:?}>"),
            Token::Reference {
                kind,
                number,
                parent: Some(parent),
            } => write!(f, "<{kind} {number:?} @{parent}>"),
            Token::Reference { kind, number, .. } => write!(f, "<{kind} {number:?}>"),
        }
    }
}

/// Rebuild the source text of a token sequence.
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::new();
    for token in tokens {
        result.push_str(&token.as_str());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_rendering_reproduces_heading_syntax() {
        assert_eq!(Token::anchor(AnchorKind::Article, "1º").as_str(), "Artigo 1º\n");
        assert_eq!(Token::anchor(AnchorKind::SubSection, "II").as_str(), "Sub-Secção II\n");
        assert_eq!(Token::anchor(AnchorKind::Annex, "").as_str(), "Anexo\n");
        assert_eq!(Token::anchor(AnchorKind::Clause, "IV").as_str(), "IV\n");
        assert_eq!(Token::anchor(AnchorKind::Number, "3").as_str(), "3 - ");
        assert_eq!(Token::anchor(AnchorKind::Line, "b)").as_str(), "b) ");
    }

    #[test]
    fn test_reference_renders_its_number() {
        let token = Token::reference(ReferenceKind::Article, "26º", Some(4));
        assert_eq!(token.as_str(), "26º");
        assert_eq!(token.number(), Some("26º"));
        assert_eq!(token.to_string(), "<ArticleReference \"26º\" @4>");
    }

    #[test]
    fn test_blank_tokens_are_empty() {
        assert!(Token::blank().is_empty());
        assert!(!Token::plain(" ").is_empty());
        assert!(Token::plain("\n").is("\n"));
        assert!(!Token::anchor(AnchorKind::Line, "a)").is("a)"));
    }

    #[test]
    fn test_hierarchy_levels_follow_declaration_order() {
        for (index, kind) in AnchorKind::HIERARCHY.iter().enumerate() {
            assert_eq!(kind.level(), index);
        }
        assert!(AnchorKind::Annex < AnchorKind::Article);
    }

    #[test]
    fn test_detokenize() {
        let tokens = vec![
            Token::blank(),
            Token::anchor(AnchorKind::Article, "2º"),
            Token::plain("Texto"),
        ];
        assert_eq!(detokenize(&tokens), "Artigo 2º\nTexto");
    }
}
