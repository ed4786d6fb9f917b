//! Document tree
//!
//!     The tree assembled from the annotated tokens of a legal act:
//!
//!     Document
//!     ├── Section (Artigo 1º)          heading kind, number, optional title, children
//!     │   ├── Paragraph                text runs and citations
//!     │   └── Section (1 - )
//!     │       └── Paragraph
//!     └── Quotation («...»)             quoted text of another act, assembled on its own
//!
//!     Every node renders back the exact text it was built from (`to_text`), so the
//!     concatenation over a document reproduces its normalized source.
//!
//!     Sections carry a hyperlink id derived from their formal ancestors
//!     (`artigo-1º-numero-2`). The id is computed, never serialized: it is rebuilt by
//!     [`Document::link`] after decoding.

pub mod elements;
pub mod traits;

pub use elements::{Anchor, Citation, Document, Inline, Layout, Node, Paragraph, Quotation, Section};
pub use traits::{AstNode, Visitor};
