//! Testing utilities
//!
//! Two tools, meant to be used together:
//!
//! 1. [`samples`]: vetted sample acts. Hand-written legal text gets small details wrong (a
//!    missing newline before a heading, `n.º` instead of `nº`) and then the test checks the
//!    wrong thing. Prefer a sample, and extend the samples when a test needs a new shape.
//! 2. [`assert_doc`]: fluent assertions over a whole tree.
//!
//! ```rust,ignore
//! use pt_law_parser::law::testing::{assert_doc, samples};
//! use pt_law_parser::law::Parser;
//!
//! let doc = Parser::standard().analyse(samples::DECREE);
//! assert_doc(&doc).child(1, |node| {
//!     node.assert_section()
//!         .label("Capítulo I")
//!         .title("Disposições gerais")
//!         .child(0, |article| {
//!             article.assert_section().id("artigo-1º");
//!         });
//! });
//! ```

mod assertions;
pub mod samples;

pub use assertions::{
    assert_doc, CitationAssertion, DocumentAssertion, NodeAssertion, ParagraphAssertion,
    QuotationAssertion, SectionAssertion,
};
