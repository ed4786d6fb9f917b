//! Output formats for assembled documents
//!
//! - json: the tree with its citations, readable back with [`Document::from_json`]
//! - treeviz: one line per node, for eyeballing the hierarchy
//! - text: the normalized text the document was assembled from
//!
//! [`Document::from_json`]: crate::law::ast::Document::from_json

pub mod json;
pub mod registry;
pub mod text;
pub mod treeviz;

pub use json::JsonFormatter;
pub use registry::{FormatRegistry, Formatter};
pub use text::TextFormatter;
pub use treeviz::{to_treeviz_str, TreevizFormatter};
