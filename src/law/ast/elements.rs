//! Tree elements

pub mod citation;
pub mod document;
pub mod node;
pub mod paragraph;
pub mod section;

pub use citation::Citation;
pub use document::Document;
pub use node::{Node, Quotation};
pub use paragraph::{Inline, Paragraph};
pub use section::{Anchor, Layout, Section};
