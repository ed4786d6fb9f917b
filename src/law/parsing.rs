//! Annotation of the token stream
//!
//!     The text is tokenized once. Every token is then pushed to the result sequence and
//!     shown, in order, to each [`ObserverManager`]: the manager spawns observers on its
//!     triggers, advances its live observers and writes back the replacements of those that
//!     finished. Managers run in a fixed order, so later managers find the positions earlier
//!     ones already replaced.
//!
//!     See [`standard`] for the managers that recognise Portuguese legal acts.

pub mod manager;
pub mod parser;
pub mod standard;

pub use manager::ObserverManager;
pub use parser::{parse, Parser};
