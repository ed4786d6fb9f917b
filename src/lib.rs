//! # pt-law-parser
//!
//! A parser for Portuguese legal acts.
//!
//! Pipeline
//!
//! Normalized text goes through three stages, each one a plain function over owned data:
//!
//! src/law
//!   ├── tokenizer    Longest-match tokenizer that keeps key terms intact
//!   ├── parsing      Observer managers annotating the token stream in place
//!   └── building     Hierarchy assembly of the annotated tokens into a document tree
//!
//! Everything around that core (normalization, formats, configuration, the processor used by
//! the command line) lives next to it under the same module.
//!
//! For test helpers shared by unit and integration tests, see the [testing module](law::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod law;
