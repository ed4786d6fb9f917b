//! Main module for the legal act parser

pub mod ast;
pub mod building;
pub mod config;
pub mod error;
pub mod formats;
pub mod normalization;
pub mod observers;
pub mod parsing;
pub mod patterns;
pub mod processor;
pub mod testing;
pub mod token;
pub mod tokenizer;

pub use ast::Document;
pub use building::analyse;
pub use error::LawError;
pub use normalization::normalize;
pub use parsing::{parse, ObserverManager, Parser};
pub use token::{AnchorKind, ReferenceKind, Token};
pub use tokenizer::tokenize;
