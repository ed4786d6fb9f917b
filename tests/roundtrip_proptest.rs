//! Property-based tests: no stage loses or invents text
//!
//! Inputs are drawn from the vocabulary the observers react to, so headings, citations and
//! quotations show up in every shape, well-formed or not.

use proptest::prelude::*;
use pt_law_parser::law::token::detokenize;
use pt_law_parser::law::{analyse, tokenize, Document, Parser};

const VOCABULARY: &[&str] = &[
    " ", "\n", ".", ",", "«", "»", "-", "Artigo", "artigo", "artigos", "1º", "2º-A", "único",
    "nº", "n.os", "2", "anterior", "alínea", "a)", "Capítulo", "Secção", "Anexo", "I", "IV",
    "Decreto-Lei", "Lei", "2/2013", "Diretiva", "2000/29/CE", "Regulamento (CE)", "1907/2006",
    "texto", "do",
];

fn act() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..60).prop_map(|words| words.concat())
}

proptest! {
    #[test]
    fn tokenize_keeps_every_character(text in "\\PC{0,80}", terms in prop::collection::vec("\\PC{0,3}", 0..5)) {
        prop_assert_eq!(detokenize(&tokenize(&text, &terms)), text);
    }

    #[test]
    fn parse_keeps_the_text(text in act()) {
        let tokens = Parser::standard().parse(&text);
        prop_assert_eq!(detokenize(&tokens), text);
    }

    #[test]
    fn analyse_keeps_the_text(text in act()) {
        let doc = analyse(&Parser::standard().parse(&text));
        prop_assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn json_round_trip(text in act()) {
        let doc = Parser::standard().analyse(&text);
        let decoded = Document::from_json(&doc.to_json().unwrap()).unwrap();
        prop_assert_eq!(&decoded, &doc);
        prop_assert_eq!(decoded.to_text(), text);
    }

    #[test]
    fn parsing_is_deterministic(text in act()) {
        let parser = Parser::standard();
        prop_assert_eq!(parser.parse(&text), parser.parse(&text));
    }
}
