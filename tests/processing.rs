//! Normalization, configuration and output, end to end

use pt_law_parser::law::config::{LawConfig, Loader};
use pt_law_parser::law::processor::Processor;
use pt_law_parser::law::testing::samples;
use pt_law_parser::law::{normalize, LawError};

fn config(normalize: bool) -> LawConfig {
    Loader::new()
        .set_override("input.normalize", normalize)
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn test_published_article_normalizes_to_the_sample() {
    let normalized = normalize(samples::ARTICLE_HTML);
    let start = samples::DECREE.find("Artigo 1º").unwrap();
    let end = samples::DECREE.find("Artigo 2º").unwrap();
    assert_eq!(normalized, &samples::DECREE[start..end]);
}

#[test]
fn test_html_and_text_give_the_same_tree() {
    let from_html = Processor::from_config(&config(true)).document(samples::ARTICLE_HTML);
    let from_text =
        Processor::from_config(&config(false)).document(&normalize(samples::ARTICLE_HTML));
    assert_eq!(from_html, from_text);
}

#[test]
fn test_json_output_decodes() {
    let processor = Processor::from_config(&config(false));
    let json = processor.process_str(samples::DECREE, "json").unwrap();
    let doc = pt_law_parser::law::Document::from_json(&json).unwrap();
    assert_eq!(doc.to_text(), samples::DECREE);
    assert!(doc.find_section("artigo-1º-numero-2-alinea-a)").is_some());
}

#[test]
fn test_default_format_is_configured() {
    let config = config(false);
    assert_eq!(config.output.format, "treeviz");
    let output = Processor::from_config(&config)
        .process_str(samples::ANNEX, &config.output.format)
        .unwrap();
    assert!(output.starts_with("└─ Section: Anexo: Lista de entidades\n"));
}

#[test]
fn test_unknown_format_is_reported() {
    let error = Processor::default()
        .process_str(samples::DECREE, "xml")
        .unwrap_err();
    assert!(matches!(error, LawError::UnknownFormat(_)));
    assert_eq!(error.to_string(), "format 'xml' not found");
}
