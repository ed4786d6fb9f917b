//! Assembly of whole acts into document trees

use pt_law_parser::law::formats::to_treeviz_str;
use pt_law_parser::law::testing::{assert_doc, samples};
use pt_law_parser::law::{AnchorKind, Parser, ReferenceKind};

#[test]
fn test_decree_structure() {
    let doc = Parser::standard().analyse(samples::DECREE);

    assert_doc(&doc)
        .child_count(3)
        .section_count(AnchorKind::Chapter, 2)
        // the quoted article counts too
        .section_count(AnchorKind::Article, 4)
        .text(samples::DECREE)
        .child(0, |node| {
            node.assert_paragraph().text("O Governo decreta o seguinte:\n");
        })
        .child(1, |node| {
            node.assert_section()
                .label("Capítulo I")
                .title("Disposições gerais")
                .no_id()
                .child_count(2)
                .child(0, |node| {
                    node.assert_section()
                        .label("Artigo 1º")
                        .title("Objecto")
                        .id("artigo-1º")
                        .child_count(2)
                        .child(0, |node| {
                            node.assert_section()
                                .kind(AnchorKind::Number)
                                .number("1")
                                .no_title()
                                .id("artigo-1º-numero-1");
                        })
                        .child(1, |node| {
                            node.assert_section()
                                .kind(AnchorKind::Number)
                                .number("2")
                                .child_count(3)
                                .child(0, |node| {
                                    node.assert_paragraph().text("O regime aplica-se:\n");
                                })
                                .child(2, |node| {
                                    node.assert_section()
                                        .kind(AnchorKind::Line)
                                        .number("b)")
                                        .id("artigo-1º-numero-2-alinea-b)");
                                });
                        });
                })
                .child(1, |node| {
                    node.assert_section()
                        .label("Artigo 2º")
                        .title("Alteração")
                        .child_count(3)
                        .child(1, |node| {
                            node.assert_quotation().child_count(2).child(1, |node| {
                                node.assert_section()
                                    .label("Artigo 5º")
                                    .title("Novo texto.")
                                    .no_id();
                            });
                        });
                });
        })
        .child(2, |node| {
            node.assert_section()
                .label("Capítulo II")
                .child(0, |node| {
                    node.assert_section().label("Artigo 3º").id("artigo-3º");
                });
        });
}

#[test]
fn test_quoted_sections_are_not_linked() {
    let doc = Parser::standard().analyse(samples::DECREE);
    assert!(doc.find_section("artigo-2º").is_some());
    assert!(doc.find_section("artigo-5º").is_none());
}

#[test]
fn test_unnumbered_annex_with_items() {
    let doc = Parser::standard().analyse(samples::ANNEX);

    assert_doc(&doc).child_count(1).child(0, |node| {
        node.assert_section()
            .kind(AnchorKind::Annex)
            .number("")
            .title("Lista de entidades")
            .id("anexo")
            .child_count(2)
            .child(1, |node| {
                node.assert_section()
                    .kind(AnchorKind::Item)
                    .id("anexo-item-2")
                    .child(0, |node| {
                        node.assert_paragraph()
                            .text("Instituto Nacional de Estatística\n");
                    });
            });
    });
}

#[test]
fn test_annex_treeviz() {
    let doc = Parser::standard().analyse(samples::ANNEX);
    insta::assert_snapshot!(to_treeviz_str(&doc), @r###"
    └─ Section: Anexo: Lista de entidades
      ├─ Section: Item -
      │ └─ Paragraph: Direção-Geral da Saúde
      └─ Section: Item -
        └─ Paragraph: Instituto Nacional de Estatística
    "###);
}

#[test]
fn test_article_treeviz() {
    let text = "Artigo 1º\nObjecto\n1 - O regime aplica-se:\na) Aos contratos;\n\
                b) Aos acordos do artigo 2º.\n2 - Texto.\n";
    let doc = Parser::standard().analyse(text);
    insta::assert_snapshot!(to_treeviz_str(&doc), @r###"
    └─ Section: Artigo 1º: Objecto
      ├─ Section: Number 1
      │ ├─ Paragraph: O regime aplica-se:
      │ ├─ Section: Line a)
      │ │ └─ Paragraph: Aos contratos;
      │ └─ Section: Line b)
      │   └─ Paragraph: Aos acordos do artigo 2º.
      │     └─ Citation: ArticleReference:2º
      └─ Section: Number 2
        └─ Paragraph: Texto.
    "###);
}

#[test]
fn test_text_before_the_first_heading_stays_at_the_root() {
    let doc = Parser::standard().analyse("Preâmbulo.\nArtigo único\nTexto.\n");
    assert_doc(&doc).child_count(2).child(1, |node| {
        node.assert_section()
            .number("único")
            .title("Texto.")
            .id("artigo-único");
    });
}

#[test]
fn test_citations_in_titles() {
    let doc = Parser::standard().analyse("Artigo 4º\nAlteração ao artigo 2º\n");
    let citations = doc.citations();
    assert_eq!(citations.len(), 1);
    assert_eq!(citations[0].kind, ReferenceKind::Article);
    assert_eq!(citations[0].number, "2º");
}

#[test]
fn test_headings_numbered_by_letters_and_digits() {
    let doc = Parser::standard().analyse("Parte A\nGeral\nSecção 1\nÂmbito\nArtigo 1º\nTexto.\n");
    assert_doc(&doc).child_count(1).child(0, |part| {
        part.assert_section()
            .kind(AnchorKind::Part)
            .number("A")
            .title("Geral")
            .child(0, |section| {
                section
                    .assert_section()
                    .kind(AnchorKind::Section)
                    .label("Secção 1")
                    .title("Âmbito")
                    .child(0, |article| {
                        article.assert_section().id("artigo-1º");
                    });
            });
    });
}
