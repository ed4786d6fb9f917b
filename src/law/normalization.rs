//! Text normalization
//!
//!     Published acts come as HTML fragments with inconsistent typography. `normalize` brings
//!     them to the plain text the tokenizer expects: one paragraph per line, headings on
//!     lines of their own, quoted amendments isolated between `«` and `»` lines, numbered
//!     paragraphs as `N - ` and ordinals as `º`.
//!
//!     The rewrite is a fixed sequence of textual passes; each pass sees the output of the
//!     previous one.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal rewrites of markup, applied in order after whitespace is collapsed.
const MARKUP: &[(&str, &str)] = &[
    ("<br />", "<br/>"),
    ("<br/>", "</p><p>"),
    ("<br >", "<br>"),
    ("<br>", "</p><p>"),
    ("<?xml version=\"1.0\" encoding=\"UTF-8\"?>", ""),
    ("<span>", ""),
    ("</span>", ""),
    ("<p> ", "<p>"),
    (" </p>", "</p>"),
];

/// Headings some acts write in capitals.
const HEADINGS: &[(&str, &str)] = &[
    ("ARTIGO", "Artigo"),
    ("PARTE", "Parte"),
    ("TÍTULO", "Título"),
    ("CAPÍTULO", "Capítulo"),
    ("SECÇÃO", "Secção"),
    ("ANEXO", "Anexo"),
];

/// `Art. 1.º ` in older acts.
static ABBREVIATED_ARTICLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Art\. (\d+)\.º ").unwrap());

/// `Artigo 1.º - ` in older acts.
static DASHED_ARTICLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Artigo (\d+)\.º - ").unwrap());

/// An article heading sharing its paragraph with the text that follows.
static ARTICLE_PARAGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<p>Artigo (\d+)\.º (.*?)</p>").unwrap());

static QUOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<p>«(.*?)»</p>").unwrap());

/// `1.` at the start of a paragraph.
static DOTTED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<p>(\d+)\.").unwrap());

/// Normalize a published act into the text the parser reads.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    for (from, to) in MARKUP.iter().chain(HEADINGS) {
        text = text.replace(from, to);
    }

    text = ABBREVIATED_ARTICLE
        .replace_all(&text, "Artigo ${1}.º ")
        .into_owned();
    text = DASHED_ARTICLE
        .replace_all(&text, "Artigo ${1}.º ")
        .into_owned();
    text = ARTICLE_PARAGRAPH
        .replace_all(&text, "<p>Artigo ${1}.º</p><p>${2}</p>")
        .into_owned();

    text = text.replace("» </p>", "»</p>").replace("<p> «", "<p>«");
    text = QUOTATION
        .replace_all(&text, "<p>«</p><p>${1}</p><p>»</p>")
        .into_owned();

    text = DOTTED_NUMBER.replace_all(&text, "<p>${1} -").into_owned();
    text = text.replace(".º", "º");

    let text = text.replace("</p>", "\n").replace("<p>", "");
    tracing::trace!(raw = raw.len(), normalized = text.len(), "normalized text");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::whitespace("<p>Texto  com\n\tespaços</p>", "Texto com espaços\n")]
    #[case::line_breaks("<p>um<br />dois<br>três</p>", "um\ndois\ntrês\n")]
    #[case::spans("<p><span>Texto</span></p>", "Texto\n")]
    #[case::padded_paragraph("<p> Texto </p>", "Texto\n")]
    #[case::capital_heading("<p>CAPÍTULO I</p>", "Capítulo I\n")]
    #[case::abbreviated_article("<p>Art. 3.º Texto</p>", "Artigo 3º\nTexto\n")]
    #[case::dashed_article("<p>Artigo 3.º - 1 - Texto</p>", "Artigo 3º\n1 - Texto\n")]
    #[case::dotted_number("<p>2. Texto.</p>", "2 - Texto.\n")]
    #[case::ordinal("<p>o artigo 2.º da lei</p>", "o artigo 2º da lei\n")]
    fn test_normalize(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[test]
    fn test_article_heading_is_split_from_its_title() {
        let raw = "<p>ARTIGO 1.º Objecto</p><p>1. O presente decreto-lei aprova o regime.</p>";
        assert_eq!(
            normalize(raw),
            "Artigo 1º\nObjecto\n1 - O presente decreto-lei aprova o regime.\n"
        );
    }

    #[test]
    fn test_quotations_get_lines_of_their_own() {
        let raw = "<p>Passa a ter a seguinte redação:</p>\
                   <p> «Artigo 5.º</p><p>Novo texto» </p>";
        assert_eq!(
            normalize(raw),
            "Passa a ter a seguinte redação:\n«\nArtigo 5º\nNovo texto\n»\n"
        );
    }
}
