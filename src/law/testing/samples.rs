//! Sample acts, already normalized unless named `_HTML`.

/// A short decree-law: two chapters, numbered and lettered paragraphs, an amendment quoting
/// the new wording of an article, and citations of documents, articles and numbers.
pub const DECREE: &str = "O Governo decreta o seguinte:\n\
Capítulo I\n\
Disposições gerais\n\
Artigo 1º\n\
Objecto\n\
1 - O presente decreto-lei altera o Decreto-Lei nº 2/2013.\n\
2 - O regime aplica-se:\n\
a) Aos contratos;\n\
b) Aos acordos.\n\
Artigo 2º\n\
Alteração\n\
O artigo 5º do Decreto-Lei nº 2/2013 passa a ter a seguinte redação:\n\
«\n\
Artigo 5º\n\
Novo texto.\n\
»\n\
Capítulo II\n\
Disposições finais\n\
Artigo 3º\n\
Entrada em vigor\n\
O disposto no nº 2 do artigo 1º aplica-se a partir de 2014.\n";

/// An annex without a number, holding a bulleted list.
pub const ANNEX: &str = "Anexo\n\
Lista de entidades\n\
- Direção-Geral da Saúde\n\
- Instituto Nacional de Estatística\n";

/// Citations of EU law in both number orders.
pub const EU_LAW: &str = "Transpõe a Diretiva nº 2000/29/CE e executa o \
Regulamento (CE) nº 1907/2006.\n";

/// [`DECREE`]'s first article as published.
pub const ARTICLE_HTML: &str = "<p>ARTIGO 1.º Objecto</p>\
<p>1. O presente decreto-lei altera o Decreto-Lei n.º 2/2013.</p>\
<p>2. O regime aplica-se:</p>\
<p>a) Aos contratos;</p>\
<p>b) Aos acordos.</p>";
