//! The managers that recognise Portuguese legal acts.
//!
//! Order matters: EU-law citations first, then every heading kind (all triggered by a
//! newline), then document citations, then the article, number and line citations.

use crate::law::config::ParserConfig;
use crate::law::observers::{ObserverKind, RuleTable};
use crate::law::parsing::manager::ObserverManager;
use crate::law::patterns;
use crate::law::token::{AnchorKind, ReferenceKind};

fn line_start(table: RuleTable) -> ObserverManager {
    ObserverManager::new().with_trigger("\n", ObserverKind::rules(table))
}

fn citations(triggers: &[String], kind: ReferenceKind) -> ObserverManager {
    ObserverManager::from_triggers(triggers.iter().cloned(), ObserverKind::Reference(kind))
}

/// The EU-law manager: one table per number order.
pub fn eu_law(config: &ParserConfig) -> ObserverManager {
    let eu_law = &config.eu_law;
    let year_first = ObserverKind::rules(RuleTable::eu_law(
        eu_law.year_first.clone(),
        &patterns::EU_LAW_NUMBER,
    ));
    let id_first = ObserverKind::rules(RuleTable::eu_law(
        eu_law.id_first.clone(),
        &patterns::EU_REGULATION_NUMBER,
    ));

    let manager = ObserverManager::from_triggers(eu_law.year_first.iter().cloned(), year_first);
    eu_law
        .id_first
        .iter()
        .fold(manager, |manager, trigger| manager.with_trigger(trigger.as_str(), id_first.clone()))
}

/// One manager per heading shape.
pub fn headings() -> Vec<ObserverManager> {
    let number = &patterns::HEADING_NUMBER;
    vec![
        line_start(RuleTable::heading(AnchorKind::Annex, number)),
        line_start(RuleTable::unnumbered_annex()),
        line_start(RuleTable::heading(AnchorKind::Section, number)),
        line_start(RuleTable::heading(AnchorKind::SubSection, number)),
        line_start(RuleTable::clause()),
        line_start(RuleTable::heading(AnchorKind::Part, number)),
        line_start(RuleTable::heading(AnchorKind::Title, number)),
        line_start(RuleTable::heading(AnchorKind::Chapter, number)),
        line_start(RuleTable::heading(
            AnchorKind::Article,
            &patterns::ARTICLE_HEADING_NUMBER,
        )),
        line_start(RuleTable::number()),
        line_start(RuleTable::line()),
        line_start(RuleTable::item()),
    ]
}

/// The citation managers: documents, then articles, numbers and lines together.
///
/// `anterior` and `seguinte` are numbers of both an article and a number section. The
/// inner citations share one manager, and so one `caught`: the most recent citation
/// captures the word and an older one takes it as its parent (`no nº 2 do artigo
/// seguinte`).
pub fn references(config: &ParserConfig) -> Vec<ObserverManager> {
    let references = &config.references;
    let inner = [
        (&references.articles, ReferenceKind::Article),
        (&references.numbers, ReferenceKind::Number),
        (&references.lines, ReferenceKind::Line),
    ]
    .into_iter()
    .fold(ObserverManager::new(), |manager, (triggers, kind)| {
        triggers.iter().fold(manager, |manager, trigger| {
            manager.with_trigger(trigger.as_str(), ObserverKind::Reference(kind))
        })
    });
    vec![citations(&references.document_types, ReferenceKind::Document), inner]
}

/// Every manager, in the order they must run.
pub fn managers(config: &ParserConfig) -> Vec<ObserverManager> {
    let mut managers = vec![eu_law(config)];
    managers.extend(headings());
    managers.extend(references(config));
    managers
}
