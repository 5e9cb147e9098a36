//! IPIP inventory scoring: static item data, integrity checks, Big Five
//! aggregation and report formatting.

mod answers;
pub mod bank;
pub mod domain;
mod loader;
pub mod report;
pub mod router;
pub mod scoring;
mod service;

#[cfg(test)]
mod tests;

pub use answers::{Answer, AnswerProgress, AnswerSet};
pub use bank::{DataSourceError, FacetMap, ItemBank};
pub use domain::{
    Facet, FacetId, InvalidLikertValue, InventoryVariant, Item, ItemDirection, ItemId,
    LikertValue, PersonalityTrait,
};
pub use loader::{load_quiz_items, CatalogError, ConfigurationError, QuizCatalog};
pub use report::{BandThresholds, InvalidBandThresholds, QuizReport, ReportBuilder, ScoreBand};
pub use router::quiz_router;
pub use scoring::{
    score_answers, FacetScore, IncompleteSubmissionError, ScoreSheet, ScoringError, TraitScore,
};
pub use service::QuizService;
