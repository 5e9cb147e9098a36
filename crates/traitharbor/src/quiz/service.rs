use super::answers::AnswerSet;
use super::domain::{InventoryVariant, Item};
use super::loader::QuizCatalog;
use super::report::{QuizReport, ReportBuilder};
use super::scoring::ScoringError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

/// Composes the validated catalog with the report builder.
pub struct QuizService {
    catalog: Arc<QuizCatalog>,
    builder: ReportBuilder,
}

impl QuizService {
    pub fn new(catalog: Arc<QuizCatalog>, builder: ReportBuilder) -> Self {
        Self { catalog, builder }
    }

    pub fn catalog(&self) -> &QuizCatalog {
        &self.catalog
    }

    pub fn items(&self, variant: InventoryVariant) -> &[Item] {
        self.catalog.items(variant)
    }

    /// Score a completed submission and format it as a report.
    pub fn report(
        &self,
        variant: InventoryVariant,
        answers: &AnswerSet,
        generated_at: DateTime<Utc>,
    ) -> Result<QuizReport, ScoringError> {
        let sheet = self.catalog.score(variant, answers)?;
        let report = self.builder.build(&sheet, generated_at);

        info!(%variant, items = sheet.item_count, "quiz report generated");
        Ok(report)
    }
}
