use super::bands::{BandThresholds, ScoreBand};
use crate::quiz::domain::{FacetId, InventoryVariant, PersonalityTrait};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FacetReportEntry {
    pub facet_id: FacetId,
    pub label: String,
    pub position: u8,
    pub item_count: u32,
    pub score: f64,
    pub normalized: f64,
    pub band: ScoreBand,
    pub band_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TraitReportEntry {
    pub personality_trait: PersonalityTrait,
    pub code: &'static str,
    pub label: &'static str,
    pub score: f64,
    pub normalized: f64,
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub summary: &'static str,
    pub facets: Vec<FacetReportEntry>,
}

/// Presentation-ready report handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
    pub variant: InventoryVariant,
    pub variant_label: &'static str,
    pub generated_at: DateTime<Utc>,
    pub item_count: usize,
    pub thresholds: BandThresholds,
    pub traits: Vec<TraitReportEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummaryEntry {
    pub code: &'static str,
    pub label: &'static str,
    pub score: f64,
    pub band_label: &'static str,
}

impl QuizReport {
    pub fn trait_entry(&self, personality_trait: PersonalityTrait) -> Option<&TraitReportEntry> {
        self.traits
            .iter()
            .find(|entry| entry.personality_trait == personality_trait)
    }

    pub fn summary(&self) -> Vec<ReportSummaryEntry> {
        self.traits
            .iter()
            .map(|entry| ReportSummaryEntry {
                code: entry.code,
                label: entry.label,
                score: entry.score,
                band_label: entry.band_label,
            })
            .collect()
    }
}
