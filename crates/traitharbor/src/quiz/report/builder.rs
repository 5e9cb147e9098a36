use super::bands::BandThresholds;
use super::narrative::trait_summary;
use super::views::{FacetReportEntry, QuizReport, TraitReportEntry};
use crate::quiz::domain::PersonalityTrait;
use crate::quiz::scoring::{FacetScore, ScoreSheet};
use chrono::{DateTime, Utc};

/// Formats scorer output. Labels and bands only; aggregates are copied as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportBuilder {
    thresholds: BandThresholds,
}

impl ReportBuilder {
    pub fn new(thresholds: BandThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> BandThresholds {
        self.thresholds
    }

    pub fn build(&self, sheet: &ScoreSheet, generated_at: DateTime<Utc>) -> QuizReport {
        let traits = PersonalityTrait::ordered()
            .into_iter()
            .filter_map(|personality_trait| {
                sheet.trait_score(personality_trait).map(|score| {
                    let band = self.thresholds.classify(score.score);
                    let mut facets: Vec<FacetReportEntry> = sheet
                        .facets_for(personality_trait)
                        .map(|facet| self.facet_entry(facet))
                        .collect();
                    facets.sort_by_key(|entry| entry.position);

                    TraitReportEntry {
                        personality_trait,
                        code: personality_trait.code(),
                        label: personality_trait.label(),
                        score: score.score,
                        normalized: score.normalized,
                        band,
                        band_label: band.label(),
                        summary: trait_summary(personality_trait, band),
                        facets,
                    }
                })
            })
            .collect();

        QuizReport {
            variant: sheet.variant,
            variant_label: sheet.variant.label(),
            generated_at,
            item_count: sheet.item_count,
            thresholds: self.thresholds,
            traits,
        }
    }

    fn facet_entry(&self, facet: &FacetScore) -> FacetReportEntry {
        let band = self.thresholds.classify(facet.score);
        FacetReportEntry {
            facet_id: facet.facet_id.clone(),
            label: facet.label.clone(),
            position: facet.position,
            item_count: facet.item_count,
            score: facet.score,
            normalized: facet.normalized,
            band,
            band_label: band.label(),
        }
    }
}
