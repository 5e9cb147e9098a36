mod aggregate;

use super::answers::AnswerSet;
use super::bank::FacetMap;
use super::domain::{FacetId, InventoryVariant, Item, ItemId, PersonalityTrait};
use super::loader::{validate_items, ConfigurationError};
use serde::Serialize;
use tracing::{debug, warn};

/// Aggregate for a single facet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetScore {
    pub facet_id: FacetId,
    pub personality_trait: PersonalityTrait,
    pub label: String,
    pub position: u8,
    pub item_count: u32,
    /// Sum of the direction-normalized item values.
    pub raw: u32,
    /// Unrounded mean on the 1-5 scale.
    pub mean: f64,
    /// `mean` rounded to one decimal.
    pub score: f64,
    /// `mean` mapped onto 0-100, rounded to one decimal.
    pub normalized: f64,
}

/// Aggregate for a trait: the unweighted mean of its facet means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitScore {
    pub personality_trait: PersonalityTrait,
    pub facet_count: u32,
    pub mean: f64,
    pub score: f64,
    pub normalized: f64,
}

/// Scorer output. Traits and facets are in canonical order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSheet {
    pub variant: InventoryVariant,
    pub item_count: usize,
    pub traits: Vec<TraitScore>,
    pub facets: Vec<FacetScore>,
}

impl ScoreSheet {
    pub fn trait_score(&self, personality_trait: PersonalityTrait) -> Option<&TraitScore> {
        self.traits
            .iter()
            .find(|score| score.personality_trait == personality_trait)
    }

    pub fn facet_score(&self, facet_id: &FacetId) -> Option<&FacetScore> {
        self.facets.iter().find(|score| &score.facet_id == facet_id)
    }

    pub fn facets_for(
        &self,
        personality_trait: PersonalityTrait,
    ) -> impl Iterator<Item = &FacetScore> {
        self.facets
            .iter()
            .filter(move |score| score.personality_trait == personality_trait)
    }
}

/// The submission did not answer every required item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "submission is missing answers for {} item(s): {}",
    .missing.len(),
    join_ids(.missing)
)]
pub struct IncompleteSubmissionError {
    pub missing: Vec<ItemId>,
}

fn join_ids(ids: &[ItemId]) -> String {
    ids.iter()
        .map(ItemId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error(transparent)]
    Incomplete(#[from] IncompleteSubmissionError),
    /// `items` and `facets` were not produced by the quiz loader together.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Scores a completed submission. Pure: identical input yields identical output.
///
/// `items` must all belong to `variant`. Answers for ids outside `items` are ignored.
pub fn score_answers(
    variant: InventoryVariant,
    answers: &AnswerSet,
    items: &[Item],
    facets: &FacetMap,
) -> Result<ScoreSheet, ScoringError> {
    if let Err(err) = check_inputs(variant, items, facets) {
        warn!(%variant, error = %err, "scoring input failed integrity check");
        return Err(err.into());
    }

    let missing = answers.missing_for(items);
    if !missing.is_empty() {
        debug!(missing = missing.len(), "submission incomplete");
        return Err(IncompleteSubmissionError { missing }.into());
    }

    let facet_scores = aggregate::facet_scores(answers, items, facets);
    let trait_scores = aggregate::trait_scores(&facet_scores);

    debug!(
        items = items.len(),
        facets = facet_scores.len(),
        "submission scored"
    );

    Ok(ScoreSheet {
        variant,
        item_count: items.len(),
        traits: trait_scores,
        facets: facet_scores,
    })
}

fn check_inputs(
    variant: InventoryVariant,
    items: &[Item],
    facets: &FacetMap,
) -> Result<(), ConfigurationError> {
    validate_items(items, facets)?;
    match items.iter().find(|item| !item.belongs_to(variant)) {
        Some(item) => Err(ConfigurationError::ItemOutsideVariant {
            variant,
            item_id: item.id.clone(),
        }),
        None => Ok(()),
    }
}
