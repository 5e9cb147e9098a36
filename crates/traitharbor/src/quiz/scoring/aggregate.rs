use super::{FacetScore, TraitScore};
use crate::quiz::answers::AnswerSet;
use crate::quiz::bank::FacetMap;
use crate::quiz::domain::{FacetId, Item, LikertValue, PersonalityTrait};
use std::collections::BTreeMap;

#[derive(Default)]
struct Tally {
    sum: u32,
    count: u32,
}

/// Facet aggregates ordered by trait, then facet position.
///
/// Callers have validated `items` against `facets` and checked completeness.
pub(super) fn facet_scores(
    answers: &AnswerSet,
    items: &[Item],
    facets: &FacetMap,
) -> Vec<FacetScore> {
    let mut tallies: BTreeMap<&FacetId, Tally> = BTreeMap::new();
    for item in items {
        let Some(value) = answers.get(&item.id) else {
            continue;
        };
        let tally = tallies.entry(&item.facet_id).or_default();
        tally.sum += u32::from(item.direction.normalize(value).get());
        tally.count += 1;
    }

    let mut scores: Vec<FacetScore> = tallies
        .into_iter()
        .filter_map(|(facet_id, tally)| {
            let facet = facets.get(facet_id)?;
            let personality_trait = facet.personality_trait()?;
            let mean = f64::from(tally.sum) / f64::from(tally.count);
            Some(FacetScore {
                facet_id: facet_id.clone(),
                personality_trait,
                label: facet.label.clone(),
                position: facet.position,
                item_count: tally.count,
                raw: tally.sum,
                mean,
                score: round_tenth(mean),
                normalized: normalize(mean),
            })
        })
        .collect();

    scores.sort_by(|left, right| {
        trait_rank(left.personality_trait)
            .cmp(&trait_rank(right.personality_trait))
            .then(left.position.cmp(&right.position))
            .then(left.facet_id.cmp(&right.facet_id))
    });
    scores
}

pub(super) fn trait_scores(facet_scores: &[FacetScore]) -> Vec<TraitScore> {
    PersonalityTrait::ordered()
        .into_iter()
        .filter_map(|personality_trait| {
            let (total, count) = facet_scores
                .iter()
                .filter(|score| score.personality_trait == personality_trait)
                .fold((0.0_f64, 0_u32), |(total, count), score| {
                    (total + score.mean, count + 1)
                });

            if count == 0 {
                return None;
            }

            let mean = total / f64::from(count);
            Some(TraitScore {
                personality_trait,
                facet_count: count,
                mean,
                score: round_tenth(mean),
                normalized: normalize(mean),
            })
        })
        .collect()
}

fn trait_rank(personality_trait: PersonalityTrait) -> usize {
    PersonalityTrait::ordered()
        .iter()
        .position(|candidate| *candidate == personality_trait)
        .unwrap_or(usize::MAX)
}

/// Half away from zero, one decimal.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Maps a 1-5 mean onto 0-100.
pub(crate) fn normalize(mean: f64) -> f64 {
    let span = f64::from(LikertValue::MAX - LikertValue::MIN);
    round_tenth((mean - f64::from(LikertValue::MIN)) / span * 100.0)
}
