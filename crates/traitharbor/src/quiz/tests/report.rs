use super::common::*;
use crate::quiz::{
    score_answers, BandThresholds, FacetId, FacetMap, InventoryVariant, ItemDirection,
    PersonalityTrait, ReportBuilder, ScoreBand, ScoreSheet,
};
use chrono::{TimeZone, Utc};

fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

fn sheet_with_answers(value: u8) -> ScoreSheet {
    let catalog = standard_catalog();
    let items = catalog.items(InventoryVariant::Ipip120);
    score_answers(
        InventoryVariant::Ipip120,
        &answer_all(items, value),
        items,
        catalog.facets(),
    )
    .expect("scores")
}

#[test]
fn report_uses_canonical_trait_order_and_labels() {
    let facets: FacetMap = vec![
        facet("N1", "neuroticism", 1, "Anxiety"),
        facet("A1", "agreeableness", 1, "Trust"),
        facet("E1", "extraversion", 1, "Friendliness"),
        facet("C1", "conscientiousness", 1, "Self-Efficacy"),
        facet("O1", "openness", 1, "Imagination"),
    ]
    .into_iter()
    .collect();
    let items = vec![
        item("n", "N1", ItemDirection::Forward),
        item("a", "A1", ItemDirection::Forward),
        item("e", "E1", ItemDirection::Forward),
        item("c", "C1", ItemDirection::Forward),
        item("o", "O1", ItemDirection::Forward),
    ];
    let sheet = score_answers(InventoryVariant::Ipip60, &answer_all(&items, 4), &items, &facets)
        .expect("scores");

    let report = ReportBuilder::default().build(&sheet, fixed_time());

    let codes: Vec<&str> = report.traits.iter().map(|entry| entry.code).collect();
    assert_eq!(codes, vec!["O", "C", "E", "A", "N"]);
    assert_eq!(report.traits[0].label, "Openness");
    assert_eq!(report.generated_at, fixed_time());
    assert_eq!(report.variant_label, "Quick assessment (IPIP-60)");
}

#[test]
fn report_copies_scores_without_recomputing() {
    let sheet = sheet_with_answers(4);
    let report = ReportBuilder::default().build(&sheet, fixed_time());
    assert_eq!(report.variant, InventoryVariant::Ipip120);
    assert_eq!(report.item_count, 120);

    for entry in &report.traits {
        let score = sheet
            .trait_score(entry.personality_trait)
            .expect("trait present in sheet");
        assert_eq!(entry.score, score.score);
        assert_eq!(entry.normalized, score.normalized);
        assert_eq!(entry.facets.len(), 6);
    }
}

#[test]
fn all_high_answers_band_facets_by_keying() {
    let report = ReportBuilder::default().build(&sheet_with_answers(5), fixed_time());
    let facet_band = |personality_trait: PersonalityTrait, id: &str| {
        report
            .trait_entry(personality_trait)
            .and_then(|entry| {
                entry
                    .facets
                    .iter()
                    .find(|facet| facet.facet_id == FacetId::new(id))
            })
            .map(|facet| (facet.score, facet.band, facet.band_label))
    };

    // Excitement-Seeking is all forward-keyed, Cautiousness all reverse-keyed.
    assert_eq!(
        facet_band(PersonalityTrait::Extraversion, "E5"),
        Some((5.0, ScoreBand::High, "High"))
    );
    assert_eq!(
        facet_band(PersonalityTrait::Conscientiousness, "C6"),
        Some((1.0, ScoreBand::Low, "Low"))
    );
}

#[test]
fn bands_respect_configured_thresholds() {
    let middle = ReportBuilder::default().build(&sheet_with_answers(3), fixed_time());
    assert!(middle
        .traits
        .iter()
        .all(|entry| entry.band == ScoreBand::Average && entry.band_label == "Average"));

    let strict = ReportBuilder::new(BandThresholds::new(3.0, 3.0).expect("valid"));
    let report = strict.build(&sheet_with_answers(3), fixed_time());
    assert!(report.traits.iter().all(|entry| entry.band == ScoreBand::Average));

    let wide = ReportBuilder::new(BandThresholds::new(1.5, 4.5).expect("valid"));
    let report = wide.build(&sheet_with_answers(5), fixed_time());
    let extraversion = report
        .trait_entry(PersonalityTrait::Extraversion)
        .expect("extraversion entry");
    let excitement = extraversion
        .facets
        .iter()
        .find(|facet| facet.facet_id == FacetId::new("E5"))
        .expect("E5 entry");
    assert_eq!(excitement.band, ScoreBand::High);
}

#[test]
fn facet_entries_are_ordered_by_position() {
    let report = ReportBuilder::default().build(&sheet_with_answers(5), fixed_time());
    let neuroticism = report
        .trait_entry(PersonalityTrait::Neuroticism)
        .expect("neuroticism entry");

    let positions: Vec<u8> = neuroticism.facets.iter().map(|facet| facet.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(neuroticism.facets[0].label, "Anxiety");
}

#[test]
fn summary_flattens_trait_entries() {
    let report = ReportBuilder::default().build(&sheet_with_answers(3), fixed_time());
    let summary = report.summary();

    assert_eq!(summary.len(), 5);
    assert_eq!(summary[4].code, "N");
    assert_eq!(summary[4].score, 3.0);
}
