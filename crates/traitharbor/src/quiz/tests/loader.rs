use super::common::*;
use crate::quiz::{
    load_quiz_items, ConfigurationError, FacetId, FacetMap, InventoryVariant, ItemBank,
    ItemDirection, ItemId, PersonalityTrait, QuizCatalog,
};

#[test]
fn standard_data_loads_and_every_facet_resolves() {
    let bank = standard_bank();
    let facets = standard_facets();

    for variant in InventoryVariant::ordered() {
        let items = load_quiz_items(variant, &bank, &facets).expect("standard data is valid");
        let expected = match variant {
            InventoryVariant::Ipip120 => 120,
            InventoryVariant::Ipip60 => 60,
        };
        assert_eq!(items.len(), expected);
        assert!(items.iter().all(|item| {
            facets
                .get(&item.facet_id)
                .and_then(|facet| facet.personality_trait())
                .is_some()
        }));
    }
}

#[test]
fn quick_inventory_keeps_two_items_per_facet_in_bank_order() {
    let items = load_quiz_items(InventoryVariant::Ipip60, &standard_bank(), &standard_facets())
        .expect("loads");

    assert_eq!(items.first().map(|item| item.id.clone()), Some(ItemId::new("q001")));
    assert_eq!(items.last().map(|item| item.id.clone()), Some(ItemId::new("q060")));

    let anxiety = items
        .iter()
        .filter(|item| item.facet_id == FacetId::new("N1"))
        .count();
    assert_eq!(anxiety, 2);
}

#[test]
fn empty_facet_map_fails_closed_with_warning() {
    let bank = standard_bank();

    let (result, logs) = capture_warnings(|| {
        load_quiz_items(InventoryVariant::Ipip120, &bank, &FacetMap::empty())
    });

    let error = result.expect_err("empty facet map must be rejected");
    assert!(error.to_string().starts_with("Missing facet mappings"));
    match error {
        ConfigurationError::MissingFacetMappings { unmapped } => assert_eq!(unmapped.len(), 120),
        other => panic!("expected missing mappings, got {other:?}"),
    }
    assert!(logs.contains("WARN"), "warning emitted: {logs}");
    assert!(logs.contains("Missing facet mappings"), "warning names cause: {logs}");
}

#[test]
fn orphaned_item_outside_variant_still_fails() {
    let mut items = standard_bank().items().to_vec();
    let mut orphan = item("q999", "X9", ItemDirection::Forward);
    orphan.quick = false;
    items.push(orphan);
    let bank = ItemBank::from_items(items);

    let error = load_quiz_items(InventoryVariant::Ipip60, &bank, &standard_facets())
        .expect_err("orphan rejected");
    assert_eq!(
        error,
        ConfigurationError::MissingFacetMappings {
            unmapped: vec![(ItemId::new("q999"), FacetId::new("X9"))],
        }
    );
}

#[test]
fn unknown_trait_is_rejected() {
    let mut facets = standard_facets();
    facets.insert(facet("N1", "honesty", 1, "Anxiety"));

    let (result, logs) = capture_warnings(|| {
        load_quiz_items(InventoryVariant::Ipip120, &standard_bank(), &facets)
    });

    match result {
        Err(ConfigurationError::UnknownTrait { facet_id, trait_id }) => {
            assert_eq!(facet_id, FacetId::new("N1"));
            assert_eq!(trait_id, "honesty");
        }
        other => panic!("expected unknown trait, got {other:?}"),
    }
    assert!(logs.contains("unknown trait"));
}

#[test]
fn duplicate_item_ids_are_rejected() {
    let bank = ItemBank::from_items(vec![
        item("a1", "N1", ItemDirection::Forward),
        item("a1", "E1", ItemDirection::Forward),
    ]);

    let error = load_quiz_items(InventoryVariant::Ipip120, &bank, &standard_facets())
        .expect_err("duplicate rejected");
    assert_eq!(error, ConfigurationError::DuplicateItem(ItemId::new("a1")));
}

#[test]
fn variant_missing_a_trait_is_rejected() {
    let bank = ItemBank::from_items(vec![
        item("a1", "O1", ItemDirection::Forward),
        item("a2", "C1", ItemDirection::Forward),
        item("a3", "E1", ItemDirection::Forward),
        item("a4", "A1", ItemDirection::Forward),
    ]);

    let error = load_quiz_items(InventoryVariant::Ipip120, &bank, &standard_facets())
        .expect_err("neuroticism uncovered");
    assert_eq!(
        error,
        ConfigurationError::UncoveredTrait {
            variant: InventoryVariant::Ipip120,
            personality_trait: PersonalityTrait::Neuroticism,
        }
    );
}

#[test]
fn catalog_exposes_both_variants() {
    let catalog = QuizCatalog::load(&standard_bank(), standard_facets()).expect("valid");
    assert_eq!(catalog.items(InventoryVariant::Ipip120).len(), 120);
    assert_eq!(catalog.items(InventoryVariant::Ipip60).len(), 60);
    assert_eq!(catalog.facets().len(), 30);
}
