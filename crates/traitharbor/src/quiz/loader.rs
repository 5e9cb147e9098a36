use super::answers::AnswerSet;
use super::bank::{DataSourceError, FacetMap, ItemBank};
use super::domain::{FacetId, InventoryVariant, Item, ItemId, PersonalityTrait};
use super::scoring::{score_answers, ScoreSheet, ScoringError};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

pub const ITEMS_FILE: &str = "items.csv";
pub const FACETS_FILE: &str = "facets.csv";

/// Data-integrity failure in the item bank or facet map.
///
/// Deployment-blocking: nothing in the crate recovers from it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Missing facet mappings for {}", describe_unmapped(.unmapped))]
    MissingFacetMappings { unmapped: Vec<(ItemId, FacetId)> },
    #[error("facet {facet_id} maps to unknown trait '{trait_id}'")]
    UnknownTrait { facet_id: FacetId, trait_id: String },
    #[error("item id {0} appears more than once in the item bank")]
    DuplicateItem(ItemId),
    #[error("{variant} inventory has no items for {}", .personality_trait.label())]
    UncoveredTrait {
        variant: InventoryVariant,
        personality_trait: PersonalityTrait,
    },
    #[error("item {item_id} is not part of the {variant} inventory")]
    ItemOutsideVariant {
        variant: InventoryVariant,
        item_id: ItemId,
    },
}

fn describe_unmapped(unmapped: &[(ItemId, FacetId)]) -> String {
    unmapped
        .iter()
        .map(|(item, facet)| format!("{item} ({facet})"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns the ordered items of `variant` after checking the whole bank
/// against `facets`. Never returns a partially valid list.
pub fn load_quiz_items(
    variant: InventoryVariant,
    bank: &ItemBank,
    facets: &FacetMap,
) -> Result<Vec<Item>, ConfigurationError> {
    let result = validate_items(bank.items(), facets).and_then(|()| {
        let items: Vec<Item> = bank.items_for(variant).cloned().collect();
        ensure_traits_covered(variant, &items, facets)?;
        Ok(items)
    });

    match result {
        Ok(items) => {
            debug!(%variant, items = items.len(), "quiz items loaded");
            Ok(items)
        }
        Err(err) => {
            warn!(%variant, error = %err, "quiz data failed integrity check");
            Err(err)
        }
    }
}

/// Referential integrity between `items` and `facets`.
pub(crate) fn validate_items(items: &[Item], facets: &FacetMap) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(&item.id) {
            return Err(ConfigurationError::DuplicateItem(item.id.clone()));
        }
    }

    let unmapped: Vec<(ItemId, FacetId)> = items
        .iter()
        .filter(|item| !facets.contains(&item.facet_id))
        .map(|item| (item.id.clone(), item.facet_id.clone()))
        .collect();
    if !unmapped.is_empty() {
        return Err(ConfigurationError::MissingFacetMappings { unmapped });
    }

    for facet in facets.iter() {
        if facet.personality_trait().is_none() {
            return Err(ConfigurationError::UnknownTrait {
                facet_id: facet.id.clone(),
                trait_id: facet.trait_id.clone(),
            });
        }
    }

    Ok(())
}

fn ensure_traits_covered(
    variant: InventoryVariant,
    items: &[Item],
    facets: &FacetMap,
) -> Result<(), ConfigurationError> {
    let covered: HashSet<PersonalityTrait> = items
        .iter()
        .filter_map(|item| facets.get(&item.facet_id))
        .filter_map(|facet| facet.personality_trait())
        .collect();

    match PersonalityTrait::ordered()
        .into_iter()
        .find(|candidate| !covered.contains(candidate))
    {
        Some(personality_trait) => Err(ConfigurationError::UncoveredTrait {
            variant,
            personality_trait,
        }),
        None => Ok(()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Validated, read-only quiz data shared across scoring calls.
#[derive(Debug, Clone)]
pub struct QuizCatalog {
    facets: FacetMap,
    full: Vec<Item>,
    quick: Vec<Item>,
}

impl QuizCatalog {
    pub fn load(bank: &ItemBank, facets: FacetMap) -> Result<Self, ConfigurationError> {
        let full = load_quiz_items(InventoryVariant::Ipip120, bank, &facets)?;
        let quick = load_quiz_items(InventoryVariant::Ipip60, bank, &facets)?;
        Ok(Self { facets, full, quick })
    }

    /// Bundled IPIP-NEO-120 data.
    pub fn standard() -> Result<Self, CatalogError> {
        let bank = ItemBank::standard()?;
        let facets = FacetMap::standard()?;
        Ok(Self::load(&bank, facets)?)
    }

    /// Loads `items.csv` and `facets.csv` from `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let bank = ItemBank::from_path(dir.join(ITEMS_FILE))?;
        let facets = FacetMap::from_path(dir.join(FACETS_FILE))?;
        Ok(Self::load(&bank, facets)?)
    }

    pub fn items(&self, variant: InventoryVariant) -> &[Item] {
        match variant {
            InventoryVariant::Ipip120 => &self.full,
            InventoryVariant::Ipip60 => &self.quick,
        }
    }

    pub fn facets(&self) -> &FacetMap {
        &self.facets
    }

    pub fn score(
        &self,
        variant: InventoryVariant,
        answers: &AnswerSet,
    ) -> Result<ScoreSheet, ScoringError> {
        score_answers(variant, answers, self.items(variant), &self.facets)
    }
}
