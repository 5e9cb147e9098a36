//! Static item bank and facet map data.

mod parser;

use super::domain::{Facet, FacetId, InventoryVariant, Item};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

const STANDARD_ITEMS: &str = include_str!("../../../data/ipip120_items.csv");
const STANDARD_FACETS: &str = include_str!("../../../data/facets.csv");

#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("failed to read quiz data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid quiz data CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("item {item_id} has unrecognized keyed value '{value}'")]
    InvalidKeyed { item_id: String, value: String },
}

/// Ordered inventory items exactly as supplied by the data file.
#[derive(Debug, Clone, Default)]
pub struct ItemBank {
    items: Vec<Item>,
}

impl ItemBank {
    /// The bundled IPIP-NEO-120 bank; the first sixty items form the quick inventory.
    pub fn standard() -> Result<Self, DataSourceError> {
        Self::from_reader(STANDARD_ITEMS.as_bytes())
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DataSourceError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataSourceError> {
        Ok(Self {
            items: parser::parse_items(reader)?,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items tagged for `variant`, unvalidated. Use the quiz loader for scoring input.
    pub fn items_for(&self, variant: InventoryVariant) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.belongs_to(variant))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Facet id to facet definition lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetMap {
    facets: BTreeMap<FacetId, Facet>,
}

impl FacetMap {
    pub fn standard() -> Result<Self, DataSourceError> {
        Self::from_reader(STANDARD_FACETS.as_bytes())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DataSourceError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataSourceError> {
        Ok(parser::parse_facets(reader)?.into_iter().collect())
    }

    pub fn get(&self, id: &FacetId) -> Option<&Facet> {
        self.facets.get(id)
    }

    pub fn contains(&self, id: &FacetId) -> bool {
        self.facets.contains_key(id)
    }

    pub fn insert(&mut self, facet: Facet) -> Option<Facet> {
        self.facets.insert(facet.id.clone(), facet)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Facet> {
        self.facets.values()
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }
}

impl FromIterator<Facet> for FacetMap {
    fn from_iter<T: IntoIterator<Item = Facet>>(iter: T) -> Self {
        Self {
            facets: iter
                .into_iter()
                .map(|facet| (facet.id.clone(), facet))
                .collect(),
        }
    }
}
