use super::DataSourceError;
use crate::quiz::domain::{Facet, FacetId, Item, ItemDirection, ItemId};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_items<R: Read>(reader: R) -> Result<Vec<Item>, DataSourceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut items = Vec::new();

    for record in csv_reader.deserialize::<ItemRow>() {
        let row = record?;
        let direction =
            ItemDirection::from_keyed(&row.keyed).ok_or_else(|| DataSourceError::InvalidKeyed {
                item_id: row.id.clone(),
                value: row.keyed.clone(),
            })?;

        items.push(Item {
            id: ItemId(clean_cell(&row.id)),
            text: row.text,
            facet_id: FacetId(clean_cell(&row.facet)),
            direction,
            quick: row.quick,
        });
    }

    Ok(items)
}

pub(crate) fn parse_facets<R: Read>(reader: R) -> Result<Vec<Facet>, DataSourceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut facets = Vec::new();

    for record in csv_reader.deserialize::<FacetRow>() {
        let row = record?;
        facets.push(Facet {
            id: FacetId(clean_cell(&row.id)),
            trait_id: row.trait_id,
            position: row.position,
            label: row.label,
        });
    }

    Ok(facets)
}

#[derive(Debug, Deserialize)]
struct ItemRow {
    id: String,
    facet: String,
    keyed: String,
    #[serde(default, deserialize_with = "flag")]
    quick: bool,
    text: String,
}

#[derive(Debug, Deserialize)]
struct FacetRow {
    id: String,
    #[serde(rename = "trait")]
    trait_id: String,
    position: u8,
    label: String,
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        raw.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref(),
        Some("true" | "yes" | "y" | "1")
    ))
}

fn clean_cell(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}
