use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single inventory question (e.g. `q001`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a facet (e.g. `N1` for Anxiety).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FacetId(pub String);

impl FacetId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FacetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The five broad personality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl PersonalityTrait {
    /// Canonical presentation order (O, C, E, A, N).
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Openness,
            Self::Conscientiousness,
            Self::Extraversion,
            Self::Agreeableness,
            Self::Neuroticism,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Openness => "Openness",
            Self::Conscientiousness => "Conscientiousness",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agreeableness",
            Self::Neuroticism => "Neuroticism",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Openness => "O",
            Self::Conscientiousness => "C",
            Self::Extraversion => "E",
            Self::Agreeableness => "A",
            Self::Neuroticism => "N",
        }
    }

    /// Resolves a trait from its name or one-letter code, ignoring case.
    pub fn from_id(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered().into_iter().find(|candidate| {
            normalized == candidate.label().to_ascii_lowercase()
                || normalized == candidate.code().to_ascii_lowercase()
        })
    }
}

/// Scoring direction of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemDirection {
    Forward,
    Reverse,
}

impl ItemDirection {
    /// Parses the keyed column of the item bank (`+`/`-` or the full word).
    pub fn from_keyed(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "+" | "forward" | "plus" => Some(Self::Forward),
            "-" | "reverse" | "minus" => Some(Self::Reverse),
            _ => None,
        }
    }

    pub fn normalize(self, value: LikertValue) -> LikertValue {
        match self {
            Self::Forward => value,
            Self::Reverse => value.reversed(),
        }
    }
}

/// Inventory length offered by the quiz flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryVariant {
    #[serde(rename = "ipip120")]
    Ipip120,
    #[serde(rename = "ipip60")]
    Ipip60,
}

impl InventoryVariant {
    pub const fn ordered() -> [Self; 2] {
        [Self::Ipip120, Self::Ipip60]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Ipip120 => "ipip120",
            Self::Ipip60 => "ipip60",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ipip120 => "Full assessment (IPIP-120)",
            Self::Ipip60 => "Quick assessment (IPIP-60)",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ipip120" | "full" => Some(Self::Ipip120),
            "ipip60" | "quick" => Some(Self::Ipip60),
            _ => None,
        }
    }
}

impl fmt::Display for InventoryVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A single inventory question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub facet_id: FacetId,
    pub direction: ItemDirection,
    /// Whether the item is part of the quick (IPIP-60) inventory as well.
    pub quick: bool,
}

impl Item {
    pub fn belongs_to(&self, variant: InventoryVariant) -> bool {
        match variant {
            InventoryVariant::Ipip120 => true,
            InventoryVariant::Ipip60 => self.quick,
        }
    }
}

/// Facet definition as supplied by the facet map data.
///
/// `trait_id` stays in its raw form; the quiz loader is the gate that
/// resolves it to a [`PersonalityTrait`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    pub id: FacetId,
    pub trait_id: String,
    pub position: u8,
    pub label: String,
}

impl Facet {
    pub fn personality_trait(&self) -> Option<PersonalityTrait> {
        PersonalityTrait::from_id(&self.trait_id)
    }
}

/// A single Likert response, guaranteed to lie within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LikertValue(u8);

impl LikertValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, InvalidLikertValue> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidLikertValue(value))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Mirror image on the 1..=5 scale (`6 - v`).
    pub const fn reversed(self) -> Self {
        Self(Self::MIN + Self::MAX - self.0)
    }
}

impl TryFrom<u8> for LikertValue {
    type Error = InvalidLikertValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LikertValue> for u8 {
    fn from(value: LikertValue) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("answer value {0} is outside the 1-5 Likert scale")]
pub struct InvalidLikertValue(pub u8);
