use super::domain::{Item, ItemId, LikertValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One response captured by the quiz flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub item_id: ItemId,
    pub value: LikertValue,
}

/// Responses collected during one quiz session, keyed by item id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<ItemId, LikertValue>,
}

/// How far a session has progressed through an inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerProgress {
    pub answered: usize,
    pub total: usize,
}

impl AnswerProgress {
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an answer, returning the value it replaced.
    pub fn record(&mut self, item_id: ItemId, value: LikertValue) -> Option<LikertValue> {
        self.answers.insert(item_id, value)
    }

    pub fn get(&self, item_id: &ItemId) -> Option<LikertValue> {
        self.answers.get(item_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, LikertValue)> {
        self.answers.iter().map(|(id, value)| (id, *value))
    }

    /// Ids of `items` without an answer, in item order.
    pub fn missing_for(&self, items: &[Item]) -> Vec<ItemId> {
        items
            .iter()
            .filter(|item| !self.answers.contains_key(&item.id))
            .map(|item| item.id.clone())
            .collect()
    }

    pub fn progress(&self, items: &[Item]) -> AnswerProgress {
        let answered = items
            .iter()
            .filter(|item| self.answers.contains_key(&item.id))
            .count();
        AnswerProgress {
            answered,
            total: items.len(),
        }
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = Answer>>(iter: T) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|answer| (answer.item_id, answer.value))
                .collect(),
        }
    }
}

impl FromIterator<(ItemId, LikertValue)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (ItemId, LikertValue)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
