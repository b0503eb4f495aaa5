//! Pool sort order.
//!
//! The comparator is deliberately simple: alphabetical compares lowercased
//! titles, numeric fields compare with missing values as `-1`. The sort is
//! stable, so equal keys keep their load order and results are
//! deterministic.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Field the pool is sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    Alpha,
    Cost,
    Damage,
    Momentum,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A sort order: field plus direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    #[must_use]
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Compare two cards under this spec.
    #[must_use]
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        let ordering = match self.field {
            SortField::Alpha => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::Cost => key(a.cost).cmp(&key(b.cost)),
            SortField::Damage => key(a.damage).cmp(&key(b.damage)),
            SortField::Momentum => key(a.momentum).cmp(&key(b.momentum)),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Missing numeric values sort as -1.
fn key(value: Option<i64>) -> i64 {
    value.unwrap_or(-1)
}

/// Stable-sort a pool in place under the spec.
pub fn sort_cards(cards: &mut [&Card], spec: SortSpec) {
    cards.sort_by(|a, b| spec.compare(a, b));
}
