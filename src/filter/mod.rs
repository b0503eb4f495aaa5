//! Filter engine: cascading filter chain, option computation, sort, and
//! pool visibility.
//!
//! ## Cascade
//!
//! The chain has four slots positionally bound to the category order
//! `Card Type -> Keyword -> Trait -> Target`. Setting a slot clears every
//! deeper slot, so a slot is only ever meaningful when all slots before it
//! are set.
//!
//! ## Key Types
//!
//! - `FilterCategory` / `FilterChain`: the cascade
//! - `FilterOptions` / `available_options`: per-category option sets
//! - `SortSpec` / `sort_cards`: stable comparator sort
//! - `visible_pool`: visibility -> chain -> sort composition

pub mod options;
pub mod pool;
pub mod sort;

use serde::{Deserialize, Serialize};

pub use options::{available_options, FilterOptions, MANEUVER_OPTION};
pub use pool::{apply_filter_chain, matches_filter, visible_pool};
pub use sort::{sort_cards, SortDirection, SortField, SortSpec};

/// The four filter categories, in cascade order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterCategory {
    CardType,
    Keyword,
    Trait,
    Target,
}

impl FilterCategory {
    /// All categories, in cascade order.
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::CardType,
        FilterCategory::Keyword,
        FilterCategory::Trait,
        FilterCategory::Target,
    ];

    /// Slot index within the chain.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            FilterCategory::CardType => 0,
            FilterCategory::Keyword => 1,
            FilterCategory::Trait => 2,
            FilterCategory::Target => 3,
        }
    }
}

/// The cascading filter chain: four optional values, positionally bound to
/// `FilterCategory::ALL`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterChain {
    slots: [Option<String>; 4],
}

impl FilterChain {
    /// Create an all-empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a category's filter value, clearing every deeper slot.
    ///
    /// An empty or whitespace-only value clears the slot (and still
    /// cascades).
    pub fn set(&mut self, category: FilterCategory, value: Option<&str>) {
        let index = category.index();
        self.slots[index] = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from);
        self.clear_from(index + 1);
    }

    /// Clear every slot at `index` and deeper.
    pub fn clear_from(&mut self, index: usize) {
        for slot in self.slots.iter_mut().skip(index) {
            *slot = None;
        }
    }

    /// Clear the whole chain.
    pub fn clear_all(&mut self) {
        self.clear_from(0);
    }

    /// Get a category's current value.
    #[must_use]
    pub fn get(&self, category: FilterCategory) -> Option<&str> {
        self.slots[category.index()].as_deref()
    }

    /// True when no slot is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterate `(category, value)` pairs for the set slots, in cascade order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterCategory, &str)> {
        FilterCategory::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|v| (c, v)))
    }
}
