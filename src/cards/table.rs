//! Card table: title-indexed card storage plus the keyword dictionary.
//!
//! The table is built once at load time and read-only afterwards. Lookup is
//! by exact title; iteration yields cards in load order, which is also the
//! tie-break order for the pool's stable sort.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// All loaded cards plus the keyword dictionary.
///
/// Titles are unique: the first insert wins and later duplicates are
/// refused (the loader records a warning for them).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardTable {
    cards: Vec<Card>,
    by_title: FxHashMap<String, usize>,
    keywords: FxHashMap<String, String>,
}

impl CardTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a card. Returns `false` without inserting when the title is
    /// already present.
    pub fn insert(&mut self, card: Card) -> bool {
        if self.by_title.contains_key(&card.title) {
            return false;
        }
        self.by_title.insert(card.title.clone(), self.cards.len());
        self.cards.push(card);
        true
    }

    /// Look a card up by exact title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Card> {
        self.by_title.get(title).map(|&i| &self.cards[i])
    }

    /// Check whether a title is present.
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no cards are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find cards matching a predicate, in load order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    /// Set the keyword dictionary.
    pub fn set_keywords(&mut self, keywords: FxHashMap<String, String>) {
        self.keywords = keywords;
    }

    /// Look up a keyword definition.
    #[must_use]
    pub fn keyword_definition(&self, name: &str) -> Option<&str> {
        self.keywords.get(name).map(String::as_str)
    }
}
