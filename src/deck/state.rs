//! Deck state: the two deck sequences, persona slots, and view settings.
//!
//! Uses `im` persistent vectors for the deck sequences: cloning the whole
//! state is O(1), which keeps persistence snapshots and the import codec's
//! apply-on-success swap cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::filter::{FilterChain, SortSpec};
use crate::persona::PersonaRole;

/// Advisory starting-deck capacity, shown as `x/24`.
pub const STARTING_DECK_CAP: usize = 24;

/// Advisory purchase-deck capacity, shown as `x/36+`.
pub const PURCHASE_DECK_SOFT_CAP: usize = 36;

/// Which deck an operation addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckTarget {
    Starting,
    Purchase,
}

/// The whole mutable selection state of a deck-building session.
///
/// Deck sequences hold card titles; duplicates are multiset membership and
/// insertion order is preserved for display. Capacities are advisory only:
/// no operation here blocks an over-capacity add.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckState {
    pub starting: Vector<String>,
    pub purchase: Vector<String>,

    pub wrestler: Option<Card>,
    pub manager: Option<Card>,
    pub call_name: Option<Card>,
    pub faction: Option<Card>,

    pub filters: FilterChain,
    pub sort: SortSpec,

    pub show_zero_cost: bool,
    pub show_nonzero_cost: bool,
}

impl Default for DeckState {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckState {
    /// Default state: empty decks, no personas, empty chain, alphabetical
    /// ascending sort, both cost toggles on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            starting: Vector::new(),
            purchase: Vector::new(),
            wrestler: None,
            manager: None,
            call_name: None,
            faction: None,
            filters: FilterChain::new(),
            sort: SortSpec::default(),
            show_zero_cost: true,
            show_nonzero_cost: true,
        }
    }

    /// The sequence for a deck target.
    #[must_use]
    pub fn deck(&self, target: DeckTarget) -> &Vector<String> {
        match target {
            DeckTarget::Starting => &self.starting,
            DeckTarget::Purchase => &self.purchase,
        }
    }

    fn deck_mut(&mut self, target: DeckTarget) -> &mut Vector<String> {
        match target {
            DeckTarget::Starting => &mut self.starting,
            DeckTarget::Purchase => &mut self.purchase,
        }
    }

    /// Current entry count of a deck.
    #[must_use]
    pub fn deck_count(&self, target: DeckTarget) -> usize {
        self.deck(target).len()
    }

    /// Append a title to a deck. Over-capacity adds are accepted.
    pub fn add_card(&mut self, title: impl Into<String>, target: DeckTarget) {
        self.deck_mut(target).push_back(title.into());
    }

    /// Remove the first occurrence of a title from a deck.
    /// Absent titles are a no-op.
    pub fn remove_card(&mut self, title: &str, target: DeckTarget) {
        let deck = self.deck_mut(target);
        if let Some(index) = deck.iter().position(|t| t == title) {
            deck.remove(index);
        }
    }

    /// The selected persona card for a role.
    #[must_use]
    pub fn persona(&self, role: PersonaRole) -> Option<&Card> {
        match role {
            PersonaRole::Wrestler => self.wrestler.as_ref(),
            PersonaRole::Manager => self.manager.as_ref(),
            PersonaRole::CallName => self.call_name.as_ref(),
            PersonaRole::Faction => self.faction.as_ref(),
        }
    }

    /// Set or clear a persona slot.
    pub fn set_persona(&mut self, role: PersonaRole, card: Option<Card>) {
        match role {
            PersonaRole::Wrestler => self.wrestler = card,
            PersonaRole::Manager => self.manager = card,
            PersonaRole::CallName => self.call_name = card,
            PersonaRole::Faction => self.faction = card,
        }
    }

    /// Titles of all currently selected personas, in slot order.
    #[must_use]
    pub fn persona_titles(&self) -> Vec<&str> {
        PersonaRole::ALL
            .into_iter()
            .filter_map(|role| self.persona(role).map(|c| c.title.as_str()))
            .collect()
    }
}
