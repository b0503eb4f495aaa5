//! Deck-building session: table + state + store behind one surface.
//!
//! The session owns the loaded card table, the mutable `DeckState`, and the
//! persistence sink. Every mutating operation re-saves the whole state; a
//! store failure is logged and never fails the operation. Import commits
//! atomically: the proposal is parsed in full before any state is touched.

use log::warn;

use crate::cards::{Card, CardTable};
use crate::codec::{analyze, parse_deck_text, serialize_deck, ImportError, ImportWarning};
use crate::filter::{available_options, visible_pool, FilterCategory, FilterOptions, SortSpec};
use crate::persona::PersonaRole;

use super::state::{DeckState, DeckTarget};
use super::store::StateStore;

/// A deck-building session.
pub struct DeckSession<S: StateStore> {
    table: CardTable,
    state: DeckState,
    store: S,
}

impl<S: StateStore> DeckSession<S> {
    /// Start a fresh session with default state.
    #[must_use]
    pub fn new(table: CardTable, store: S) -> Self {
        Self {
            table,
            state: DeckState::new(),
            store,
        }
    }

    /// Start a session from the store's last snapshot.
    ///
    /// A missing or undecodable snapshot falls back to default state; the
    /// decode failure is logged, not surfaced.
    #[must_use]
    pub fn restore(table: CardTable, store: S) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => state,
            Ok(None) => DeckState::new(),
            Err(e) => {
                warn!("discarding unreadable state snapshot: {e}");
                DeckState::new()
            }
        };
        Self {
            table,
            state,
            store,
        }
    }

    #[must_use]
    pub fn table(&self) -> &CardTable {
        &self.table
    }

    #[must_use]
    pub fn state(&self) -> &DeckState {
        &self.state
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.state) {
            warn!("failed to persist deck state: {e}");
        }
    }

    // === Deck operations ===

    /// Append a card title to a deck.
    pub fn add_card(&mut self, title: impl Into<String>, target: DeckTarget) {
        self.state.add_card(title, target);
        self.persist();
    }

    /// Remove one occurrence of a title from a deck.
    pub fn remove_card(&mut self, title: &str, target: DeckTarget) {
        self.state.remove_card(title, target);
        self.persist();
    }

    /// Select a persona by title, or clear the slot with `None`.
    ///
    /// Returns `false` (leaving the slot untouched) when the title is
    /// unknown or the card's type does not match the role.
    pub fn select_persona(&mut self, role: PersonaRole, title: Option<&str>) -> bool {
        let card = match title {
            None => None,
            Some(title) => match self.table.get(title) {
                Some(card) if PersonaRole::of_card_type(&card.card_type) == Some(role) => {
                    Some(card.clone())
                }
                Some(card) => {
                    warn!("{:?} is not a {role} card", card.title);
                    return false;
                }
                None => {
                    warn!("unknown persona card {title:?}");
                    return false;
                }
            },
        };
        self.state.set_persona(role, card);
        self.persist();
        true
    }

    // === View settings ===

    /// Set one filter slot; deeper slots cascade-clear.
    pub fn set_filter(&mut self, category: FilterCategory, value: Option<&str>) {
        self.state.filters.set(category, value);
        self.persist();
    }

    /// Clear the whole filter chain.
    pub fn clear_filters(&mut self) {
        self.state.filters.clear_all();
        self.persist();
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.state.sort = sort;
        self.persist();
    }

    pub fn set_show_zero_cost(&mut self, show: bool) {
        self.state.show_zero_cost = show;
        self.persist();
    }

    pub fn set_show_nonzero_cost(&mut self, show: bool) {
        self.state.show_nonzero_cost = show;
        self.persist();
    }

    // === Derived views ===

    /// Option lists for the filter dropdowns.
    #[must_use]
    pub fn available_options(&self) -> FilterOptions {
        available_options(&self.table)
    }

    /// The displayed pool under the current state and a search query.
    #[must_use]
    pub fn visible_pool(&self, search: &str) -> Vec<&Card> {
        visible_pool(&self.table, &self.state, search)
    }

    // === Codec ===

    /// Export the deck list, with the analysis appendix.
    #[must_use]
    pub fn export_deck_list(&self) -> String {
        let mut text = serialize_deck(&self.state, &self.table);
        text.push_str(&analyze(&self.state, &self.table).render());
        text
    }

    /// Import a deck list, replacing decks, personas, and filters.
    ///
    /// On failure the current state is untouched. On success the parsed
    /// proposal is committed in one step, then persisted; the collected
    /// warnings are returned for the caller to surface.
    pub fn import_deck_list(&mut self, text: &str) -> Result<Vec<ImportWarning>, ImportError> {
        let parsed = parse_deck_text(text, &self.table)?;

        self.state.filters.clear_all();
        self.state.starting = parsed.starting.into_iter().collect();
        self.state.purchase = parsed.purchase.into_iter().collect();
        self.state.wrestler = parsed.wrestler;
        self.state.manager = parsed.manager;
        self.state.call_name = parsed.call_name;
        self.state.faction = parsed.faction;
        self.persist();

        Ok(parsed.warnings)
    }
}
