//! Deck summary appendix.
//!
//! Aggregate statistics over both decks, rendered as the `--- Analysis ---`
//! section appended after the deck list. Rendered lines never start with an
//! integer, so the importer can never mistake them for card entries.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::cards::CardTable;
use crate::deck::{DeckState, DeckTarget};

/// Aggregates over every entry of both decks.
///
/// Titles that no longer resolve against the table are skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeckAnalysis {
    /// Entries counted, per deck.
    pub starting_count: usize,
    pub purchase_count: usize,
    /// Entry counts per card type, sorted by type name.
    pub type_counts: Vec<(String, usize)>,
    /// Entry counts per cost, sorted by cost; `None` cost groups as 0.
    pub cost_curve: Vec<(i64, usize)>,
    pub total_damage: i64,
    pub total_momentum: i64,
}

/// Compute deck aggregates.
#[must_use]
pub fn analyze(state: &DeckState, table: &CardTable) -> DeckAnalysis {
    let mut type_counts: FxHashMap<String, usize> = FxHashMap::default();
    let mut cost_curve: FxHashMap<i64, usize> = FxHashMap::default();
    let mut total_damage = 0;
    let mut total_momentum = 0;

    let entries = state
        .deck(DeckTarget::Starting)
        .iter()
        .chain(state.deck(DeckTarget::Purchase).iter());
    for title in entries {
        let Some(card) = table.get(title) else {
            continue;
        };
        *type_counts
            .entry(card.card_type.name().to_string())
            .or_default() += 1;
        *cost_curve.entry(card.cost.unwrap_or(0)).or_default() += 1;
        total_damage += card.damage.unwrap_or(0);
        total_momentum += card.momentum.unwrap_or(0);
    }

    DeckAnalysis {
        starting_count: state.deck_count(DeckTarget::Starting),
        purchase_count: state.deck_count(DeckTarget::Purchase),
        type_counts: type_counts.into_iter().sorted().collect(),
        cost_curve: cost_curve.into_iter().sorted().collect(),
        total_damage,
        total_momentum,
    }
}

impl DeckAnalysis {
    /// Render the appendix section.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("--- Analysis ---\n");
        out.push_str(&format!(
            "Entries: starting {}, purchase {}\n",
            self.starting_count, self.purchase_count
        ));
        if !self.type_counts.is_empty() {
            let types = self
                .type_counts
                .iter()
                .map(|(name, count)| format!("{name} {count}"))
                .join(", ");
            out.push_str(&format!("Types: {types}\n"));
        }
        if !self.cost_curve.is_empty() {
            let curve = self
                .cost_curve
                .iter()
                .map(|(cost, count)| format!("cost {cost}: {count}"))
                .join(", ");
            out.push_str(&format!("Curve: {curve}\n"));
        }
        out.push_str(&format!(
            "Totals: damage {}, momentum {}\n",
            self.total_damage, self.total_momentum
        ));
        out
    }
}
