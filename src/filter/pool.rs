//! Visible-pool computation: visibility rules, the filter chain, and the
//! final sort.

use crate::cards::{Card, CardTable, CardType};
use crate::deck::DeckState;
use crate::persona::is_kit_card;

use super::options::{MANEUVER_OPTION, TARGET_TRAIT};
use super::sort::sort_cards;
use super::{FilterCategory, FilterChain};

/// Does a card pass one category's filter predicate?
#[must_use]
pub fn matches_filter(card: &Card, category: FilterCategory, value: &str) -> bool {
    let value = value.trim();
    match category {
        FilterCategory::CardType => {
            if value == MANEUVER_OPTION {
                card.card_type.is_maneuver()
            } else {
                card.card_type.name() == value
            }
        }
        FilterCategory::Keyword => card.text.keywords.iter().any(|k| k.name == value),
        FilterCategory::Trait => card.text.traits.iter().any(|t| t.name == value),
        FilterCategory::Target => card.text.traits.iter().any(|t| {
            t.name == TARGET_TRAIT && t.value.as_deref().map(str::trim) == Some(value)
        }),
    }
}

/// Apply the chain in category order. Unset slots are no-ops.
#[must_use]
pub fn apply_filter_chain<'a>(cards: Vec<&'a Card>, chain: &FilterChain) -> Vec<&'a Card> {
    let mut pool = cards;
    for (category, value) in chain.iter() {
        pool.retain(|card| matches_filter(card, category, value));
    }
    pool
}

/// Pool visibility: personas and kit cards never appear, the cost toggles
/// gate zero/non-zero cost, and the search query substring-matches title or
/// raw text case-insensitively.
fn is_pool_visible(card: &Card, state: &DeckState, search: &str) -> bool {
    if matches!(card.card_type, CardType::Wrestler | CardType::Manager) || is_kit_card(card) {
        return false;
    }

    // Missing cost counts as zero.
    let zero_cost = card.cost.unwrap_or(0) == 0;
    if zero_cost && !state.show_zero_cost {
        return false;
    }
    if !zero_cost && !state.show_nonzero_cost {
        return false;
    }

    let query = search.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    card.title.to_lowercase().contains(&query) || card.text.raw.to_lowercase().contains(&query)
}

/// The displayed pool: visibility, then the cascading chain, then the sort.
///
/// Total over empty inputs; never fails.
#[must_use]
pub fn visible_pool<'a>(table: &'a CardTable, state: &DeckState, search: &str) -> Vec<&'a Card> {
    let visible: Vec<&Card> = table
        .find(|card| is_pool_visible(card, state, search))
        .collect();
    let mut pool = apply_filter_chain(visible, &state.filters);
    sort_cards(&mut pool, state.sort);
    pool
}
