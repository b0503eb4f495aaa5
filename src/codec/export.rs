//! Deck-list export.
//!
//! Line format, in order: the four persona lines, the sorted `Kit<N>`
//! lines, then the two deck sections with grouped `<n>x` entries.
//!
//! Wrestler and Manager lines print the kit persona name (title with the
//! role suffix stripped); Call Name and Faction lines print the selected
//! card's raw title. The asymmetry is deliberate and pinned by test.

use itertools::Itertools;

use crate::cards::{Card, CardTable};
use crate::deck::{DeckState, DeckTarget, PURCHASE_DECK_SOFT_CAP, STARTING_DECK_CAP};
use crate::persona::{is_kit_card, kit_persona, PersonaRole};

/// Serialize deck state to deck-list text.
#[must_use]
pub fn serialize_deck(state: &DeckState, table: &CardTable) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Wrestler: {}\n",
        state
            .persona(PersonaRole::Wrestler)
            .and_then(kit_persona)
            .unwrap_or_else(|| "None".to_string())
    ));
    out.push_str(&format!(
        "Manager: {}\n",
        state
            .persona(PersonaRole::Manager)
            .and_then(kit_persona)
            .unwrap_or_else(|| "None".to_string())
    ));
    out.push_str(&format!(
        "Call Name: {}\n",
        state
            .persona(PersonaRole::CallName)
            .map(|c| c.title.clone())
            .unwrap_or_else(|| "None".to_string())
    ));
    out.push_str(&format!(
        "Faction: {}\n",
        state
            .persona(PersonaRole::Faction)
            .map(|c| c.title.clone())
            .unwrap_or_else(|| "None".to_string())
    ));

    for (n, card) in active_kit_cards(state, table).into_iter().enumerate() {
        let persona = kit_persona(card)
            .or_else(|| card.column_text("Signature For").map(String::from))
            .unwrap_or_else(|| "Unknown".to_string());
        out.push_str(&format!("Kit{}: {} ({persona})\n", n + 1, card.title));
    }

    out.push_str(&format!(
        "--- Starting Deck ({}/{STARTING_DECK_CAP}) ---\n",
        state.deck_count(DeckTarget::Starting)
    ));
    push_deck_section(&mut out, state, DeckTarget::Starting, table);

    out.push_str(&format!(
        "--- Purchase Deck ({}/{PURCHASE_DECK_SOFT_CAP}+) ---\n",
        state.deck_count(DeckTarget::Purchase)
    ));
    push_deck_section(&mut out, state, DeckTarget::Purchase, table);

    out
}

/// Kit cards bound to a currently selected persona, sorted by title.
fn active_kit_cards<'a>(state: &DeckState, table: &'a CardTable) -> Vec<&'a Card> {
    let persona_titles = state.persona_titles();
    table
        .find(|card| {
            is_kit_card(card)
                && !card.card_type.is_persona()
                && card
                    .column_text("Signature For")
                    .is_some_and(|s| persona_titles.contains(&s))
        })
        .sorted_by(|a, b| a.title.cmp(&b.title))
        .collect()
}

/// Emit one deck's grouped entries, sorted by display line.
///
/// Multiplicity is counted on identical display lines (title plus optional
/// kit bracket), which coincide exactly when titles do.
fn push_deck_section(out: &mut String, state: &DeckState, target: DeckTarget, table: &CardTable) {
    let lines = state.deck(target).iter().map(|title| display_line(title, table));
    for (count, line) in lines.sorted().dedup_with_count() {
        out.push_str(&format!("{count}x {line}\n"));
    }
}

/// Display line for one deck entry: the title, plus a ` [persona]` suffix
/// for non-persona cards with a kit persona.
fn display_line(title: &str, table: &CardTable) -> String {
    match table.get(title) {
        Some(card) if !card.card_type.is_persona() => match kit_persona(card) {
            Some(persona) => format!("{title} [{persona}]"),
            None => title.to_string(),
        },
        _ => title.to_string(),
    }
}
