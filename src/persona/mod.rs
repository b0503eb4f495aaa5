//! Persona and kit classification.
//!
//! Personas are the four special card types a deck selects once each:
//! Wrestler, Manager, Call Name, Faction. Kit cards are regular cards bound
//! to one persona via source columns; they never appear in the general pool.
//!
//! Both classifiers are pure total functions over a card.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType};

/// One of the four persona slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonaRole {
    Wrestler,
    Manager,
    CallName,
    Faction,
}

impl PersonaRole {
    /// All roles, in slot order.
    pub const ALL: [PersonaRole; 4] = [
        PersonaRole::Wrestler,
        PersonaRole::Manager,
        PersonaRole::CallName,
        PersonaRole::Faction,
    ];

    /// Display name, identical to the card-type spelling.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PersonaRole::Wrestler => "Wrestler",
            PersonaRole::Manager => "Manager",
            PersonaRole::CallName => "Call Name",
            PersonaRole::Faction => "Faction",
        }
    }

    /// The title suffix this role contributes (`" Wrestler"` etc.).
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            PersonaRole::Wrestler => " Wrestler",
            PersonaRole::Manager => " Manager",
            PersonaRole::CallName => " Call Name",
            PersonaRole::Faction => " Faction",
        }
    }

    /// The role a card type selects into, if any.
    #[must_use]
    pub fn of_card_type(card_type: &CardType) -> Option<PersonaRole> {
        match card_type {
            CardType::Wrestler => Some(PersonaRole::Wrestler),
            CardType::Manager => Some(PersonaRole::Manager),
            CardType::CallName => Some(PersonaRole::CallName),
            CardType::Faction => Some(PersonaRole::Faction),
            _ => None,
        }
    }
}

impl std::fmt::Display for PersonaRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Strip one trailing role suffix from a name.
///
/// Only the first matching suffix (in slot order) is removed, once.
/// Idempotent: a stripped name no longer ends in any role suffix unless the
/// persona's own name genuinely does.
#[must_use]
pub fn strip_role_suffix(name: &str) -> &str {
    for role in PersonaRole::ALL {
        if let Some(stripped) = name.strip_suffix(role.suffix()) {
            return stripped;
        }
    }
    name
}

/// The persona display name a card is tied to, if any.
///
/// Priority: the `Starting` column, then `Signature For`, then - for persona
/// cards themselves - the card's own title. The matched source string has
/// one role suffix stripped.
#[must_use]
pub fn kit_persona(card: &Card) -> Option<String> {
    if let Some(s) = card.column_text("Starting") {
        return Some(strip_role_suffix(s).to_string());
    }
    if let Some(s) = card.column_text("Signature For") {
        return Some(strip_role_suffix(s).to_string());
    }
    if card.card_type.is_persona() {
        return Some(strip_role_suffix(&card.title).to_string());
    }
    None
}

/// True iff the card's `Wrestler Kit` column is the string `"TRUE"`,
/// case-insensitively.
#[must_use]
pub fn is_kit_card(card: &Card) -> bool {
    card.column_text("Wrestler Kit")
        .is_some_and(|v| v.eq_ignore_ascii_case("TRUE"))
}
