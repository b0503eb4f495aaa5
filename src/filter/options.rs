//! Per-category filter option computation.
//!
//! Options are derived from the full card table, deduplicated, and
//! lexicographically sorted. The card-type list gets the synthetic
//! `"Maneuver"` aggregate prepended whenever any maneuver type is present.

use rustc_hash::FxHashSet;

use crate::cards::CardTable;

/// The synthetic card-type option matching Strike, Grapple, and Submission.
pub const MANEUVER_OPTION: &str = "Maneuver";

/// The name of the trait whose values feed the Target category.
pub const TARGET_TRAIT: &str = "Target";

/// Sorted, deduplicated option lists for the four filter categories.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOptions {
    /// Distinct card types, sorted; `"Maneuver"` first when applicable.
    pub card_types: Vec<String>,
    /// Distinct keyword names.
    pub keywords: Vec<String>,
    /// Distinct trait names, excluding `"Target"`.
    pub traits: Vec<String>,
    /// Distinct values of `"Target"` traits.
    pub targets: Vec<String>,
}

/// Compute the option lists for the current table.
#[must_use]
pub fn available_options(table: &CardTable) -> FilterOptions {
    let mut card_types = FxHashSet::default();
    let mut keywords = FxHashSet::default();
    let mut traits = FxHashSet::default();
    let mut targets = FxHashSet::default();
    let mut has_maneuver = false;

    for card in table.iter() {
        has_maneuver |= card.card_type.is_maneuver();
        card_types.insert(card.card_type.name().to_string());

        for keyword in &card.text.keywords {
            keywords.insert(keyword.name.clone());
        }
        for t in &card.text.traits {
            if t.name == TARGET_TRAIT {
                if let Some(value) = &t.value {
                    targets.insert(value.trim().to_string());
                }
            } else {
                traits.insert(t.name.clone());
            }
        }
    }

    let mut card_types = sorted(card_types);
    if has_maneuver {
        card_types.insert(0, MANEUVER_OPTION.to_string());
    }

    FilterOptions {
        card_types,
        keywords: sorted(keywords),
        traits: sorted(traits),
        targets: sorted(targets),
    }
}

fn sorted(set: FxHashSet<String>) -> Vec<String> {
    let mut v: Vec<String> = set.into_iter().collect();
    v.sort();
    v
}
