//! Visible-pool pipeline tests.
//!
//! These exercise the composition the UI consumes: pool visibility rules,
//! the cascading filter chain, and the stable sort, over one shared table.

use ringside::{
    available_options, visible_pool, Card, CardTable, CardType, DeckState, FilterCategory,
    SortDirection, SortField, SortSpec, Trait,
};

fn sample_table() -> CardTable {
    let mut table = CardTable::new();
    table.insert(
        Card::new("Jab", CardType::Strike)
            .with_cost(0)
            .with_damage(1)
            .with_keyword("Quick")
            .with_trait(Trait::new("Target").with_value("Head")),
    );
    table.insert(
        Card::new("Suplex", CardType::Grapple)
            .with_cost(2)
            .with_damage(3)
            .with_keyword("Heavy")
            .with_trait(Trait::new("Target").with_value("Back")),
    );
    table.insert(
        Card::new("Armbar", CardType::Submission)
            .with_cost(3)
            .with_damage(2)
            .with_trait(Trait::new("Signature")),
    );
    table.insert(
        Card::new("Taunt", CardType::Action)
            .with_cost(0)
            .with_momentum(2)
            .with_raw_text("Gain 2 momentum."),
    );
    table.insert(Card::new("Big Bruiser Wrestler", CardType::Wrestler));
    table.insert(Card::new("The Shark Manager", CardType::Manager));
    table.insert(
        Card::new("Signature Slam", CardType::Grapple)
            .with_cost(1)
            .with_column("Wrestler Kit", "TRUE")
            .with_column("Signature For", "Big Bruiser Wrestler"),
    );
    table
}

fn titles(pool: &[&Card]) -> Vec<String> {
    pool.iter().map(|c| c.title.clone()).collect()
}

/// Wrestlers, managers, and kit cards never appear in the general pool.
#[test]
fn test_personas_and_kit_cards_excluded() {
    let table = sample_table();
    let pool = visible_pool(&table, &DeckState::new(), "");

    let pool_titles = titles(&pool);
    assert!(!pool_titles.contains(&"Big Bruiser Wrestler".to_string()));
    assert!(!pool_titles.contains(&"The Shark Manager".to_string()));
    assert!(!pool_titles.contains(&"Signature Slam".to_string()));
    assert_eq!(pool.len(), 4);
}

/// The zero-cost toggle hides zero-cost cards, the non-zero toggle hides
/// the rest.
#[test]
fn test_cost_toggles() {
    let table = sample_table();

    let mut state = DeckState::new();
    state.show_zero_cost = false;
    let pool_titles = titles(&visible_pool(&table, &state, ""));
    assert!(!pool_titles.contains(&"Jab".to_string()));
    assert!(!pool_titles.contains(&"Taunt".to_string()));
    assert!(pool_titles.contains(&"Suplex".to_string()));

    let mut state = DeckState::new();
    state.show_nonzero_cost = false;
    let pool_titles = titles(&visible_pool(&table, &state, ""));
    assert!(pool_titles.contains(&"Jab".to_string()));
    assert!(pool_titles.contains(&"Taunt".to_string()));
    assert!(!pool_titles.contains(&"Suplex".to_string()));

    // Both toggles off hide everything.
    let mut state = DeckState::new();
    state.show_zero_cost = false;
    state.show_nonzero_cost = false;
    assert!(visible_pool(&table, &state, "").is_empty());
}

/// Search is a case-insensitive substring over title or raw text.
#[test]
fn test_search_matches_title_or_text() {
    let table = sample_table();
    let state = DeckState::new();

    assert_eq!(titles(&visible_pool(&table, &state, "suplex")), vec!["Suplex"]);
    // "momentum" only appears in Taunt's rules text.
    assert_eq!(
        titles(&visible_pool(&table, &state, "MOMENTUM")),
        vec!["Taunt"]
    );
    assert!(visible_pool(&table, &state, "zzz").is_empty());
}

/// The Maneuver aggregate matches Strike, Grapple, and Submission.
#[test]
fn test_maneuver_aggregate() {
    let table = sample_table();
    let mut state = DeckState::new();
    state.filters.set(FilterCategory::CardType, Some("Maneuver"));

    let pool_titles = titles(&visible_pool(&table, &state, ""));
    assert_eq!(pool_titles, vec!["Armbar", "Jab", "Suplex"]);
}

/// Clearing a deeper filter yields a superset of the filtered pool.
#[test]
fn test_cascade_superset() {
    let table = sample_table();

    let mut filtered = DeckState::new();
    filtered.filters.set(FilterCategory::CardType, Some("Maneuver"));
    filtered.filters.set(FilterCategory::Keyword, Some("Heavy"));
    let narrow = titles(&visible_pool(&table, &filtered, ""));
    assert_eq!(narrow, vec!["Suplex"]);

    filtered.filters.clear_from(FilterCategory::Keyword.index());
    let wide = titles(&visible_pool(&table, &filtered, ""));
    for title in &narrow {
        assert!(wide.contains(title));
    }
    assert!(wide.len() > narrow.len());
}

/// Changing an upstream filter resets everything below it.
#[test]
fn test_changing_upstream_filter_clears_downstream() {
    let mut state = DeckState::new();
    state.filters.set(FilterCategory::CardType, Some("Grapple"));
    state.filters.set(FilterCategory::Keyword, Some("Heavy"));
    state.filters.set(FilterCategory::Trait, Some("Target"));

    state.filters.set(FilterCategory::CardType, Some("Strike"));

    assert_eq!(state.filters.get(FilterCategory::Keyword), None);
    assert_eq!(state.filters.get(FilterCategory::Trait), None);
    assert_eq!(state.filters.get(FilterCategory::Target), None);
}

/// Target filtering matches trait values, not names.
#[test]
fn test_target_filter() {
    let table = sample_table();
    let mut state = DeckState::new();
    state.filters.set(FilterCategory::Target, Some("Back"));

    assert_eq!(titles(&visible_pool(&table, &state, "")), vec!["Suplex"]);
}

/// Default sort is case-insensitive alphabetical ascending.
#[test]
fn test_default_sort_alphabetical() {
    let table = sample_table();
    let pool_titles = titles(&visible_pool(&table, &DeckState::new(), ""));
    assert_eq!(pool_titles, vec!["Armbar", "Jab", "Suplex", "Taunt"]);
}

/// Numeric sorts put missing values first ascending, last descending.
#[test]
fn test_numeric_sort_with_missing_values() {
    let table = sample_table();

    let mut state = DeckState::new();
    state.sort = SortSpec::new(SortField::Momentum, SortDirection::Asc);
    let pool_titles = titles(&visible_pool(&table, &state, ""));
    // Taunt is the only card with momentum; the rest tie at -1 in load order.
    assert_eq!(pool_titles, vec!["Jab", "Suplex", "Armbar", "Taunt"]);

    state.sort = SortSpec::new(SortField::Damage, SortDirection::Desc);
    let pool_titles = titles(&visible_pool(&table, &state, ""));
    assert_eq!(pool_titles, vec!["Suplex", "Armbar", "Jab", "Taunt"]);
}

/// Option lists come from the whole table, deduplicated and sorted.
#[test]
fn test_available_options() {
    let options = available_options(&sample_table());

    assert_eq!(
        options.card_types,
        vec!["Maneuver", "Action", "Grapple", "Manager", "Strike", "Submission", "Wrestler"]
    );
    assert_eq!(options.keywords, vec!["Heavy", "Quick"]);
    assert_eq!(options.traits, vec!["Signature"]);
    assert_eq!(options.targets, vec!["Back", "Head"]);
}

/// Empty inputs yield empty outputs, never errors.
#[test]
fn test_empty_table() {
    let table = CardTable::new();
    assert!(visible_pool(&table, &DeckState::new(), "").is_empty());
    assert!(available_options(&table).card_types.is_empty());
}
