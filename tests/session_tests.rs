//! Session tests: persistence after every mutation, restore, import commit.

use ringside::{
    Card, CardTable, CardType, DeckSession, DeckTarget, FilterCategory, MemoryStore, PersonaRole,
    SortDirection, SortField, SortSpec, StateStore, STARTING_DECK_CAP,
};

fn sample_table() -> CardTable {
    let mut table = CardTable::new();
    table.insert(Card::new("Jab", CardType::Strike).with_cost(0));
    table.insert(Card::new("Suplex", CardType::Grapple).with_cost(2));
    table.insert(Card::new("Big Bruiser Wrestler", CardType::Wrestler));
    table
}

/// Every mutating operation rewrites the snapshot.
#[test]
fn test_mutations_persist() {
    let mut store = MemoryStore::new();
    {
        let mut session = DeckSession::new(sample_table(), &mut store);
        session.add_card("Jab", DeckTarget::Starting);
    }
    let saved = store.load().unwrap().expect("snapshot written");
    assert_eq!(saved.starting.len(), 1);

    {
        let mut session = DeckSession::new(sample_table(), &mut store);
        session.set_sort(SortSpec::new(SortField::Cost, SortDirection::Desc));
        session.set_show_zero_cost(false);
        session.set_filter(FilterCategory::CardType, Some("Strike"));
    }
    let saved = store.load().unwrap().unwrap();
    assert_eq!(saved.sort, SortSpec::new(SortField::Cost, SortDirection::Desc));
    assert!(!saved.show_zero_cost);
    assert_eq!(saved.filters.get(FilterCategory::CardType), Some("Strike"));
}

/// A restored session continues from the last snapshot.
#[test]
fn test_restore_round_trip() {
    let mut store = MemoryStore::new();
    {
        let mut session = DeckSession::new(sample_table(), &mut store);
        session.add_card("Jab", DeckTarget::Starting);
        session.add_card("Suplex", DeckTarget::Purchase);
        session.select_persona(PersonaRole::Wrestler, Some("Big Bruiser Wrestler"));
    }

    let session = DeckSession::restore(sample_table(), &mut store);
    assert_eq!(session.state().deck_count(DeckTarget::Starting), 1);
    assert_eq!(session.state().deck_count(DeckTarget::Purchase), 1);
    assert_eq!(
        session.state().wrestler.as_ref().map(|c| c.title.as_str()),
        Some("Big Bruiser Wrestler")
    );
}

/// Restoring with no snapshot yields default state.
#[test]
fn test_restore_without_snapshot() {
    let session = DeckSession::restore(sample_table(), MemoryStore::new());
    assert_eq!(session.state().deck_count(DeckTarget::Starting), 0);
    assert!(session.state().show_zero_cost);
}

/// Capacities are advisory: the session accepts over-capacity adds.
#[test]
fn test_over_capacity_accepted() {
    let mut session = DeckSession::new(sample_table(), MemoryStore::new());
    for _ in 0..STARTING_DECK_CAP + 1 {
        session.add_card("Jab", DeckTarget::Starting);
    }
    assert_eq!(
        session.state().deck_count(DeckTarget::Starting),
        STARTING_DECK_CAP + 1
    );
}

/// A successful import replaces decks and personas and persists once.
#[test]
fn test_import_commits_and_persists() {
    let mut store = MemoryStore::new();
    {
        let mut session = DeckSession::new(sample_table(), &mut store);
        session.add_card("Suplex", DeckTarget::Starting);
        session.set_filter(FilterCategory::CardType, Some("Grapple"));

        let warnings = session
            .import_deck_list("Starting:\n1 Big Bruiser Wrestler\n2 Jab\n")
            .unwrap();
        assert!(warnings.is_empty());

        assert_eq!(session.state().deck_count(DeckTarget::Starting), 2);
        assert!(session.state().filters.is_empty());
        assert_eq!(
            session.state().wrestler.as_ref().map(|c| c.title.as_str()),
            Some("Big Bruiser Wrestler")
        );
    }

    let saved = store.load().unwrap().unwrap();
    assert_eq!(saved.starting.len(), 2);
    assert!(saved.wrestler.is_some());
}

/// The export/import pair works end to end through the session, analysis
/// appendix included.
#[test]
fn test_session_export_import_cycle() {
    let mut session = DeckSession::new(sample_table(), MemoryStore::new());
    session.add_card("Jab", DeckTarget::Starting);
    session.add_card("Suplex", DeckTarget::Purchase);
    session.select_persona(PersonaRole::Wrestler, Some("Big Bruiser Wrestler"));

    let text = session.export_deck_list();
    assert!(text.contains("--- Analysis ---"));

    let mut other = DeckSession::new(sample_table(), MemoryStore::new());
    let warnings = other.import_deck_list(&text).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(other.state().deck_count(DeckTarget::Starting), 1);
    assert_eq!(other.state().deck_count(DeckTarget::Purchase), 1);
    assert_eq!(
        other.state().wrestler.as_ref().map(|c| c.title.as_str()),
        Some("Big Bruiser Wrestler")
    );
}
