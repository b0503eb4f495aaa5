//! # ringside
//!
//! A deck-building engine for a wrestling trading-card game.
//!
//! The engine loads a tab-separated card database into an in-memory,
//! title-indexed table, computes filter options and the visible card pool
//! through a cascading filter chain, tracks deck and persona selections,
//! and reads/writes line-oriented deck-list text.
//!
//! ## Design Principles
//!
//! 1. **Skip, don't abort**: malformed rows and unresolvable deck-list
//!    lines are dropped with collected warnings; only a missing table
//!    header and an import that yields nothing are hard failures.
//!
//! 2. **Apply on success**: the import codec builds a complete proposal
//!    before any live state changes.
//!
//! 3. **Injectable state**: `DeckSession` owns table, state, and the
//!    persistence sink; nothing is ambient, everything is testable in
//!    isolation.
//!
//! ## Modules
//!
//! - `cards`: card records, column values, and the title-indexed table
//! - `loader`: TSV card-table and keyword-dictionary parsing
//! - `persona`: persona roles and kit-card classification
//! - `filter`: filter chain, option computation, sort, pool visibility
//! - `deck`: deck state, snapshot persistence, and the session
//! - `codec`: deck-list text export/import and the analysis appendix

pub mod cards;
pub mod codec;
pub mod deck;
pub mod filter;
pub mod loader;
pub mod persona;

// Re-export commonly used types
pub use crate::cards::{Card, CardTable, CardType, ColumnValue, Keyword, TextBox, Trait};

pub use crate::loader::{
    load_card_table, parse_keyword_dictionary, LoadError, LoadWarning, TableLoad,
};

pub use crate::persona::{is_kit_card, kit_persona, strip_role_suffix, PersonaRole};

pub use crate::filter::{
    available_options, visible_pool, FilterCategory, FilterChain, FilterOptions, SortDirection,
    SortField, SortSpec,
};

pub use crate::deck::{
    DeckSession, DeckState, DeckTarget, MemoryStore, NullStore, StateStore, StoreError,
    PURCHASE_DECK_SOFT_CAP, STARTING_DECK_CAP,
};

pub use crate::codec::{
    analyze, parse_deck_text, serialize_deck, DeckAnalysis, ImportError, ImportWarning, ParsedDeck,
};
