//! Deck state, persistence, and the composing session.
//!
//! ## Key Types
//!
//! - `DeckState`: decks, persona slots, filters, sort, cost toggles
//! - `DeckTarget`: starting vs. purchase
//! - `StateStore` / `MemoryStore`: whole-state snapshot persistence
//! - `DeckSession`: the injectable composition the application owns

pub mod session;
pub mod state;
pub mod store;

pub use session::DeckSession;
pub use state::{DeckState, DeckTarget, PURCHASE_DECK_SOFT_CAP, STARTING_DECK_CAP};
pub use store::{MemoryStore, NullStore, StateStore, StoreError};
