//! Persistence sink for deck state.
//!
//! The engine writes a whole-state snapshot after every mutating operation
//! and reads it once at startup. The medium is the caller's concern: the
//! trait is the seam, `MemoryStore` is the provided implementation
//! (bincode bytes, last write wins, no versioning).

use thiserror::Error;

use super::state::DeckState;

/// Snapshot encode/decode failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode state snapshot: {0}")]
    Encode(String),
    #[error("failed to decode state snapshot: {0}")]
    Decode(String),
}

/// Whole-state snapshot storage.
pub trait StateStore {
    /// Persist the current state, replacing any previous snapshot.
    fn save(&mut self, state: &DeckState) -> Result<(), StoreError>;

    /// Read the last snapshot, or `None` when nothing was saved.
    fn load(&self) -> Result<Option<DeckState>, StoreError>;
}

impl<S: StateStore + ?Sized> StateStore for &mut S {
    fn save(&mut self, state: &DeckState) -> Result<(), StoreError> {
        (**self).save(state)
    }

    fn load(&self) -> Result<Option<DeckState>, StoreError> {
        (**self).load()
    }
}

/// In-memory snapshot store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Option<Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a snapshot has been written.
    #[must_use]
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }
}

impl StateStore for MemoryStore {
    fn save(&mut self, state: &DeckState) -> Result<(), StoreError> {
        let bytes = bincode::serialize(state).map_err(|e| StoreError::Encode(e.to_string()))?;
        self.snapshot = Some(bytes);
        Ok(())
    }

    fn load(&self) -> Result<Option<DeckState>, StoreError> {
        match &self.snapshot {
            None => Ok(None),
            Some(bytes) => bincode::deserialize(bytes)
                .map(Some)
                .map_err(|e| StoreError::Decode(e.to_string())),
        }
    }
}

/// Store that keeps nothing. For callers that opt out of persistence.
#[derive(Debug, Default)]
pub struct NullStore;

impl StateStore for NullStore {
    fn save(&mut self, _state: &DeckState) -> Result<(), StoreError> {
        Ok(())
    }

    fn load(&self) -> Result<Option<DeckState>, StoreError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DeckTarget;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let mut state = DeckState::new();
        state.add_card("Jab", DeckTarget::Starting);
        state.show_zero_cost = false;
        store.save(&state).unwrap();

        let restored = store.load().unwrap().expect("snapshot present");
        assert_eq!(restored.starting.len(), 1);
        assert_eq!(restored.starting[0], "Jab");
        assert!(!restored.show_zero_cost);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = MemoryStore::new();

        let mut first = DeckState::new();
        first.add_card("Jab", DeckTarget::Starting);
        store.save(&first).unwrap();

        let second = DeckState::new();
        store.save(&second).unwrap();

        let restored = store.load().unwrap().unwrap();
        assert!(restored.starting.is_empty());
    }

    #[test]
    fn test_null_store_keeps_nothing() {
        let mut store = NullStore;
        store.save(&DeckState::new()).unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
