//! In-process store, one serialized slot.

use super::{SavedGame, StateStore, StoreError};

/// Keeps the saved game as a JSON string in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw JSON payload already in the slot.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Some(raw.into()),
        }
    }

    /// The raw JSON payload, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<SavedGame>, StoreError> {
        match &self.slot {
            Some(text) => Ok(Some(serde_json::from_str(text)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, game: &SavedGame) -> Result<(), StoreError> {
        self.slot = Some(serde_json::to_string(game)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.slot = None;
        Ok(())
    }
}
