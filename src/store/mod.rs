//! Persistence of the running show.
//!
//! The engine writes a `SavedGame` after every successful change and reads
//! it once at startup to resume. Writes are fire-and-forget: the engine logs
//! a failed write and carries on.
//!
//! The JSON shape is kept stable across versions:
//!
//! ```json
//! {
//!   "players": [{ "id": 1, "name": "Ana", "score": 3, "status": "active", "hasPlayedInRound": true }],
//!   "currentScene": [1],
//!   "maxScoreForUI": 30,
//!   "currentRound": 2,
//!   "timestamp": 1760774400000
//! }
//! ```
//!
//! Snapshots written before rounds existed have no `currentRound`; they load
//! as round 1.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameState, Player, PlayerId, Roster, Scene};

/// Errors from a state store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("saved game is malformed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A key-value slot holding at most one saved game.
pub trait StateStore {
    /// Read the saved game, if there is one.
    fn load(&self) -> Result<Option<SavedGame>, StoreError>;

    /// Replace the saved game.
    fn save(&mut self, game: &SavedGame) -> Result<(), StoreError>;

    /// Remove the saved game. Clearing an empty store is not an error.
    fn clear(&mut self) -> Result<(), StoreError>;
}

fn first_round() -> u32 {
    1
}

fn default_max_score() -> i64 {
    30
}

/// Serialized form of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub players: Vec<Player>,

    #[serde(default)]
    pub current_scene: Vec<PlayerId>,

    #[serde(rename = "maxScoreForUI", default = "default_max_score")]
    pub max_score_for_ui: i64,

    #[serde(default = "first_round")]
    pub current_round: u32,

    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: i64,
}

impl SavedGame {
    /// Capture `state`, stamped with the current time.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            players: state.roster.iter().cloned().collect(),
            current_scene: state.current_scene.to_vec(),
            max_score_for_ui: state.max_score_for_ui,
            current_round: state.current_round,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Rebuild the game state.
    ///
    /// Scene entries that are not on the roster are dropped and a round of
    /// 0 is read as 1.
    #[must_use]
    pub fn into_state(self) -> GameState {
        let roster = Roster::from_players(self.players);
        let current_scene: Scene = self
            .current_scene
            .into_iter()
            .filter(|id| roster.contains(*id))
            .collect();
        GameState {
            roster,
            current_scene,
            current_round: self.current_round.max(1),
            max_score_for_ui: self.max_score_for_ui,
        }
    }
}
