//! # placar
//!
//! Scoreboard engine for elimination-style improv shows.
//!
//! Players are drawn at random into scenes, scored by the host, and the
//! lowest scorers are cut between rounds until one performer is left.
//!
//! ## Design Principles
//!
//! 1. **Fair draws**: Every active player performs once per round, and each
//!    scene is a uniform random pick from those who have not played yet.
//!
//! 2. **Fair cuts**: A cut never splits players tied at the boundary score.
//!    It may remove fewer players than asked, or none.
//!
//! 3. **Cheap undo**: The full state is snapshotted before each change.
//!    Persistent data structures (`im`) make each snapshot O(1).
//!
//! ## Modules
//!
//! - `core`: Players, roster, game state, name validation, RNG, config, errors
//! - `rules`: Draw pool selector, scoring, elimination resolver, round cycle
//! - `history`: Bounded undo stack
//! - `engine`: `Game`, the state machine over setup / playing / game over
//! - `store`: Saved game format and stores (memory, JSON file)
//! - `view`: Read-only scoreboard projection

pub mod core;
pub mod rules;
pub mod history;
pub mod engine;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameState, NameIssue, Phase, Player, PlayerId, PlayerStatus,
    Roster, Scene, ValidationError,
};

pub use crate::rules::{DrawOutcome, EliminationOutcome};

pub use crate::history::History;

pub use crate::engine::Game;

pub use crate::store::{JsonFileStore, MemoryStore, SavedGame, StateStore, StoreError};

pub use crate::view::{PoolWarning, Scoreboard};
