//! Game state: the unit stored by the undo history.
//!
//! ## GameState
//!
//! - Roster (scores, statuses, played flags)
//! - Current scene (players on stage awaiting a score)
//! - Round number
//! - Score bar scale for displays
//!
//! ## Phase
//!
//! Where the engine is in the show lifecycle. The phase lives on the engine,
//! not in the snapshot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::roster::Roster;

/// Ids of the players on stage. Scenes are small, typically 1-4 players.
pub type Scene = SmallVec<[PlayerId; 4]>;

/// Show lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No roster yet.
    #[default]
    Setup,
    /// Drawing, scoring and eliminating.
    Playing,
    /// One active player left.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Phase::Setup => "setup",
            Phase::Playing => "playing",
            Phase::GameOver => "game over",
        };
        f.write_str(label)
    }
}

/// Complete game state.
///
/// Cloning is cheap: the roster is a persistent vector and the scene is
/// inline for up to four players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub roster: Roster,

    /// Players on stage. Non-empty only between a draw and its score.
    pub current_scene: Scene,

    /// Round number (starts at 1).
    pub current_round: u32,

    /// `max(floor, highest active score)`, for scaling score bars.
    pub max_score_for_ui: i64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            roster: Roster::default(),
            current_scene: Scene::new(),
            current_round: 1,
            max_score_for_ui: 30,
        }
    }
}

impl GameState {
    /// Fresh state for a new roster: round 1, no scene.
    #[must_use]
    pub fn new(roster: Roster, ui_score_floor: i64) -> Self {
        let mut state = Self {
            roster,
            current_scene: Scene::new(),
            current_round: 1,
            max_score_for_ui: ui_score_floor,
        };
        state.refresh_max_score(ui_score_floor);
        state
    }

    /// A scene is waiting for its score.
    #[must_use]
    pub fn has_scene(&self) -> bool {
        !self.current_scene.is_empty()
    }

    /// Recompute `max_score_for_ui` from the active players.
    pub fn refresh_max_score(&mut self, ui_score_floor: i64) {
        let highest = self.roster.highest_active_score().unwrap_or(0);
        self.max_score_for_ui = highest.max(ui_score_floor);
    }

    /// Exact binary encoding, used to compare states byte for byte.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Roster::new(["Ana", "Bia"]), 30);
        assert_eq!(state.current_round, 1);
        assert!(!state.has_scene());
        assert_eq!(state.max_score_for_ui, 30);
    }

    #[test]
    fn test_refresh_max_score_uses_active_players() {
        let mut state = GameState::new(Roster::new(["Ana", "Bia"]), 30);
        state.roster.add_points(PlayerId::new(1), 42).unwrap();
        state.refresh_max_score(30);
        assert_eq!(state.max_score_for_ui, 42);

        state.roster.eliminate(PlayerId::new(1)).unwrap();
        state.refresh_max_score(30);
        assert_eq!(state.max_score_for_ui, 30);
    }

    #[test]
    fn test_bytes_track_changes() {
        let state = GameState::new(Roster::new(["Ana", "Bia"]), 30);
        let mut changed = state.clone();
        assert_eq!(state.to_bytes().unwrap(), changed.to_bytes().unwrap());

        changed.current_round += 1;
        assert_ne!(state.to_bytes().unwrap(), changed.to_bytes().unwrap());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::GameOver.to_string(), "game over");
    }
}
