//! Game configuration.
//!
//! The defaults match a standard show: up to 20 performers, names of 2-20
//! characters, 20 undo steps, and a score bar scaled to at least 30 points.

use serde::{Deserialize, Serialize};

/// Tunable limits and rules for a show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum number of snapshots kept for undo.
    pub history_depth: usize,

    /// Maximum number of players on the roster.
    pub max_players: usize,

    /// Minimum sanitized name length, in characters.
    pub min_name_len: usize,

    /// Maximum sanitized name length, in characters.
    pub max_name_len: usize,

    /// Lower bound of `max_score_for_ui`.
    pub ui_score_floor: i64,

    /// Draw count used when the caller does not give one.
    pub default_scene_size: usize,

    /// Refuse eliminations until every active player has played this round.
    pub require_full_round: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            history_depth: 20,
            max_players: 20,
            min_name_len: 2,
            max_name_len: 20,
            ui_score_floor: 30,
            default_scene_size: 2,
            require_full_round: false,
        }
    }
}

impl GameConfig {
    /// Set the undo depth.
    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history_depth = depth;
        self
    }

    /// Set the default draw count.
    pub fn with_scene_size(mut self, size: usize) -> Self {
        self.default_scene_size = size;
        self
    }

    /// Require a completed round before eliminating.
    pub fn with_full_round_required(mut self, required: bool) -> Self {
        self.require_full_round = required;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.history_depth, 20);
        assert_eq!(config.max_players, 20);
        assert_eq!(config.min_name_len, 2);
        assert_eq!(config.max_name_len, 20);
        assert_eq!(config.ui_score_floor, 30);
        assert!(!config.require_full_round);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_history_depth(5)
            .with_scene_size(3)
            .with_full_round_required(true);

        assert_eq!(config.history_depth, 5);
        assert_eq!(config.default_scene_size, 3);
        assert!(config.require_full_round);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "history_depth": 3 }"#).unwrap();
        assert_eq!(config.history_depth, 3);
        assert_eq!(config.max_players, 20);
    }
}
