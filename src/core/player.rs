//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are 1-based and assigned in roster
//! order; they are never reused, even after a player is eliminated.
//!
//! ## Player
//!
//! Display name, score, elimination status, and the per-round played flag.

use serde::{Deserialize, Serialize};

/// Player identifier, 1-based.
///
/// The first player on the roster is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Iterate over the ids of a roster with `player_count` players.
    ///
    /// Stops at `u32::MAX`; ids past that cannot be represented.
    ///
    /// ```
    /// use placar::core::PlayerId;
    ///
    /// let ids: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(ids, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count).map_while(|n| u32::try_from(n).ok().map(PlayerId))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a player is still in the show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    #[default]
    Active,
    Eliminated,
}

/// A performer on the roster.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
    pub status: PlayerStatus,
    /// Drawn into a scene during the current round.
    ///
    /// Only meaningful while the player is active.
    #[serde(rename = "hasPlayedInRound", alias = "has_played_in_round", default)]
    pub has_played_in_round: bool,
}

impl Player {
    /// Create an active player with zero score.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            status: PlayerStatus::Active,
            has_played_in_round: false,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.status == PlayerStatus::Eliminated
    }

    /// Active and not yet drawn this round.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.is_active() && !self.has_played_in_round
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        assert_eq!(p1.raw(), 1);
        assert_eq!(format!("{}", p1), "#1");
    }

    #[test]
    fn test_player_id_all_is_one_based() {
        let ids: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[0], PlayerId::new(1));
        assert_eq!(ids[3], PlayerId::new(4));
        assert_eq!(PlayerId::all(0).count(), 0);
    }

    #[test]
    fn test_new_player_is_drawable() {
        let player = Player::new(PlayerId::new(2), "Ana");
        assert!(player.is_active());
        assert!(player.is_drawable());
        assert_eq!(player.score, 0);
        assert_eq!(format!("{}", player), "#2 Ana");
    }

    #[test]
    fn test_eliminated_player_is_not_drawable() {
        let mut player = Player::new(PlayerId::new(1), "Bruno");
        player.status = PlayerStatus::Eliminated;
        assert!(player.is_eliminated());
        assert!(!player.is_drawable());
    }

    #[test]
    fn test_player_serialization_shape() {
        let player = Player::new(PlayerId::new(3), "Carla");
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["status"], "active");
        assert_eq!(json["hasPlayedInRound"], false);

        let back: Player = serde_json::from_value(json).unwrap();
        assert_eq!(back, player);
    }
}
