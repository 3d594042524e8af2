//! The roster: every player of the show, in id order.
//!
//! Backed by `im::Vector` so cloning a roster for the undo history is O(1)
//! and later mutation never touches a stored snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::{Player, PlayerId, PlayerStatus};

/// Ordered collection of players. Ids are assigned 1..N at creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vector<Player>,
}

impl Roster {
    /// Build a roster from already validated names.
    ///
    /// ```
    /// use placar::core::{PlayerId, Roster};
    ///
    /// let roster = Roster::new(["Ana", "Bia"]);
    /// assert_eq!(roster.len(), 2);
    /// assert_eq!(roster.get(PlayerId::new(2)).unwrap().name, "Bia");
    /// ```
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players = names
            .into_iter()
            .zip(1u32..)
            .map(|(name, id)| Player::new(PlayerId::new(id), name))
            .collect();
        Self { players }
    }

    /// Wrap existing players, e.g. from a saved game.
    pub fn from_players(players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            players: players.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over all players in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    // === Lookup ===

    fn index_of(&self, id: PlayerId) -> Option<usize> {
        // Ids are 1..N in order, so the slot is usually id - 1.
        let guess = (id.raw() as usize).wrapping_sub(1);
        match self.players.get(guess) {
            Some(player) if player.id == id => Some(guess),
            _ => self.players.iter().position(|p| p.id == id),
        }
    }

    /// Look up a player by id.
    pub fn get(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.index_of(id)
            .and_then(|i| self.players.get(i))
            .ok_or(GameError::NotFound(id))
    }

    /// Look up a player by id for mutation.
    pub fn get_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        let index = self.index_of(id).ok_or(GameError::NotFound(id))?;
        self.players.get_mut(index).ok_or(GameError::NotFound(id))
    }

    /// Whether the ids run 1..N in roster order.
    #[must_use]
    pub fn has_sequential_ids(&self) -> bool {
        self.players
            .iter()
            .zip(1u32..)
            .all(|(player, expected)| player.id.raw() == expected)
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.index_of(id).is_some()
    }

    // === Filters ===

    /// Players with the given status, in id order.
    pub fn with_status(&self, status: PlayerStatus) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.status == status)
    }

    pub fn active(&self) -> impl Iterator<Item = &Player> {
        self.with_status(PlayerStatus::Active)
    }

    pub fn eliminated(&self) -> impl Iterator<Item = &Player> {
        self.with_status(PlayerStatus::Eliminated)
    }

    /// Active players not yet drawn this round.
    pub fn draw_pool(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_drawable())
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.draw_pool().count()
    }

    /// Highest score among active players, if any.
    #[must_use]
    pub fn highest_active_score(&self) -> Option<i64> {
        self.active().map(|p| p.score).max()
    }

    // === Mutation ===

    /// Add `points` to a player's score.
    ///
    /// Fails with [`GameError::ScoreOverflow`] and leaves the score as it
    /// was if the total does not fit in an `i64`.
    pub fn add_points(&mut self, id: PlayerId, points: i64) -> Result<(), GameError> {
        let player = self.get_mut(id)?;
        player.score = player
            .score
            .checked_add(points)
            .ok_or(GameError::ScoreOverflow(id))?;
        Ok(())
    }

    /// Mark a player eliminated.
    pub fn eliminate(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.get_mut(id)?.status = PlayerStatus::Eliminated;
        Ok(())
    }

    /// Mark a player as drawn this round.
    pub fn mark_played(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.get_mut(id)?.has_played_in_round = true;
        Ok(())
    }

    /// Clear the played flag of every active player.
    ///
    /// Eliminated players keep their last value.
    pub fn reset_played_flags(&mut self) {
        for player in self.players.iter_mut() {
            if player.is_active() {
                player.has_played_in_round = false;
            }
        }
    }
}
