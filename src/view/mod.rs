//! Read-only scoreboard projection for displays.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Player};

/// Draw pool status shown while no scene is on stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolWarning {
    /// Only three players left to draw this round.
    ThreeLeft,
    /// Only one player left to draw this round.
    OneLeft,
    /// Everyone has played this round.
    Exhausted,
    /// Any other pool size.
    Available(usize),
}

impl PoolWarning {
    #[must_use]
    pub fn for_pool_size(size: usize) -> Self {
        match size {
            0 => PoolWarning::Exhausted,
            1 => PoolWarning::OneLeft,
            3 => PoolWarning::ThreeLeft,
            n => PoolWarning::Available(n),
        }
    }
}

impl fmt::Display for PoolWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolWarning::ThreeLeft => f.write_str("WARNING: only 3 players left to draw"),
            PoolWarning::OneLeft => f.write_str("WARNING: only 1 player left to draw"),
            PoolWarning::Exhausted => f.write_str("Every player has performed this round"),
            PoolWarning::Available(n) => write!(f, "{n} players available to draw"),
        }
    }
}

/// Everything a display needs after an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub round: u32,
    /// Active players, highest score first. Ties keep roster order.
    pub standings: Vec<Player>,
    /// Eliminated players in roster order.
    pub eliminated: Vec<Player>,
    /// Players on stage.
    pub scene: Vec<Player>,
    pub max_score_for_ui: i64,
    /// Present only when no scene is on stage.
    pub pool: Option<PoolWarning>,
}

impl Scoreboard {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let mut standings: Vec<Player> = state.roster.active().cloned().collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score));

        let scene = state
            .current_scene
            .iter()
            .filter_map(|id| state.roster.get(*id).ok().cloned())
            .collect();

        let pool = if state.has_scene() {
            None
        } else {
            Some(PoolWarning::for_pool_size(state.roster.pool_size()))
        };

        Self {
            round: state.current_round,
            standings,
            eliminated: state.roster.eliminated().cloned().collect(),
            scene,
            max_score_for_ui: state.max_score_for_ui,
            pool,
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round {}", self.round)?;

        const BAR_WIDTH: i64 = 30;
        let scale = self.max_score_for_ui.max(1);
        for player in &self.standings {
            let filled = (player.score.clamp(0, scale) * BAR_WIDTH / scale) as usize;
            writeln!(
                f,
                "  {:<24} {:>4} |{:<width$}|",
                player.to_string(),
                player.score,
                "=".repeat(filled),
                width = BAR_WIDTH as usize
            )?;
        }

        if !self.eliminated.is_empty() {
            let names: Vec<String> = self.eliminated.iter().map(ToString::to_string).collect();
            writeln!(f, "Eliminated: {}", names.join(", "))?;
        }

        if !self.scene.is_empty() {
            let names: Vec<String> = self.scene.iter().map(ToString::to_string).collect();
            writeln!(f, "ON STAGE: {}", names.join(", "))?;
        }
        if let Some(pool) = self.pool {
            writeln!(f, "{pool}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Roster, Scene};

    #[test]
    fn test_pool_warning_thresholds() {
        assert_eq!(PoolWarning::for_pool_size(0), PoolWarning::Exhausted);
        assert_eq!(PoolWarning::for_pool_size(1), PoolWarning::OneLeft);
        assert_eq!(PoolWarning::for_pool_size(2), PoolWarning::Available(2));
        assert_eq!(PoolWarning::for_pool_size(3), PoolWarning::ThreeLeft);
        assert_eq!(PoolWarning::for_pool_size(7), PoolWarning::Available(7));
    }

    #[test]
    fn test_standings_sorted_by_score_desc() {
        let mut state = GameState::new(Roster::new(["Ana", "Bia", "Caio", "Duda"]), 30);
        state.roster.add_points(PlayerId::new(2), 5).unwrap();
        state.roster.add_points(PlayerId::new(3), 9).unwrap();
        state.roster.add_points(PlayerId::new(4), 5).unwrap();
        state.roster.eliminate(PlayerId::new(1)).unwrap();

        let board = Scoreboard::from_state(&state);

        let order: Vec<u32> = board.standings.iter().map(|p| p.id.raw()).collect();
        assert_eq!(order, vec![3, 2, 4]);
        assert_eq!(board.eliminated.len(), 1);
        assert_eq!(board.pool, Some(PoolWarning::ThreeLeft));
    }

    #[test]
    fn test_no_pool_warning_while_scene_pending() {
        let mut state = GameState::new(Roster::new(["Ana", "Bia"]), 30);
        state.current_scene = Scene::from_slice(&[PlayerId::new(2)]);

        let board = Scoreboard::from_state(&state);

        assert!(board.pool.is_none());
        assert_eq!(board.scene[0].name, "Bia");
        assert!(board.to_string().contains("ON STAGE: #2 Bia"));
    }
}
