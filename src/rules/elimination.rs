//! Elimination resolver: cuts the lowest scorers, fairly.
//!
//! Active players are stable-sorted by score, so equal scores keep roster
//! order. When the players on both sides of the cut share a score, nobody
//! at that score is eliminated; only players strictly below it go. This can
//! remove fewer players than asked for, or none at all.
//!
//! ```
//! use placar::core::{PlayerId, Roster};
//! use placar::rules::elimination::select_for_elimination;
//!
//! let mut roster = Roster::new(["Ana", "Bia", "Caio", "Duda", "Edu"]);
//! for (id, score) in PlayerId::all(5).zip([1, 2, 2, 3, 4]) {
//!     roster.add_points(id, score).unwrap();
//! }
//!
//! // The cut falls between two players with 2 points: only Ana goes.
//! assert_eq!(select_for_elimination(&roster, 2).unwrap(), vec![PlayerId::new(1)]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use super::round;
use crate::core::{GameError, GameState, Player, PlayerId, Roster};

/// Result of an elimination request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EliminationOutcome {
    /// A tie at the cut protected everyone; nothing changed.
    Unchanged,
    /// Players were eliminated and a new round started.
    Eliminated {
        players: Vec<PlayerId>,
        round: u32,
        /// Set when exactly one active player remains.
        winner: Option<Player>,
    },
}

impl EliminationOutcome {
    /// The winner, if this elimination ended the show.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self {
            EliminationOutcome::Eliminated { winner, .. } => winner.as_ref(),
            EliminationOutcome::Unchanged => None,
        }
    }

    /// Ids eliminated by this request.
    #[must_use]
    pub fn eliminated(&self) -> &[PlayerId] {
        match self {
            EliminationOutcome::Eliminated { players, .. } => players,
            EliminationOutcome::Unchanged => &[],
        }
    }
}

/// Reject an elimination while some active player has not played this round.
pub fn check_round_complete(state: &GameState) -> Result<(), GameError> {
    if round::is_round_complete(state) {
        Ok(())
    } else {
        Err(GameError::RoundIncomplete {
            remaining: state.roster.pool_size(),
        })
    }
}

/// Pick the players a cut of `count` removes.
///
/// Fails if `count` is zero or would remove every active player. The
/// returned list is in ascending score order and may be empty.
pub fn select_for_elimination(roster: &Roster, count: usize) -> Result<Vec<PlayerId>, GameError> {
    if count == 0 {
        return Err(GameError::InvalidCount {
            what: "elimination count",
            value: count,
        });
    }

    let mut active: Vec<&Player> = roster.active().collect();
    if count >= active.len() {
        return Err(GameError::EliminateAllRejected {
            requested: count,
            active: active.len(),
        });
    }
    active.sort_by_key(|p| p.score);

    let cutoff = active[count - 1].score;
    let next = active[count].score;

    let selected = if next == cutoff {
        active
            .iter()
            .take_while(|p| p.score < cutoff)
            .map(|p| p.id)
            .collect()
    } else {
        active[..count].iter().map(|p| p.id).collect()
    };
    Ok(selected)
}

/// Eliminate `selected`, start a new round, and report a winner if one
/// active player remains.
///
/// An empty selection changes nothing.
pub fn apply_elimination(
    state: &mut GameState,
    selected: Vec<PlayerId>,
) -> Result<EliminationOutcome, GameError> {
    if selected.is_empty() {
        return Ok(EliminationOutcome::Unchanged);
    }

    for &id in &selected {
        state.roster.eliminate(id)?;
    }
    let round = round::rollover(state);

    let mut remaining = state.roster.active();
    let winner = match (remaining.next(), remaining.next()) {
        (Some(last), None) => Some(last.clone()),
        _ => None,
    };

    info!(
        eliminated = ?selected,
        active = state.roster.active_count(),
        round,
        "players eliminated"
    );

    Ok(EliminationOutcome::Eliminated {
        players: selected,
        round,
        winner,
    })
}
