//! Round cycle: every active player is drawn once per round.

use tracing::info;

use crate::core::GameState;

/// Start the next round.
///
/// Clears the played flag of every active player and increments the round
/// number. Returns the new round number.
pub fn rollover(state: &mut GameState) -> u32 {
    state.roster.reset_played_flags();
    state.current_round += 1;
    info!(round = state.current_round, "round started");
    state.current_round
}

/// Every active player has been drawn this round.
#[must_use]
pub fn is_round_complete(state: &GameState) -> bool {
    state.roster.pool_size() == 0
}
