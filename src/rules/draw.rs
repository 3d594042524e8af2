//! Draw pool selector: picks the players for the next scene.
//!
//! The pool is the active players not yet drawn this round. An empty pool
//! starts a new round first. A pool of one is taken as is; otherwise the
//! scene is the prefix of a uniform random permutation of the pool.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::round;
use crate::core::{GameError, GameRng, GameState, PlayerId, Scene};

/// Result of a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// Players on stage, in draw order.
    pub scene: Scene,
    /// Round the scene belongs to.
    pub round: u32,
    /// The pool was exhausted and a new round started before drawing.
    pub round_rolled_over: bool,
}

/// Check that a draw of `count` players may run.
pub fn check_draw(state: &GameState, count: usize) -> Result<(), GameError> {
    if state.has_scene() {
        return Err(GameError::SceneInProgress);
    }
    if count == 0 {
        return Err(GameError::InvalidCount {
            what: "scene size",
            value: count,
        });
    }
    if state.roster.active_count() == 0 {
        return Err(GameError::InvalidCount {
            what: "active players",
            value: 0,
        });
    }
    Ok(())
}

/// Draw up to `count` players into a new scene.
pub fn draw_scene(
    state: &mut GameState,
    count: usize,
    rng: &mut GameRng,
) -> Result<DrawOutcome, GameError> {
    check_draw(state, count)?;

    let mut round_rolled_over = false;
    let mut pool: Vec<PlayerId> = state.roster.draw_pool().map(|p| p.id).collect();
    if pool.is_empty() {
        round::rollover(state);
        round_rolled_over = true;
        pool = state.roster.draw_pool().map(|p| p.id).collect();
    }

    let scene: Scene = if pool.len() == 1 {
        pool.into_iter().collect()
    } else {
        rng.shuffle(&mut pool);
        pool.truncate(count.min(pool.len()));
        pool.into_iter().collect()
    };

    for &id in &scene {
        state.roster.mark_played(id)?;
    }
    state.current_scene = scene.clone();

    debug!(
        round = state.current_round,
        scene = ?scene,
        remaining = state.roster.pool_size(),
        "scene drawn"
    );

    Ok(DrawOutcome {
        scene,
        round: state.current_round,
        round_rolled_over,
    })
}
