//! The game engine: one owned show, driven through its operations.

use tracing::{debug, info, warn};

use crate::core::{
    validate_names, GameConfig, GameError, GameRng, GameState, Phase, Player, PlayerId, Roster,
};
use crate::history::History;
use crate::rules::{self, DrawOutcome, EliminationOutcome};
use crate::store::{MemoryStore, SavedGame, StateStore};
use crate::view::Scoreboard;

/// A show in progress.
///
/// Owns the game state, its undo history, the draw RNG and the store it
/// persists to. Every successful mutation:
///
/// 1. snapshots the pre-mutation state into the history,
/// 2. recomputes the score bar scale,
/// 3. writes the saved game to the store (failures are only logged).
///
/// Failed operations leave the state, history and store untouched.
pub struct Game<S: StateStore = MemoryStore> {
    config: GameConfig,
    phase: Phase,
    state: GameState,
    history: History,
    rng: GameRng,
    store: S,
}

impl Game<MemoryStore> {
    /// New game in setup, in-memory store, entropy-seeded draws.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_store(config, MemoryStore::new(), GameRng::from_entropy())
    }
}

impl<S: StateStore> Game<S> {
    /// New game in setup with the given store and RNG.
    ///
    /// Does not read the store; see [`Game::resume`].
    pub fn with_store(config: GameConfig, store: S, rng: GameRng) -> Self {
        let history = History::new(config.history_depth);
        let state = GameState {
            max_score_for_ui: config.ui_score_floor,
            ..GameState::default()
        };
        Self {
            config,
            phase: Phase::Setup,
            state,
            history,
            rng,
            store,
        }
    }

    /// Pick up a saved show from `store`, or start in setup if there is none.
    ///
    /// History starts empty. A saved roster with a single active player and
    /// at least one elimination resumes as game over. A roster whose ids do
    /// not run 1..N is discarded.
    pub fn resume(config: GameConfig, store: S, rng: GameRng) -> Self {
        let mut game = Self::with_store(config, store, rng);
        match game.store.load() {
            Ok(Some(saved)) => {
                let mut state = saved.into_state();
                if !state.roster.has_sequential_ids() {
                    warn!("saved game has out-of-order or duplicate player ids, starting fresh");
                    return game;
                }
                let active = state.roster.active_count();
                if active == 0 {
                    warn!("saved game has no active players, starting fresh");
                    return game;
                }
                game.phase = if active == 1 && state.roster.len() > 1 {
                    Phase::GameOver
                } else {
                    Phase::Playing
                };
                state.refresh_max_score(game.config.ui_score_floor);
                info!(
                    players = state.roster.len(),
                    active,
                    round = state.current_round,
                    "resumed saved game"
                );
                game.state = state;
            }
            Ok(None) => debug!("no saved game"),
            Err(err) => warn!(%err, "could not read saved game, starting fresh"),
        }
        game
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The last active player, once the show is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self.phase {
            Phase::GameOver => self.state.roster.active().next(),
            _ => None,
        }
    }

    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::from_state(&self.state)
    }

    // === Operations ===

    /// Build the roster and start round 1.
    pub fn start_game<N: AsRef<str>>(&mut self, names: &[N]) -> Result<(), GameError> {
        self.require_phase("start", Phase::Setup)?;
        let names = validate_names(names, &self.config)?;

        self.state = GameState::new(Roster::new(names), self.config.ui_score_floor);
        self.history.clear();
        self.phase = Phase::Playing;
        info!(players = self.state.roster.len(), "show started");
        self.persist();
        Ok(())
    }

    /// Put up to `count` players from the draw pool on stage.
    pub fn draw_scene(&mut self, count: usize) -> Result<DrawOutcome, GameError> {
        self.require_phase("draw", Phase::Playing)?;
        rules::check_draw(&self.state, count)?;
        self.transact(|state, rng| rules::draw_scene(state, count, rng))
    }

    /// Score the players on stage and close the scene.
    pub fn apply_score(&mut self, points: i64) -> Result<Vec<PlayerId>, GameError> {
        self.require_phase("score", Phase::Playing)?;
        self.transact(|state, _| rules::apply_score(state, points))
    }

    /// Cut up to `count` of the lowest scorers.
    ///
    /// A tie at the cut can shrink the cut to nothing, in which case the
    /// call returns [`EliminationOutcome::Unchanged`] and records no undo
    /// step.
    pub fn eliminate(&mut self, count: usize) -> Result<EliminationOutcome, GameError> {
        self.require_phase("eliminate", Phase::Playing)?;
        if self.config.require_full_round {
            rules::check_round_complete(&self.state)?;
        }

        let selected = rules::select_for_elimination(&self.state.roster, count)?;
        if selected.is_empty() {
            debug!(count, "tie at the cut, nobody eliminated");
            return Ok(EliminationOutcome::Unchanged);
        }

        let outcome = self.transact(|state, _| rules::apply_elimination(state, selected))?;
        if let Some(winner) = outcome.winner() {
            info!(winner = %winner, "show won");
            self.phase = Phase::GameOver;
        }
        Ok(outcome)
    }

    /// Restore the state from before the last change.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.state = previous;
        if self.phase == Phase::GameOver && self.state.roster.active_count() > 1 {
            self.phase = Phase::Playing;
        }
        debug!(remaining = self.history.len(), "undo");
        self.persist();
        true
    }

    /// Drop everything and go back to setup.
    pub fn reset(&mut self) {
        self.state = GameState {
            max_score_for_ui: self.config.ui_score_floor,
            ..GameState::default()
        };
        self.history.clear();
        self.phase = Phase::Setup;
        if let Err(err) = self.store.clear() {
            warn!(%err, "could not clear saved game");
        }
        info!("show reset");
    }

    // === Internals ===

    fn require_phase(&self, operation: &'static str, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    /// Run `op` all-or-nothing, recording an undo step if it succeeds.
    fn transact<T>(
        &mut self,
        op: impl FnOnce(&mut GameState, &mut GameRng) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let before = self.state.clone();
        match op(&mut self.state, &mut self.rng) {
            Ok(value) => {
                self.history.push(before);
                self.state.refresh_max_score(self.config.ui_score_floor);
                self.persist();
                Ok(value)
            }
            Err(err) => {
                self.state = before;
                Err(err)
            }
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(&SavedGame::capture(&self.state)) {
            warn!(%err, "could not save game");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::with_store(GameConfig::default(), MemoryStore::new(), GameRng::new(42))
    }

    #[test]
    fn test_new_game_is_in_setup() {
        let game = game();
        assert_eq!(game.phase(), Phase::Setup);
        assert!(!game.can_undo());
        assert!(game.state().roster.is_empty());
    }

    #[test]
    fn test_operations_require_playing() {
        let mut game = game();
        assert!(matches!(
            game.draw_scene(1),
            Err(GameError::InvalidPhase { phase: Phase::Setup, .. })
        ));
        assert!(matches!(game.apply_score(1), Err(GameError::InvalidPhase { .. })));
        assert!(matches!(game.eliminate(1), Err(GameError::InvalidPhase { .. })));
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut game = game();
        game.start_game(&["Ana", "Bia"]).unwrap();
        assert!(matches!(
            game.start_game(&["Caio", "Duda"]),
            Err(GameError::InvalidPhase { phase: Phase::Playing, .. })
        ));
        assert_eq!(game.state().roster.len(), 2);
    }

    #[test]
    fn test_start_persists() {
        let mut game = game();
        game.start_game(&["Ana", "Bia"]).unwrap();
        let saved = game.store().load().unwrap().expect("saved after start");
        assert_eq!(saved.players.len(), 2);
        assert_eq!(saved.current_round, 1);
    }

    #[test]
    fn test_failed_operation_records_nothing() {
        let mut game = game();
        game.start_game(&["Ana", "Bia"]).unwrap();
        assert_eq!(game.apply_score(3).unwrap_err(), GameError::NoActiveScene);
        assert!(!game.can_undo());
    }

    #[test]
    fn test_max_score_tracks_leader() {
        let mut game = game();
        game.start_game(&["Ana", "Bia"]).unwrap();
        for _ in 0..10 {
            game.draw_scene(2).unwrap();
            game.apply_score(5).unwrap();
        }
        assert_eq!(game.state().max_score_for_ui, 50);
    }
}
