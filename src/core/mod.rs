//! Core types: players, roster, game state, names, RNG, configuration, errors.
//!
//! These are pure data plus invariant checks. The rules that move a show
//! forward live in `rules`; the engine that sequences them lives in `engine`.

pub mod player;
pub mod roster;
pub mod state;
pub mod names;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerStatus};
pub use roster::Roster;
pub use state::{GameState, Phase, Scene};
pub use names::{parse_name_list, sanitize_name, validate_names};
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::{GameError, NameIssue, ValidationError};
