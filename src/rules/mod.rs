//! Show rules: drawing scenes, scoring them, cutting players, and rolling
//! rounds over.
//!
//! Every rule is a plain state transform over `GameState`. Checks run before
//! any mutation, so a rule that returns an error has left the state as it
//! found it. The engine decides when to snapshot around them.

pub mod round;
pub mod draw;
pub mod scoring;
pub mod elimination;

pub use draw::{check_draw, draw_scene, DrawOutcome};
pub use elimination::{apply_elimination, check_round_complete, select_for_elimination, EliminationOutcome};
pub use round::{is_round_complete, rollover};
pub use scoring::apply_score;
