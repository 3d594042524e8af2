//! Error types for engine operations.
//!
//! Every error is reported before the engine takes its history snapshot,
//! so a failed operation never changes the game state.

use thiserror::Error;

use super::player::PlayerId;
use super::state::Phase;

/// A single problem found in a submitted name list.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NameIssue {
    #[error("at least one player name is required")]
    NoNames,

    #[error("at most {max} players are allowed, got {got}")]
    TooManyPlayers { max: usize, got: usize },

    #[error("empty name is not allowed")]
    Empty,

    #[error("name \"{name}\" is too short (minimum {min} characters)")]
    TooShort { name: String, min: usize },

    #[error("name \"{name}\" is too long (maximum {max} characters)")]
    TooLong { name: String, max: usize },

    #[error("duplicate names: {}", .0.join(", "))]
    Duplicates(Vec<String>),
}

/// A rejected name list, with every issue found.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid player list: {}", format_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<NameIssue>,
}

impl ValidationError {
    #[must_use]
    pub fn new(issues: Vec<NameIssue>) -> Self {
        Self { issues }
    }

    #[must_use]
    pub fn single(issue: NameIssue) -> Self {
        Self { issues: vec![issue] }
    }
}

fn format_issues(issues: &[NameIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors returned by game operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("score the players on stage before drawing a new scene")]
    SceneInProgress,

    #[error("no scene is waiting for a score")]
    NoActiveScene,

    #[error("cannot eliminate {requested} of {active} active players")]
    EliminateAllRejected { requested: usize, active: usize },

    #[error("{remaining} active players have not played this round yet")]
    RoundIncomplete { remaining: usize },

    #[error("{what} must be at least 1, got {value}")]
    InvalidCount { what: &'static str, value: usize },

    #[error("{operation} is not allowed during {phase}")]
    InvalidPhase { operation: &'static str, phase: Phase },

    #[error("score of player {0} would overflow")]
    ScoreOverflow(PlayerId),

    #[error("player {0} not found")]
    NotFound(PlayerId),
}
