//! Error types for loading level plans
//!
//! Everything here is a construction-time failure: once a `Level` exists
//! the simulation itself cannot fail.

use thiserror::Error;

/// A level plan that cannot be turned into a `Level`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("level plan has no rows")]
    NoRows,

    #[error("level plan has an empty first row")]
    EmptyRow,

    #[error("row {row} is {found} characters wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("level plan has no player ('@')")]
    MissingPlayer,

    #[error("second player at {second:?}, first one at {first:?}")]
    DuplicatePlayer {
        first: (usize, usize),
        second: (usize, usize),
    },
}

/// Failure loading a campaign (an ordered list of level plans)
#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("failed to read campaign: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse campaign: {0}")]
    Json(#[from] serde_json::Error),

    #[error("campaign has no levels")]
    Empty,

    #[error("level '{name}' is invalid: {source}")]
    Plan {
        name: String,
        #[source]
        source: PlanError,
    },
}
