//! Error types for the cricket statistics engine

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Player already exists: {name}")]
    DuplicatePlayer { name: String },

    #[error("Player name must not be empty")]
    InvalidName,

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("Inconsistent record for {name}: {reason}")]
    InconsistentRecord { name: String, reason: String },

    #[error("Record for {name} has no value for {field}")]
    IncompleteRecord { name: String, field: &'static str },

    #[error("{field} for {name} would exceed the counter limit")]
    CounterOverflow { name: String, field: &'static str },

    #[error("Invalid scorecard: {reason}")]
    InvalidScorecard { reason: String },

    #[error("Invalid role: {role}")]
    InvalidRole { role: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database path not provided, {env_var} not set and no data directory available")]
    MissingDatabasePath { env_var: String },
}
