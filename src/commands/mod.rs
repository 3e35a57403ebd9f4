//! Command implementations for the cricket-stats CLI

pub mod player;
pub mod update_innings;


use crate::{error::StatsError, storage::PlayerDatabase, Result, DB_PATH_ENV_VAR};
use anyhow::Context;
use std::path::PathBuf;

/// Resolve the database path from the flag, the environment, or the user data directory
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    db.or_else(|| {
        std::env::var_os(DB_PATH_ENV_VAR)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    })
    .or_else(|| dirs::data_dir().map(|dir| dir.join("cricket-stats").join("players.db")))
    .ok_or_else(|| StatsError::MissingDatabasePath {
        env_var: DB_PATH_ENV_VAR.to_string(),
    })
}

/// Open the player database at the resolved path
pub fn open_database(db: Option<PathBuf>) -> anyhow::Result<PlayerDatabase> {
    let path = resolve_db_path(db)?;
    tracing::debug!(path = %path.display(), "opening player database");
    PlayerDatabase::open(&path).with_context(|| format!("Failed to open {}", path.display()))
}
