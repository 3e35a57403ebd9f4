//! Database schema and connection management

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

/// SQLite-backed player store
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Open (or create) the database file at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Could not create data directory {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Could not open database {}", path.display()))?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create a transient database, used by tests and dry runs
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Counters stay nullable: historical imports may lack some of them
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                name TEXT PRIMARY KEY NOT NULL,
                country TEXT,
                role TEXT,
                matches INTEGER,
                innings_batted INTEGER,
                not_out INTEGER,
                runs_scored INTEGER,
                balls_faced INTEGER,
                fours_scored INTEGER,
                sixes_scored INTEGER,
                high_score INTEGER,
                centuries INTEGER,
                half_centuries INTEGER,
                innings_bowled INTEGER,
                balls_bowled INTEGER,
                runs_given INTEGER,
                wickets_taken INTEGER
            )",
            [],
        )?;

        Ok(())
    }
}
