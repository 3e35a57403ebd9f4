//! Cricket Career Statistics Library
//!
//! Maintains cumulative batting and bowling statistics per player, applies
//! innings scorecards to them, and derives batting metrics.
//!
//! ## Features
//!
//! - **Innings Updates**: Apply batting and bowling scorecards player by player
//! - **Batting Metrics**: Average and strike rate with explicit missing-data rules
//! - **Pluggable Storage**: Any [`storage::PlayerStore`], with in-memory and SQLite implementations
//!
//! ## Quick Start
//!
//! ```rust
//! use cricket_stats::{
//!     innings::update_innings,
//!     scorecard::BattingEntry,
//!     stats::batting_average,
//!     storage::{MemoryStore, PlayerRecord, PlayerStore},
//! };
//!
//! # fn main() -> cricket_stats::Result<()> {
//! let mut store = MemoryStore::with_players(vec![
//!     PlayerRecord::new("Rohit Sharma")?,
//!     PlayerRecord::new("Shubman Gill")?,
//! ])?;
//!
//! update_innings(
//!     &mut store,
//!     &[
//!         BattingEntry::new("Rohit Sharma", true, 26, 77, 3, 1),
//!         BattingEntry::new("Shubman Gill", false, 50, 101, 8, 0),
//!     ],
//!     &[],
//! )?;
//!
//! let rohit = store.find_by_name("Rohit Sharma")?.unwrap();
//! assert_eq!(batting_average(&rohit), Some(26.0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file without passing `--db` every time:
//! ```bash
//! export CRICKET_STATS_DB=~/cricket/players.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod innings;
pub mod scorecard;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::Role;
pub use error::{Result, StatsError};
pub use innings::{update_innings, InningsSummary};
pub use scorecard::{BattingEntry, BowlingEntry, Scorecard};
pub use stats::{batting_average, batting_strike_rate};
pub use storage::{MemoryStore, PlayerDatabase, PlayerRecord, PlayerRegistry, PlayerStore};

pub const DB_PATH_ENV_VAR: &str = "CRICKET_STATS_DB";
