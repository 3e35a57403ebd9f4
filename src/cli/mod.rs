//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::Role;

#[derive(Debug, Parser)]
#[clap(name = "cricket-stats", about = "Cumulative cricket career statistics")]
pub struct CricketStats {
    /// SQLite database file (or set `CRICKET_STATS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log each applied scorecard entry.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register a new player with zeroed career counters
    Add {
        /// Full player name, used as the unique key.
        name: String,

        /// Country the player represents.
        #[clap(long)]
        country: Option<String>,

        /// Playing role: batter, bowler, wicketkeeper or all-rounder.
        #[clap(long, short)]
        role: Option<Role>,
    },

    /// Apply one innings scorecard to the players' career statistics.
    ///
    /// The file holds `{"batting": [[name, is_out, runs, balls, 4s, 6s], ...],
    /// "bowling": [[name, balls, maidens, runs, wickets], ...]}`. Players are
    /// committed one at a time; an unknown name stops the update there.
    UpdateInnings {
        /// Path to the scorecard JSON file.
        scorecard: PathBuf,

        /// Output the update summary as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Show a player's career record with batting average and strike rate
    Show {
        /// Exact player name.
        name: String,

        /// Output as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Delete a player's record entirely
    Ban {
        /// Exact player name.
        name: String,
    },
}
