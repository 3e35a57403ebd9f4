//! Scorecard entries for one innings.
//!
//! Entries serialize as fixed-arity JSON arrays in scorecard column order:
//!
//! ```json
//! {
//!   "batting": [["Rohit Sharma", true, 26, 77, 3, 1]],
//!   "bowling": [["Mitchell Starc", 114, 7, 61, 1]]
//! }
//! ```

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Number of batters that can appear in a single innings.
pub const BATTERS_PER_INNINGS: RangeInclusive<usize> = 2..=11;

type BattingRow = (String, bool, u32, u32, u32, u32);
type BowlingRow = (String, u32, u32, u32, u32);

/// `[player name, is out, runs scored, balls faced, fours, sixes]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BattingRow", into = "BattingRow")]
pub struct BattingEntry {
    pub name: String,
    pub was_out: bool,
    pub runs_scored: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
}

impl BattingEntry {
    pub fn new(
        name: impl Into<String>,
        was_out: bool,
        runs_scored: u32,
        balls_faced: u32,
        fours: u32,
        sixes: u32,
    ) -> Self {
        Self {
            name: name.into(),
            was_out,
            runs_scored,
            balls_faced,
            fours,
            sixes,
        }
    }
}

impl From<BattingRow> for BattingEntry {
    fn from((name, was_out, runs_scored, balls_faced, fours, sixes): BattingRow) -> Self {
        Self::new(name, was_out, runs_scored, balls_faced, fours, sixes)
    }
}

impl From<BattingEntry> for BattingRow {
    fn from(e: BattingEntry) -> Self {
        (
            e.name,
            e.was_out,
            e.runs_scored,
            e.balls_faced,
            e.fours,
            e.sixes,
        )
    }
}

/// `[player name, balls bowled, maidens, runs given, wickets]`
///
/// Maidens are carried for completeness but are not accumulated into any
/// career counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BowlingRow", into = "BowlingRow")]
pub struct BowlingEntry {
    pub name: String,
    pub balls_bowled: u32,
    pub maidens: u32,
    pub runs_given: u32,
    pub wickets: u32,
}

impl BowlingEntry {
    pub fn new(
        name: impl Into<String>,
        balls_bowled: u32,
        maidens: u32,
        runs_given: u32,
        wickets: u32,
    ) -> Self {
        Self {
            name: name.into(),
            balls_bowled,
            maidens,
            runs_given,
            wickets,
        }
    }
}

impl From<BowlingRow> for BowlingEntry {
    fn from((name, balls_bowled, maidens, runs_given, wickets): BowlingRow) -> Self {
        Self::new(name, balls_bowled, maidens, runs_given, wickets)
    }
}

impl From<BowlingEntry> for BowlingRow {
    fn from(e: BowlingEntry) -> Self {
        (e.name, e.balls_bowled, e.maidens, e.runs_given, e.wickets)
    }
}

/// Batting and bowling scorecards for one innings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub batting: Vec<BattingEntry>,
    #[serde(default)]
    pub bowling: Vec<BowlingEntry>,
}

impl Scorecard {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the shape of an innings before it is applied.
    ///
    /// Each player may appear at most once per list; repeated names would be
    /// accumulated twice against the same record.
    pub fn validate(&self) -> Result<()> {
        if !BATTERS_PER_INNINGS.contains(&self.batting.len()) {
            return Err(invalid(format!(
                "expected {} to {} batters, got {}",
                BATTERS_PER_INNINGS.start(),
                BATTERS_PER_INNINGS.end(),
                self.batting.len()
            )));
        }

        check_names("batting", self.batting.iter().map(|e| e.name.as_str()))?;
        check_names("bowling", self.bowling.iter().map(|e| e.name.as_str()))?;

        Ok(())
    }
}

fn check_names<'a>(list: &str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(invalid(format!("empty player name in {} scorecard", list)));
        }
        if !seen.insert(name) {
            return Err(invalid(format!(
                "{} appears more than once in {} scorecard",
                name, list
            )));
        }
    }
    Ok(())
}

fn invalid(reason: String) -> StatsError {
    StatsError::InvalidScorecard { reason }
}
