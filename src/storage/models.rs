//! Data models for the storage layer

use crate::cli::types::Role;
use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};

/// Cumulative career statistics for one player, keyed by `name`.
///
/// Counters are optional because historical data can have gaps (e.g. balls
/// faced were not recorded for older careers). A record created through
/// [`PlayerRecord::new`] starts with every counter at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub country: Option<String>,
    pub role: Option<Role>,

    pub matches: Option<u32>,
    pub innings_batted: Option<u32>,
    pub not_out: Option<u32>,
    pub runs_scored: Option<u32>,
    pub balls_faced: Option<u32>,
    pub fours_scored: Option<u32>,
    pub sixes_scored: Option<u32>,
    pub high_score: Option<u32>,
    pub centuries: Option<u32>,
    pub half_centuries: Option<u32>,

    pub innings_bowled: Option<u32>,
    pub balls_bowled: Option<u32>,
    pub runs_given: Option<u32>,
    pub wickets_taken: Option<u32>,
}

impl PlayerRecord {
    /// Create a record with zeroed counters.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StatsError::InvalidName);
        }

        Ok(Self {
            name,
            country: None,
            role: None,
            matches: Some(0),
            innings_batted: Some(0),
            not_out: Some(0),
            runs_scored: Some(0),
            balls_faced: Some(0),
            fours_scored: Some(0),
            sixes_scored: Some(0),
            high_score: Some(0),
            centuries: Some(0),
            half_centuries: Some(0),
            innings_bowled: Some(0),
            balls_bowled: Some(0),
            runs_given: Some(0),
            wickets_taken: Some(0),
        })
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Set `not_out`, rejecting values outside `[0, innings_batted]`.
    ///
    /// For administrative corrections to a stored record; the innings update
    /// path only ever increments the counter.
    pub fn set_not_out(&mut self, value: u32) -> Result<()> {
        let max = self.innings_batted.unwrap_or(0);
        if value > max {
            return Err(StatsError::OutOfRange {
                field: "not_out",
                value,
                min: 0,
                max,
            });
        }
        self.not_out = Some(value);
        Ok(())
    }

    /// Check the multi-field invariants that hold for any stored record.
    ///
    /// Checks that need an absent counter are skipped.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StatsError::InvalidName);
        }

        if let (Some(not_out), Some(innings)) = (self.not_out, self.innings_batted) {
            if not_out > innings {
                return Err(self.inconsistent(format!(
                    "not_out ({}) exceeds innings_batted ({})",
                    not_out, innings
                )));
            }
        }

        if let (Some(hundreds), Some(fifties), Some(innings)) =
            (self.centuries, self.half_centuries, self.innings_batted)
        {
            match hundreds.checked_add(fifties) {
                Some(milestones) if milestones <= innings => {}
                _ => {
                    return Err(self.inconsistent(format!(
                        "{} centuries and {} half-centuries recorded in {} innings",
                        hundreds, fifties, innings
                    )));
                }
            }
        }

        Ok(())
    }

    fn inconsistent(&self, reason: String) -> StatsError {
        StatsError::InconsistentRecord {
            name: self.name.clone(),
            reason,
        }
    }
}
