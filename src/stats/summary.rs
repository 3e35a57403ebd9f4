//! Display and JSON view of a player's record with its metrics.

use super::compute::{batting_average, batting_strike_rate};
use crate::storage::PlayerRecord;
use serde::Serialize;
use std::fmt;

/// A record together with the metrics computed from it
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    #[serde(flatten)]
    pub record: PlayerRecord,
    pub batting_average: Option<f64>,
    pub batting_strike_rate: Option<f64>,
}

impl From<PlayerRecord> for PlayerSummary {
    fn from(record: PlayerRecord) -> Self {
        Self {
            batting_average: batting_average(&record),
            batting_strike_rate: batting_strike_rate(&record),
            record,
        }
    }
}

fn counter(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn metric(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

impl fmt::Display for PlayerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.record;
        write!(f, "{}", r.name)?;
        if let Some(country) = &r.country {
            write!(f, " ({})", country)?;
        }
        if let Some(role) = r.role {
            write!(f, " - {}", role)?;
        }
        writeln!(f)?;
        writeln!(f, "  Matches: {}", counter(r.matches))?;
        writeln!(
            f,
            "  Batting: {} runs in {} innings ({} not out), HS {}, 100s {}, 50s {}",
            counter(r.runs_scored),
            counter(r.innings_batted),
            counter(r.not_out),
            counter(r.high_score),
            counter(r.centuries),
            counter(r.half_centuries),
        )?;
        writeln!(
            f,
            "           {} balls, {} fours, {} sixes, Avg {}, SR {}",
            counter(r.balls_faced),
            counter(r.fours_scored),
            counter(r.sixes_scored),
            metric(self.batting_average),
            metric(self.batting_strike_rate),
        )?;
        write!(
            f,
            "  Bowling: {} wickets for {} runs from {} balls in {} innings",
            counter(r.wickets_taken),
            counter(r.runs_given),
            counter(r.balls_bowled),
            counter(r.innings_bowled),
        )
    }
}
