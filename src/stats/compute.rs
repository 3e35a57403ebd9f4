//! Batting metrics computed from a record's accumulated counters.

use crate::storage::PlayerRecord;


/// Runs scored per dismissal.
///
/// Returns `None` when any of `runs_scored`, `innings_batted` or `not_out` is
/// missing, or when the player has never batted. A player who has never been
/// dismissed averages their total runs.
pub fn batting_average(record: &PlayerRecord) -> Option<f64> {
    let runs = record.runs_scored?;
    let innings = record.innings_batted?;
    let not_out = record.not_out?;

    if innings == 0 {
        return None;
    }

    let dismissals = innings.saturating_sub(not_out);
    if dismissals == 0 {
        Some(f64::from(runs))
    } else {
        Some(f64::from(runs) / f64::from(dismissals))
    }
}

/// Runs scored per 100 balls faced.
///
/// Returns `None` when `innings_batted`, `runs_scored` or `balls_faced` is
/// missing, or when no balls have been faced (even if innings were batted).
pub fn batting_strike_rate(record: &PlayerRecord) -> Option<f64> {
    record.innings_batted?;
    let runs = record.runs_scored?;
    let balls = record.balls_faced.filter(|&b| b > 0)?;

    Some(f64::from(runs) * 100.0 / f64::from(balls))
}
