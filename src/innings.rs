//! Innings update processor
//!
//! Applies one innings worth of batting and bowling scorecard entries to the
//! players' cumulative records. Entries are processed strictly in order,
//! batting first, and every player is persisted as soon as their entry has
//! been applied. There is no batch transaction: if a later entry fails, the
//! players already processed stay committed.
//!
//! Each player name may appear at most once per scorecard in a single call.

use crate::error::{Result, StatsError};
use crate::scorecard::{BattingEntry, BowlingEntry};
use crate::storage::{PlayerRecord, PlayerStore};
use serde::Serialize;
use tracing::{debug, info, warn};

#[cfg(test)]
mod tests;

/// Number of records committed by a completed update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InningsSummary {
    pub batters_updated: usize,
    pub bowlers_updated: usize,
}

/// Apply a batting and a bowling scorecard to the store.
///
/// Fails with `PlayerNotFound` on the first name the store cannot resolve.
/// Store errors are propagated unchanged.
pub fn update_innings<S>(
    store: &mut S,
    batting: &[BattingEntry],
    bowling: &[BowlingEntry],
) -> Result<InningsSummary>
where
    S: PlayerStore + ?Sized,
{
    let mut summary = InningsSummary::default();

    for entry in batting {
        let mut record = resolve(store, &entry.name)?;
        apply_batting(&mut record, entry)?;
        store.persist(&record)?;
        summary.batters_updated += 1;

        debug!(
            player = %record.name,
            runs = entry.runs_scored,
            balls = entry.balls_faced,
            out = entry.was_out,
            "batting entry applied"
        );
    }

    for entry in bowling {
        let mut record = resolve(store, &entry.name)?;
        apply_bowling(&mut record, entry)?;
        store.persist(&record)?;
        summary.bowlers_updated += 1;

        debug!(
            player = %record.name,
            balls = entry.balls_bowled,
            runs = entry.runs_given,
            wickets = entry.wickets,
            "bowling entry applied"
        );
    }

    info!(
        batters = summary.batters_updated,
        bowlers = summary.bowlers_updated,
        "innings applied"
    );

    Ok(summary)
}

fn resolve<S>(store: &S, name: &str) -> Result<PlayerRecord>
where
    S: PlayerStore + ?Sized,
{
    match store.find_by_name(name)? {
        Some(record) => Ok(record),
        None => {
            warn!(player = name, "player not found, aborting remaining entries");
            Err(StatsError::PlayerNotFound {
                name: name.to_string(),
            })
        }
    }
}

/// Add one batting innings to a record.
///
/// A score of 50 to 99 counts as a half-century and 100 or more as a
/// century; an innings never counts as both.
///
/// The record is left untouched if any counter it needs is absent or would
/// overflow.
pub fn apply_batting(record: &mut PlayerRecord, entry: &BattingEntry) -> Result<()> {
    let mut next = record.clone();
    let name = record.name.as_str();
    let add = |field: &mut Option<u32>, label: &'static str, delta: u32| {
        accumulate(name, field, label, delta)
    };

    add(&mut next.not_out, "not_out", u32::from(!entry.was_out))?;
    add(&mut next.runs_scored, "runs_scored", entry.runs_scored)?;
    add(&mut next.balls_faced, "balls_faced", entry.balls_faced)?;
    add(&mut next.fours_scored, "fours_scored", entry.fours)?;
    add(&mut next.sixes_scored, "sixes_scored", entry.sixes)?;
    add(&mut next.matches, "matches", 1)?;
    add(&mut next.innings_batted, "innings_batted", 1)?;

    let high_score = require(name, next.high_score, "high_score")?;
    next.high_score = Some(high_score.max(entry.runs_scored));

    match entry.runs_scored {
        50..=99 => add(&mut next.half_centuries, "half_centuries", 1)?,
        runs if runs >= 100 => add(&mut next.centuries, "centuries", 1)?,
        _ => {}
    }

    *record = next;
    Ok(())
}

/// Add one bowling innings to a record. Maidens are not tracked.
pub fn apply_bowling(record: &mut PlayerRecord, entry: &BowlingEntry) -> Result<()> {
    let mut next = record.clone();
    let name = record.name.as_str();
    let add = |field: &mut Option<u32>, label: &'static str, delta: u32| {
        accumulate(name, field, label, delta)
    };

    add(&mut next.balls_bowled, "balls_bowled", entry.balls_bowled)?;
    add(&mut next.runs_given, "runs_given", entry.runs_given)?;
    add(&mut next.wickets_taken, "wickets_taken", entry.wickets)?;
    add(&mut next.matches, "matches", 1)?;
    add(&mut next.innings_bowled, "innings_bowled", 1)?;

    *record = next;
    Ok(())
}

fn require(name: &str, value: Option<u32>, field: &'static str) -> Result<u32> {
    value.ok_or_else(|| StatsError::IncompleteRecord {
        name: name.to_string(),
        field,
    })
}

fn accumulate(
    name: &str,
    field: &mut Option<u32>,
    label: &'static str,
    delta: u32,
) -> Result<()> {
    let current = require(name, *field, label)?;
    let total = current
        .checked_add(delta)
        .ok_or_else(|| StatsError::CounterOverflow {
            name: name.to_string(),
            field: label,
        })?;
    *field = Some(total);
    Ok(())
}
