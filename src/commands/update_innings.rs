//! Innings update command

use crate::{
    innings::{update_innings, InningsSummary},
    scorecard::Scorecard,
    storage::PlayerStore,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Read and validate a scorecard file
pub fn load_scorecard(path: &Path) -> Result<Scorecard> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read scorecard {}", path.display()))?;
    let scorecard = Scorecard::from_json(&contents)
        .with_context(|| format!("Could not parse scorecard {}", path.display()))?;
    scorecard.validate()?;
    Ok(scorecard)
}

/// Apply the scorecard at `path` to the store and report what was committed
pub fn handle_update_innings<S>(store: &mut S, path: &Path, as_json: bool) -> Result<InningsSummary>
where
    S: PlayerStore + ?Sized,
{
    let scorecard = load_scorecard(path)?;
    let summary = update_innings(store, &scorecard.batting, &scorecard.bowling)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "✓ Innings applied: {} batters, {} bowlers updated",
            summary.batters_updated, summary.bowlers_updated
        );
    }

    Ok(summary)
}
