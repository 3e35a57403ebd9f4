//! Player administration and display commands

use crate::{
    cli::types::Role,
    stats::PlayerSummary,
    storage::{PlayerRecord, PlayerRegistry, PlayerStore},
    StatsError,
};
use anyhow::Result;

/// Register a new player with zeroed counters
pub fn handle_add<S>(
    store: &mut S,
    name: &str,
    country: Option<String>,
    role: Option<Role>,
) -> Result<()>
where
    S: PlayerRegistry + ?Sized,
{
    let mut record = PlayerRecord::new(name)?;
    record.country = country;
    record.role = role;

    store.create_player(&record)?;
    println!("✓ Added {}", record.name);
    Ok(())
}

/// Look up a player and compute their derived metrics
pub fn player_summary<S>(store: &S, name: &str) -> crate::Result<PlayerSummary>
where
    S: PlayerStore + ?Sized,
{
    store
        .find_by_name(name)?
        .map(PlayerSummary::from)
        .ok_or_else(|| StatsError::PlayerNotFound {
            name: name.to_string(),
        })
}

/// Print a player's record and metrics
pub fn handle_show<S>(store: &S, name: &str, as_json: bool) -> Result<()>
where
    S: PlayerStore + ?Sized,
{
    let summary = player_summary(store, name)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

/// Remove a player's record
pub fn handle_ban<S>(store: &mut S, name: &str) -> Result<()>
where
    S: PlayerRegistry + ?Sized,
{
    store.ban_player(name)?;
    println!("✓ Removed {}", name);
    Ok(())
}
