//! Playing role classification for cricketers.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The primary role a player is registered under.
///
/// Roles are informational only; the update protocol accumulates batting and
/// bowling counters for any player regardless of role.
///
/// # Examples
///
/// ```rust
/// use cricket_stats::Role;
///
/// let role: Role = "keeper".parse().unwrap();
/// assert_eq!(role, Role::Wicketkeeper);
/// assert_eq!(role.to_string(), "Wicketkeeper");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Batter,
    Bowler,
    Wicketkeeper,
    #[serde(rename = "All-rounder")]
    AllRounder,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Batter => "Batter",
            Role::Bowler => "Bowler",
            Role::Wicketkeeper => "Wicketkeeper",
            Role::AllRounder => "All-rounder",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Role {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "batter" | "batsman" => Ok(Role::Batter),
            "bowler" => Ok(Role::Bowler),
            "wicketkeeper" | "wicket-keeper" | "keeper" => Ok(Role::Wicketkeeper),
            "all-rounder" | "allrounder" => Ok(Role::AllRounder),
            _ => Err(StatsError::InvalidRole {
                role: s.to_string(),
            }),
        }
    }
}
