//! Derived batting metrics
//!
//! - `compute`: pure metric functions over a record's accumulated counters
//! - `summary`: display-ready view pairing a record with its metrics

pub mod compute;
pub mod summary;

pub use compute::{batting_average, batting_strike_rate};
pub use summary::PlayerSummary;
