//! Storage layer for player records
//!
//! The update processor only needs two capabilities from persistence,
//! captured by [`PlayerStore`]. Administrative creation and deletion live on
//! [`PlayerRegistry`] so the core never depends on them.
//! - `models`: Data structures
//! - `memory`: In-process store backed by a map
//! - `schema`: SQLite connection and schema management
//! - `queries`: SQLite implementations of the store traits

pub mod memory;
pub mod models;
pub mod queries;
pub mod schema;


pub use memory::MemoryStore;
pub use models::*;
pub use schema::PlayerDatabase;

use crate::error::Result;

/// Lookup and commit operations consumed by the innings update processor.
///
/// Implementations must make `persist` atomic for a single record. The core
/// does no locking of its own, so a store shared between concurrent callers
/// must serialize read-modify-write per player name.
pub trait PlayerStore {
    /// Exact-match lookup by player name.
    fn find_by_name(&self, name: &str) -> Result<Option<PlayerRecord>>;

    /// Commit the current state of an existing record.
    ///
    /// Fails with `PlayerNotFound` if no record with that name exists.
    fn persist(&mut self, record: &PlayerRecord) -> Result<()>;
}

/// Administrative record lifecycle, outside the update protocol.
pub trait PlayerRegistry: PlayerStore {
    /// Validate and insert a new record. Names are unique.
    fn create_player(&mut self, record: &PlayerRecord) -> Result<()>;

    /// Remove a record entirely.
    fn ban_player(&mut self, name: &str) -> Result<()>;
}
