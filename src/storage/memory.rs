//! In-memory player store

use super::{PlayerRecord, PlayerRegistry, PlayerStore};
use crate::error::{Result, StatsError};
use std::collections::BTreeMap;

/// Map-backed store, ordered by player name.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    players: BTreeMap<String, PlayerRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records, rejecting duplicates.
    pub fn with_players<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = PlayerRecord>,
    {
        let mut store = Self::new();
        for record in records {
            store.create_player(&record)?;
        }
        Ok(store)
    }

    pub fn get(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.get(name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl PlayerStore for MemoryStore {
    fn find_by_name(&self, name: &str) -> Result<Option<PlayerRecord>> {
        Ok(self.players.get(name).cloned())
    }

    fn persist(&mut self, record: &PlayerRecord) -> Result<()> {
        match self.players.get_mut(&record.name) {
            Some(stored) => {
                *stored = record.clone();
                Ok(())
            }
            None => Err(StatsError::PlayerNotFound {
                name: record.name.clone(),
            }),
        }
    }
}

impl PlayerRegistry for MemoryStore {
    fn create_player(&mut self, record: &PlayerRecord) -> Result<()> {
        record.validate()?;
        if self.players.contains_key(&record.name) {
            return Err(StatsError::DuplicatePlayer {
                name: record.name.clone(),
            });
        }
        self.players.insert(record.name.clone(), record.clone());
        Ok(())
    }

    fn ban_player(&mut self, name: &str) -> Result<()> {
        self.players
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StatsError::PlayerNotFound {
                name: name.to_string(),
            })
    }
}
