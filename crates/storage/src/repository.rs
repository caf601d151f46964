use async_trait::async_trait;
use kanji_core::model::AggregateStats;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Fixed key under which the aggregate statistics record is stored.
pub const STATS_STORAGE_KEY: &str = "kanji-drill.stats";

/// Repository contract for the lifetime statistics record.
///
/// The record is always written in full; there are no partial updates.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Fetch the persisted record, if one has been written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be read or is corrupt.
    async fn load_stats(&self) -> Result<Option<AggregateStats>, StorageError>;

    /// Overwrite the persisted record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_stats(&self, stats: &AggregateStats) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    stats: Arc<Mutex<Option<AggregateStats>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stats: Arc::new(Mutex::new(None)),
        }
    }

    /// Repository pre-populated with an existing record.
    #[must_use]
    pub fn with_stats(stats: AggregateStats) -> Self {
        Self {
            stats: Arc::new(Mutex::new(Some(stats))),
        }
    }
}

#[async_trait]
impl StatsRepository for InMemoryRepository {
    async fn load_stats(&self) -> Result<Option<AggregateStats>, StorageError> {
        let guard = self
            .stats
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }

    async fn save_stats(&self, stats: &AggregateStats) -> Result<(), StorageError> {
        let mut guard = self
            .stats
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(*stats);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub stats: Arc<dyn StatsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let stats: Arc<dyn StatsRepository> = Arc::new(InMemoryRepository::new());
        Self { stats }
    }
}
