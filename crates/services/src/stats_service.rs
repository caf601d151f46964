use std::sync::{Arc, Mutex, PoisonError};

use kanji_core::model::{AggregateStats, StatsDelta};
use storage::repository::StatsRepository;
use tokio::sync::Mutex as AsyncMutex;

use crate::error::StatsServiceError;

/// Owns the lifetime statistics record.
///
/// Commits are applied to the in-memory copy synchronously so the summary can
/// show the new totals at once; writing them back is a separate async step
/// whose failure never rolls the in-memory copy back.
pub struct StatsService {
    repo: Arc<dyn StatsRepository>,
    current: Mutex<AggregateStats>,
    /// Held across a save so writes reach the repository one at a time.
    save_lock: AsyncMutex<()>,
}

impl StatsService {
    #[must_use]
    pub fn new(repo: Arc<dyn StatsRepository>) -> Self {
        Self {
            repo,
            current: Mutex::new(AggregateStats::default()),
            save_lock: AsyncMutex::new(()),
        }
    }

    /// Load the persisted record into memory.
    ///
    /// A missing or unreadable record yields all-zero counters.
    pub async fn load(&self) -> AggregateStats {
        let loaded = match self.repo.load_stats().await {
            Ok(Some(stats)) => stats,
            Ok(None) => AggregateStats::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load stats, starting from zero");
                AggregateStats::default()
            }
        };
        *self.lock() = loaded;
        loaded
    }

    #[must_use]
    pub fn snapshot(&self) -> AggregateStats {
        *self.lock()
    }

    /// Fold a completed test pass into the in-memory record.
    pub fn commit(&self, delta: StatsDelta) -> AggregateStats {
        let mut guard = self.lock();
        *guard = guard.apply(delta);
        tracing::info!(
            reviews = delta.reviews(),
            correct = delta.correct(),
            total_reviews = guard.total_reviews(),
            modules_completed = guard.modules_completed(),
            "test pass committed"
        );
        *guard
    }

    /// Write the current in-memory record to the repository.
    ///
    /// Saves are serialized and each one takes its snapshot only once it holds
    /// the lock, so the last save to finish always carries the newest totals.
    ///
    /// # Errors
    ///
    /// Returns `StatsServiceError` when the repository rejects the write; the
    /// failure is also logged.
    pub async fn persist(&self) -> Result<AggregateStats, StatsServiceError> {
        let _guard = self.save_lock.lock().await;
        let stats = self.snapshot();
        if let Err(err) = self.repo.save_stats(&stats).await {
            tracing::warn!(error = %err, "failed to persist stats");
            return Err(err.into());
        }
        Ok(stats)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AggregateStats> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
