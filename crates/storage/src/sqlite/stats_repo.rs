use async_trait::async_trait;
use chrono::Utc;

use crate::repository::{STATS_STORAGE_KEY, StatsRepository, StorageError};
use kanji_core::model::AggregateStats;

use super::SqliteRepository;
use super::mapping::{map_stats_row, u64_to_i64};

#[async_trait]
impl StatsRepository for SqliteRepository {
    async fn load_stats(&self) -> Result<Option<AggregateStats>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT
                total_reviews,
                correct_reviews,
                modules_completed
            FROM aggregate_stats
            WHERE storage_key = ?1
            ",
        )
        .bind(STATS_STORAGE_KEY)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        row.as_ref().map(map_stats_row).transpose()
    }

    async fn save_stats(&self, stats: &AggregateStats) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO aggregate_stats (
                storage_key,
                total_reviews,
                correct_reviews,
                modules_completed,
                updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(storage_key) DO UPDATE SET
                total_reviews = excluded.total_reviews,
                correct_reviews = excluded.correct_reviews,
                modules_completed = excluded.modules_completed,
                updated_at = excluded.updated_at
            ",
        )
        .bind(STATS_STORAGE_KEY)
        .bind(u64_to_i64("total_reviews", stats.total_reviews())?)
        .bind(u64_to_i64("correct_reviews", stats.correct_reviews())?)
        .bind(u64_to_i64("modules_completed", stats.modules_completed())?)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
