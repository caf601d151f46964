use kanji_core::model::AggregateStats;
use sqlx::Row;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

pub(crate) fn u64_to_i64(field: &'static str, v: u64) -> Result<i64, StorageError> {
    i64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} overflow")))
}

pub(crate) fn map_stats_row(row: &sqlx::sqlite::SqliteRow) -> Result<AggregateStats, StorageError> {
    let total = i64_to_u64("total_reviews", row.try_get("total_reviews").map_err(ser)?)?;
    let correct = i64_to_u64("correct_reviews", row.try_get("correct_reviews").map_err(ser)?)?;
    let completed = i64_to_u64(
        "modules_completed",
        row.try_get("modules_completed").map_err(ser)?,
    )?;

    AggregateStats::from_persisted(total, correct, completed).map_err(ser)
}
