use curriculum_core::{ActivityKey, DayId, PhaseId};
use sqlx::Row;

use crate::repository::{CompletionRecord, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn i64_to_u32(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} out of range")))
}

pub(crate) fn key_to_columns(key: ActivityKey) -> (i64, i64, i64) {
    (
        i64::from(key.phase.value()),
        i64::from(key.day.value()),
        i64::from(key.index),
    )
}

pub(crate) fn map_completion_row(
    row: &sqlx::sqlite::SqliteRow,
) -> Result<CompletionRecord, StorageError> {
    let phase = i64_to_u32("phase_id", row.try_get("phase_id").map_err(ser)?)?;
    let day = i64_to_u32("day_id", row.try_get("day_id").map_err(ser)?)?;
    let index = i64_to_u32("activity_index", row.try_get("activity_index").map_err(ser)?)?;
    let completed_at = row.try_get("completed_at").map_err(ser)?;

    Ok(CompletionRecord {
        key: ActivityKey::new(PhaseId::new(phase), DayId::new(day), index),
        completed_at,
    })
}
