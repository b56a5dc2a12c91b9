use curriculum_core::ActivityKey;

use super::SqliteRepository;
use super::mapping::{key_to_columns, map_completion_row};
use crate::repository::{CompletionRecord, CompletionRepository, StorageError};

#[async_trait::async_trait]
impl CompletionRepository for SqliteRepository {
    async fn mark_completed(&self, record: CompletionRecord) -> Result<(), StorageError> {
        let (phase_id, day_id, activity_index) = key_to_columns(record.key);

        // DO NOTHING keeps the first completion timestamp on repeat marks.
        sqlx::query(
            r"
            INSERT INTO completions (phase_id, day_id, activity_index, completed_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(phase_id, day_id, activity_index) DO NOTHING
            ",
        )
        .bind(phase_id)
        .bind(day_id)
        .bind(activity_index)
        .bind(record.completed_at)
        .execute(self.pool())
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn unmark_completed(&self, key: ActivityKey) -> Result<(), StorageError> {
        let (phase_id, day_id, activity_index) = key_to_columns(key);

        sqlx::query(
            r"
            DELETE FROM completions
            WHERE phase_id = ?1 AND day_id = ?2 AND activity_index = ?3
            ",
        )
        .bind(phase_id)
        .bind(day_id)
        .bind(activity_index)
        .execute(self.pool())
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn list_completions(&self) -> Result<Vec<CompletionRecord>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT phase_id, day_id, activity_index, completed_at
            FROM completions
            ORDER BY phase_id, day_id, activity_index
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        rows.iter().map(map_completion_row).collect()
    }
}
