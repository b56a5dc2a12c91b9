use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use curriculum_core::{ActivityKey, CompletionSet};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of one completed activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionRecord {
    pub key: ActivityKey,
    pub completed_at: DateTime<Utc>,
}

/// Repository contract for the completed-activity set.
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Record an activity as complete. Recording the same key again keeps
    /// the original timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn mark_completed(&self, record: CompletionRecord) -> Result<(), StorageError>;

    /// Remove a completion record if present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be removed.
    async fn unmark_completed(&self, key: ActivityKey) -> Result<(), StorageError>;

    /// All completion records, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the records cannot be read.
    async fn list_completions(&self) -> Result<Vec<CompletionRecord>, StorageError>;
}

/// Load the repository contents as a plain `CompletionSet`.
///
/// # Errors
///
/// Propagates the repository read error.
pub async fn load_completion_set(
    repo: &dyn CompletionRepository,
) -> Result<CompletionSet, StorageError> {
    let records = repo.list_completions().await?;
    Ok(records.into_iter().map(|record| record.key).collect())
}

/// Simple in-memory repository for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    completions: Arc<Mutex<HashMap<ActivityKey, DateTime<Utc>>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ActivityKey, DateTime<Utc>>> {
        self.completions
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl CompletionRepository for InMemoryRepository {
    async fn mark_completed(&self, record: CompletionRecord) -> Result<(), StorageError> {
        self.lock().entry(record.key).or_insert(record.completed_at);
        Ok(())
    }

    async fn unmark_completed(&self, key: ActivityKey) -> Result<(), StorageError> {
        self.lock().remove(&key);
        Ok(())
    }

    async fn list_completions(&self) -> Result<Vec<CompletionRecord>, StorageError> {
        Ok(self
            .lock()
            .iter()
            .map(|(key, completed_at)| CompletionRecord {
                key: *key,
                completed_at: *completed_at,
            })
            .collect())
    }
}

/// Bundle of repository handles handed to the service layer.
#[derive(Clone)]
pub struct Storage {
    pub completions: Arc<dyn CompletionRepository>,
}

impl Storage {
    /// Build a `Storage` backed by in-memory repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            completions: Arc::new(InMemoryRepository::new()),
        }
    }
}
