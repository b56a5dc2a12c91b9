use std::sync::Arc;

use curriculum_core::{ActivityKey, CompletionSet};
use storage::repository::{CompletionRecord, CompletionRepository};

use crate::Clock;
use crate::error::CompletionServiceError;

/// Orchestrates marking and unmarking activities against the repository.
#[derive(Clone)]
pub struct CompletionService {
    clock: Clock,
    completions: Arc<dyn CompletionRepository>,
}

impl CompletionService {
    #[must_use]
    pub fn new(clock: Clock, completions: Arc<dyn CompletionRepository>) -> Self {
        Self { clock, completions }
    }

    /// Mark or unmark one activity. Marking stamps the current clock time;
    /// re-marking an already complete activity is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CompletionServiceError::Storage` if persistence fails.
    pub async fn set_completed(
        &self,
        key: ActivityKey,
        completed: bool,
    ) -> Result<(), CompletionServiceError> {
        if completed {
            let record = CompletionRecord {
                key,
                completed_at: self.clock.now(),
            };
            self.completions.mark_completed(record).await?;
        } else {
            self.completions.unmark_completed(key).await?;
        }
        Ok(())
    }

    /// The current completed-activity set.
    ///
    /// # Errors
    ///
    /// Returns `CompletionServiceError::Storage` if repository access fails.
    pub async fn completed_set(&self) -> Result<CompletionSet, CompletionServiceError> {
        let set = storage::repository::load_completion_set(self.completions.as_ref()).await?;
        Ok(set)
    }
}
