use std::sync::Arc;

use curriculum_core::{Curriculum, ProgressReport};
use storage::repository::{CompletionRepository, load_completion_set};

use crate::error::ProgressServiceError;

/// Derives progress statistics from the completion repository and the
/// static curriculum. Stateless beyond its handles; every call reloads and
/// recomputes.
#[derive(Clone)]
pub struct ProgressService {
    curriculum: Arc<Curriculum>,
    completions: Arc<dyn CompletionRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(curriculum: Arc<Curriculum>, completions: Arc<dyn CompletionRepository>) -> Self {
        Self {
            curriculum,
            completions,
        }
    }

    #[must_use]
    pub fn curriculum(&self) -> Arc<Curriculum> {
        Arc::clone(&self.curriculum)
    }

    /// Load completions and tally them against the curriculum.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if repository access fails.
    pub async fn report(&self) -> Result<ProgressReport, ProgressServiceError> {
        let set = load_completion_set(self.completions.as_ref()).await?;
        Ok(ProgressReport::compute(&self.curriculum, &set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use curriculum_core::time::fixed_clock;
    use curriculum_core::{Activity, ActivityKey, Day, DayId, Phase, PhaseId};
    use storage::repository::InMemoryRepository;

    use crate::CompletionService;

    fn curriculum() -> Arc<Curriculum> {
        let day = |id: u32, n: usize| {
            Day::new(
                DayId::new(id),
                format!("Day {id}"),
                (0..n).map(|i| Activity::new(format!("Task {i}"))).collect(),
            )
        };
        Arc::new(
            Curriculum::new(vec![
                Phase::new(PhaseId::new(1), "Foundations", vec![day(1, 2)]),
                Phase::new(PhaseId::new(2), "Applied", vec![day(2, 2)]),
            ])
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn report_reflects_marked_activities() {
        let repo = Arc::new(InMemoryRepository::new());
        let completions = CompletionService::new(fixed_clock(), repo.clone());
        let progress = ProgressService::new(curriculum(), repo);

        let report = progress.report().await.unwrap();
        assert_eq!(report.overall_percent(), 0);

        completions
            .set_completed(ActivityKey::new(PhaseId::new(1), DayId::new(1), 0), true)
            .await
            .unwrap();
        completions
            .set_completed(ActivityKey::new(PhaseId::new(2), DayId::new(2), 1), true)
            .await
            .unwrap();

        let report = progress.report().await.unwrap();
        assert_eq!(report.completed, 2);
        assert_eq!(report.overall_percent(), 50);
        let phase_2 = report
            .phases
            .iter()
            .find(|p| p.phase == PhaseId::new(2))
            .unwrap();
        assert_eq!(phase_2.completed, 1);
    }

    #[tokio::test]
    async fn report_ignores_keys_outside_curriculum() {
        let repo = Arc::new(InMemoryRepository::new());
        let completions = CompletionService::new(fixed_clock(), repo.clone());
        let progress = ProgressService::new(curriculum(), repo);

        completions
            .set_completed(ActivityKey::new(PhaseId::new(9), DayId::new(9), 9), true)
            .await
            .unwrap();

        let report = progress.report().await.unwrap();
        assert_eq!(report.completed, 0);
        assert_eq!(report.overall_percent(), 0);
    }
}
