//! Aggregation of a completion set against the curriculum tree.

use crate::model::{CompletionSet, Curriculum, PhaseId};

/// Completion tally for one phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseProgress {
    pub phase: PhaseId,
    pub title: String,
    pub completed: u32,
    pub total: u32,
}

impl PhaseProgress {
    /// Completion percentage for this phase, 0.0 for an empty phase.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.completed) / f64::from(self.total) * 100.0
        }
    }
}

/// Derived statistics for the whole curriculum.
///
/// Recomputed from scratch on demand; the computation is a single pass over
/// the completion set plus one over the phase list, so there is nothing to
/// memoize.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub total_activities: u32,
    pub completed: u32,
    pub phases: Vec<PhaseProgress>,
}

impl ProgressReport {
    /// Tally the completion set against the curriculum.
    ///
    /// Only keys that resolve to a real activity count; stale keys (from an
    /// older curriculum revision, or hand-edited data) are ignored. That
    /// guarantees `completed <= total` both overall and per phase.
    #[must_use]
    pub fn compute(curriculum: &Curriculum, completions: &CompletionSet) -> Self {
        let mut phases: Vec<PhaseProgress> = curriculum
            .phases()
            .iter()
            .map(|phase| PhaseProgress {
                phase: phase.id(),
                title: phase.title().to_owned(),
                completed: 0,
                total: phase.activity_count(),
            })
            .collect();

        let mut completed = 0;
        for key in completions.iter() {
            if !curriculum.contains(key) {
                continue;
            }
            completed += 1;
            if let Some(entry) = phases.iter_mut().find(|entry| entry.phase == key.phase) {
                entry.completed += 1;
            }
        }

        Self {
            total_activities: curriculum.total_activities(),
            completed,
            phases,
        }
    }

    /// Overall completion percentage rounded to the nearest integer.
    ///
    /// An empty curriculum reports 0 rather than dividing by zero.
    #[must_use]
    pub fn overall_percent(&self) -> u8 {
        if self.total_activities == 0 {
            return 0;
        }
        let percent =
            f64::from(self.completed) / f64::from(self.total_activities) * 100.0;
        percent.round() as u8
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.total_activities.saturating_sub(self.completed)
    }

    /// Rough estimate of days left in the 100-day program, scaled off the
    /// unrounded completion percentage: `ceil(100 - percent)`. Zero once
    /// everything is complete (or the curriculum is empty).
    #[must_use]
    pub fn days_remaining(&self) -> u32 {
        if self.total_activities == 0 || self.remaining() == 0 {
            return 0;
        }
        let percent =
            f64::from(self.completed) / f64::from(self.total_activities) * 100.0;
        (100.0 - percent).ceil() as u32
    }
}
