use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::{ActivityKey, DayId, PhaseId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CurriculumError {
    #[error("duplicate phase id {0}")]
    DuplicatePhase(PhaseId),

    #[error("duplicate day id {day} in phase {phase}")]
    DuplicateDay { phase: PhaseId, day: DayId },

    #[error("phase {0} has an empty title")]
    EmptyPhaseTitle(PhaseId),
}

/// The atomic trackable unit of curriculum progress.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Activity {
    title: String,
}

impl Activity {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A grouping of activities within a phase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Day {
    id: DayId,
    title: String,
    activities: Vec<Activity>,
}

impl Day {
    #[must_use]
    pub fn new(id: DayId, title: impl Into<String>, activities: Vec<Activity>) -> Self {
        Self {
            id,
            title: title.into(),
            activities,
        }
    }

    #[must_use]
    pub fn id(&self) -> DayId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }
}

/// A top-level grouping of curriculum days.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Phase {
    id: PhaseId,
    title: String,
    days: Vec<Day>,
}

impl Phase {
    #[must_use]
    pub fn new(id: PhaseId, title: impl Into<String>, days: Vec<Day>) -> Self {
        Self {
            id,
            title: title.into(),
            days,
        }
    }

    #[must_use]
    pub fn id(&self) -> PhaseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Number of activities across all days of this phase.
    #[must_use]
    pub fn activity_count(&self) -> u32 {
        self.days
            .iter()
            .map(|day| day.activities.len() as u32)
            .sum()
    }
}

/// The static, ordered curriculum tree. Immutable for the lifetime of the
/// process; the process-wide instance is shared as `Arc<Curriculum>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curriculum {
    phases: Vec<Phase>,
}

impl Curriculum {
    /// Build a curriculum from ordered phases.
    ///
    /// # Errors
    ///
    /// Returns `CurriculumError` when phase ids collide, when day ids collide
    /// within a phase, or when a phase title is empty.
    pub fn new(phases: Vec<Phase>) -> Result<Self, CurriculumError> {
        let mut seen_phases = HashSet::new();
        for phase in &phases {
            if phase.title.trim().is_empty() {
                return Err(CurriculumError::EmptyPhaseTitle(phase.id));
            }
            if !seen_phases.insert(phase.id) {
                return Err(CurriculumError::DuplicatePhase(phase.id));
            }
            let mut seen_days = HashSet::new();
            for day in &phase.days {
                if !seen_days.insert(day.id) {
                    return Err(CurriculumError::DuplicateDay {
                        phase: phase.id,
                        day: day.id,
                    });
                }
            }
        }
        Ok(Self { phases })
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    #[must_use]
    pub fn phase(&self, id: PhaseId) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.id == id)
    }

    /// Total number of activities across the whole curriculum.
    #[must_use]
    pub fn total_activities(&self) -> u32 {
        self.phases.iter().map(Phase::activity_count).sum()
    }

    /// Total number of days across the whole curriculum.
    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.phases.iter().map(|phase| phase.days.len() as u32).sum()
    }

    /// Whether the key resolves to an activity that actually exists.
    #[must_use]
    pub fn contains(&self, key: ActivityKey) -> bool {
        self.phase(key.phase)
            .and_then(|phase| phase.days.iter().find(|day| day.id == key.day))
            .is_some_and(|day| (key.index as usize) < day.activities.len())
    }

    /// Iterate the keys of every activity in curriculum order.
    pub fn keys(&self) -> impl Iterator<Item = ActivityKey> + '_ {
        self.phases.iter().flat_map(|phase| {
            phase.days.iter().flat_map(move |day| {
                (0..day.activities.len() as u32)
                    .map(move |index| ActivityKey::new(phase.id, day.id, index))
            })
        })
    }
}

// The document form is just the phase list; structural validation runs on
// the way in so a malformed document cannot produce a curriculum.
impl<'de> Deserialize<'de> for Curriculum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let phases = Vec::<Phase>::deserialize(deserializer)?;
        Self::new(phases).map_err(serde::de::Error::custom)
    }
}
