#![forbid(unsafe_code)]

pub mod model;
pub mod progress;
pub mod time;

pub use model::{
    Activity, ActivityKey, CompletionSet, Curriculum, CurriculumError, Day, DayId, ParseKeyError,
    Phase, PhaseId,
};
pub use progress::{PhaseProgress, ProgressReport};
pub use time::Clock;
