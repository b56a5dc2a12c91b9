mod completion;
mod curriculum;
mod ids;

pub use completion::{CompletionSet, ParsedCompletions};
pub use curriculum::{Activity, Curriculum, CurriculumError, Day, Phase};
pub use ids::{ActivityKey, DayId, ParseKeyError, PhaseId};
