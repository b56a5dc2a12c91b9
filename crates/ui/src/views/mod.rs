mod ai_tools;
mod curriculum;
mod dashboard;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use ai_tools::AiToolsView;
pub use curriculum::CurriculumView;
pub use dashboard::DashboardView;
pub use state::{ViewError, ViewState, view_state_from_resource};
