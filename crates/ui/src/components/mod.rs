mod charts;
mod sidebar;

pub use charts::{CompletionDonut, PhaseBarChart};
pub use sidebar::{MenuIcon, Sidebar};
