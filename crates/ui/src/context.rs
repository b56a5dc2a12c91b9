use std::sync::Arc;

use curriculum_core::Curriculum;
use services::{CompletionService, ProgressService};

/// What the composition root (e.g. `crates/app`) must provide to the UI.
pub trait UiApp: Send + Sync {
    fn curriculum(&self) -> Arc<Curriculum>;
    fn completions(&self) -> Arc<CompletionService>;
    fn progress(&self) -> Arc<ProgressService>;
}

#[derive(Clone)]
pub struct AppContext {
    curriculum: Arc<Curriculum>,
    completions: Arc<CompletionService>,
    progress: Arc<ProgressService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            curriculum: app.curriculum(),
            completions: app.completions(),
            progress: app.progress(),
        }
    }

    #[must_use]
    pub fn curriculum(&self) -> Arc<Curriculum> {
        Arc::clone(&self.curriculum)
    }

    #[must_use]
    pub fn completions(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completions)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
