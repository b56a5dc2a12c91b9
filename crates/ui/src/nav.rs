/// The navigation targets offered by the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppTab {
    #[default]
    Dashboard,
    Curriculum,
    AiTools,
}

impl AppTab {
    pub const ALL: [AppTab; 3] = [AppTab::Dashboard, AppTab::Curriculum, AppTab::AiTools];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AppTab::Dashboard => "Dashboard",
            AppTab::Curriculum => "Curriculum",
            AppTab::AiTools => "AI Tools",
        }
    }
}

/// Navigation state owned by the app shell. The sidebar is a controlled
/// component over this state; it holds none of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: AppTab,
    pub mobile_open: bool,
}

impl NavState {
    /// Activate a tab. Selecting always closes the mobile overlay.
    pub fn select(&mut self, tab: AppTab) {
        self.active = tab;
        self.mobile_open = false;
    }

    pub fn open_overlay(&mut self) {
        self.mobile_open = true;
    }

    pub fn close_overlay(&mut self) {
        self.mobile_open = false;
    }
}
