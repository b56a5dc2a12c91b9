use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use curriculum_core::time::fixed_clock;
use curriculum_core::{Activity, Curriculum, Day, DayId, Phase, PhaseId};
use services::{CompletionService, ProgressService};
use storage::repository::{CompletionRepository, InMemoryRepository};

use crate::app::Shell;
use crate::context::{UiApp, build_app_context};
use crate::views::{AiToolsView, CurriculumView, DashboardView};

struct TestApp {
    curriculum: Arc<Curriculum>,
    completions: Arc<CompletionService>,
    progress: Arc<ProgressService>,
}

impl UiApp for TestApp {
    fn curriculum(&self) -> Arc<Curriculum> {
        Arc::clone(&self.curriculum)
    }

    fn completions(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completions)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Shell,
    Dashboard,
    Curriculum,
    AiTools,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::Shell => rsx! { Shell {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Curriculum => rsx! { CurriculumView {} },
        ViewKind::AiTools => rsx! { AiToolsView {} },
    }
}

/// Two phases (one with a multi-digit id), four activities total.
pub fn sample_curriculum() -> Arc<Curriculum> {
    let day = |id: u32, titles: &[&str]| {
        Day::new(
            DayId::new(id),
            format!("Day {id}"),
            titles.iter().map(|t| Activity::new(*t)).collect(),
        )
    };
    Arc::new(
        Curriculum::new(vec![
            Phase::new(
                PhaseId::new(1),
                "Foundations",
                vec![day(1, &["Set up tools", "Hello world"]), day(2, &["Read notes"])],
            ),
            Phase::new(PhaseId::new(10), "Capstone", vec![day(3, &["Ship it"])]),
        ])
        .unwrap(),
    )
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub curriculum: Arc<Curriculum>,
    pub completions: Arc<CompletionService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_repo(view, Arc::new(InMemoryRepository::new()))
}

pub fn setup_view_harness_with_repo(
    view: ViewKind,
    repo: Arc<dyn CompletionRepository>,
) -> ViewHarness {
    let curriculum = sample_curriculum();
    let completions = Arc::new(CompletionService::new(fixed_clock(), Arc::clone(&repo)));
    let progress = Arc::new(ProgressService::new(Arc::clone(&curriculum), repo));

    let app = Arc::new(TestApp {
        curriculum: Arc::clone(&curriculum),
        completions: Arc::clone(&completions),
        progress,
    });

    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        curriculum,
        completions,
    }
}
