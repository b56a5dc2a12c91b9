use std::sync::Arc;

use curriculum_core::ActivityKey;
use storage::repository::{
    CompletionRecord, CompletionRepository, InMemoryRepository, StorageError,
};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_repo};

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_empty_set_shows_zero_progress() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("0%"), "missing 0% in {html}");
    assert!(html.contains("0 / 4"), "missing counts in {html}");
    assert!(html.contains("~100"), "missing days estimate in {html}");
    assert!(html.contains("Progress by phase"), "missing bar chart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_full_set_shows_one_hundred_percent() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    let curriculum = Arc::clone(&harness.curriculum);
    for key in curriculum.keys() {
        harness
            .completions
            .set_completed(key, true)
            .await
            .expect("mark");
    }

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("100%"), "missing 100% in {html}");
    assert!(html.contains("4 / 4"), "missing counts in {html}");
    // Estimate loses the tilde once everything is complete.
    assert!(!html.contains("~"), "unexpected tilde in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn curriculum_smoke_renders_phases_and_toggle_state() {
    let repo = Arc::new(InMemoryRepository::new());
    let mut harness = setup_view_harness_with_repo(ViewKind::Curriculum, repo);
    let first_key: ActivityKey = "p1-d1-a0".parse().unwrap();
    harness
        .completions
        .set_completed(first_key, true)
        .await
        .expect("mark");

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Phase 1"), "missing phase title in {html}");
    assert!(html.contains("Capstone"), "missing phase 10 title in {html}");
    assert!(html.contains("Set up tools"), "missing activity in {html}");
    assert!(
        html.contains("aria-checked=\"true\""),
        "missing checked toggle in {html}"
    );
    assert!(
        html.contains("aria-checked=\"false\""),
        "missing unchecked toggle in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_renders_sidebar_and_active_view() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("AI Factory Master"), "missing title in {html}");
    for label in ["Dashboard", "Curriculum", "AI Tools"] {
        assert!(html.contains(label), "missing nav label {label} in {html}");
    }
    // Dashboard is the default tab.
    assert!(html.contains("Welcome back"), "missing dashboard in {html}");
    // The sidebar mini bar reflects the (empty) completed set.
    assert!(html.contains("width: 0%"), "missing progress bar in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn ai_tools_smoke_renders_entries() {
    let mut harness = setup_view_harness(ViewKind::AiTools);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("AI Tools"), "missing title in {html}");
    assert!(html.contains("Quiz generator"), "missing tool entry in {html}");
}

struct FailingCompletionRepo;

#[async_trait::async_trait]
impl CompletionRepository for FailingCompletionRepo {
    async fn mark_completed(&self, _record: CompletionRecord) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn unmark_completed(&self, _key: ActivityKey) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_completions(&self) -> Result<Vec<CompletionRecord>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_surfaces_storage_failure() {
    let mut harness =
        setup_view_harness_with_repo(ViewKind::Dashboard, Arc::new(FailingCompletionRepo));
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Could not load your progress"),
        "missing error text in {html}"
    );
}
