use chrono::Duration;
use curriculum_core::time::fixed_now;
use curriculum_core::{ActivityKey, DayId, PhaseId};
use storage::repository::{CompletionRecord, CompletionRepository, Storage, load_completion_set};
use storage::sqlite::SqliteRepository;

fn key(phase: u32, day: u32, index: u32) -> ActivityKey {
    ActivityKey::new(PhaseId::new(phase), DayId::new(day), index)
}

#[tokio::test]
async fn sqlite_roundtrip_persists_completions() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let records = [
        CompletionRecord {
            key: key(1, 1, 0),
            completed_at: fixed_now(),
        },
        CompletionRecord {
            key: key(10, 40, 2),
            completed_at: fixed_now() + Duration::days(1),
        },
    ];
    for record in records {
        repo.mark_completed(record).await.expect("mark");
    }

    let listed = repo.list_completions().await.expect("list");
    assert_eq!(listed, records);
}

#[tokio::test]
async fn sqlite_repeat_mark_keeps_first_timestamp() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_repeat?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let first = CompletionRecord {
        key: key(2, 30, 1),
        completed_at: fixed_now(),
    };
    repo.mark_completed(first).await.expect("mark");
    repo.mark_completed(CompletionRecord {
        key: first.key,
        completed_at: fixed_now() + Duration::hours(3),
    })
    .await
    .expect("remark");

    let listed = repo.list_completions().await.expect("list");
    assert_eq!(listed, vec![first]);
}

#[tokio::test]
async fn sqlite_unmark_removes_only_that_key() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_unmark?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    for k in [key(1, 1, 0), key(1, 1, 1)] {
        repo.mark_completed(CompletionRecord {
            key: k,
            completed_at: fixed_now(),
        })
        .await
        .expect("mark");
    }
    repo.unmark_completed(key(1, 1, 0)).await.expect("unmark");
    // Unmarking an absent key is a no-op.
    repo.unmark_completed(key(9, 9, 9)).await.expect("unmark absent");

    let set = load_completion_set(&repo).await.expect("load");
    assert_eq!(set.len(), 1);
    assert!(set.contains(key(1, 1, 1)));
}

#[tokio::test]
async fn storage_sqlite_constructor_migrates() {
    let storage = Storage::sqlite("sqlite:file:memdb_storage?mode=memory&cache=shared")
        .await
        .expect("open storage");

    storage
        .completions
        .mark_completed(CompletionRecord {
            key: key(3, 55, 0),
            completed_at: fixed_now(),
        })
        .await
        .expect("mark");

    let listed = storage.completions.list_completions().await.expect("list");
    assert_eq!(listed.len(), 1);
}
