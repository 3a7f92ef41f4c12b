//! Integration tests for factdesk-store
//!
//! These tests verify the save/load cycle for every store.

use chrono::NaiveDate;
use factdesk_domain::{
    Claim, ClaimId, ClaimStatus, ClaimType, Confidence, Corroboration, Priority, Sensitivity,
    Source, SourceAssessment, SourceId, SourceStake, SourceType, Story, StoryStore,
    VerificationLog, Workspace,
};
use factdesk_store::{JsonFileStore, MemoryStore, SqliteStore, StoreError};
use tempfile::TempDir;

fn sample_workspace() -> Workspace {
    let story = Story::new(
        "Rising Homelessness in San Diego",
        "Point-in-time count shows a sharp rise.",
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        Sensitivity::Investigative,
    );
    let story_id = story.id;
    let mut workspace = Workspace::new();
    workspace.set_story(story);

    let mut verified = Claim::new(
        ClaimId::new(),
        story_id,
        "Homelessness increased by 22% last year.",
        ClaimType::Statistical,
        Priority::Critical,
        "City Official Interview",
    )
    .with_notes("Auto-extracted from text");
    let log = VerificationLog::new(
        verified.id,
        "Public records",
        vec!["HUD Point-in-Time count".to_string(), "County dashboard".to_string()],
        "Count matches within rounding",
        ClaimStatus::Verified,
        Confidence::High,
    )
    .unwrap();
    verified.append_log(log).unwrap();
    verified.set_status(ClaimStatus::Verified);
    workspace.add_claim(verified).unwrap();

    workspace
        .add_claim(Claim::new(
            ClaimId::new(),
            story_id,
            r#""We are concerned," said Officials."#,
            ClaimType::Attribution,
            Priority::Medium,
            "Text Analysis",
        ))
        .unwrap();

    workspace
        .add_source(
            Source::new(
                SourceId::new(),
                story_id,
                "Officials",
                SourceType::Primary,
                SourceStake::None,
                Corroboration::No,
            )
            .with_notes("Auto-extracted from context: \"Officials said...\""),
        )
        .unwrap();

    let mut pinned = Source::new(
        SourceId::new(),
        story_id,
        "Shelter worker",
        SourceType::Anonymous,
        SourceStake::Low,
        Corroboration::Partially,
    )
    .with_confidential(true);
    pinned.override_assessment(SourceAssessment::Credible);
    workspace.add_source(pinned).unwrap();

    workspace
}

#[test]
fn test_memory_store_round_trip() {
    let mut store = MemoryStore::new();
    assert_eq!(store.load().unwrap(), Workspace::new());

    let workspace = sample_workspace();
    store.save(&workspace).unwrap();
    assert_eq!(store.load().unwrap(), workspace);
    assert_eq!(store.save_count(), 1);
}

#[test]
fn test_json_store_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("workspace.json"));

    let workspace = store.load().unwrap();
    assert!(workspace.story().is_none());
    assert!(workspace.claims().is_empty());
}

#[test]
fn test_json_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("workspace.json");
    let mut store = JsonFileStore::new(&path);

    let workspace = sample_workspace();
    store.save(&workspace).unwrap();
    assert!(path.exists());

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.load().unwrap(), workspace);
}

#[test]
fn test_json_store_overwrite_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workspace.json");
    let mut store = JsonFileStore::new(&path);

    store.save(&sample_workspace()).unwrap();
    store.save(&Workspace::new()).unwrap();

    assert_eq!(store.load().unwrap(), Workspace::new());
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name != "workspace.json")
        .collect();
    assert!(leftovers.is_empty(), "unexpected files: {leftovers:?}");
}

#[test]
fn test_json_store_uses_record_field_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workspace.json");
    let mut store = JsonFileStore::new(&path);
    store.save(&sample_workspace()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"type\": \"Statistical\""));
    assert!(contents.contains("\"verification_logs\""));
}

#[test]
fn test_json_store_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workspace.json");
    std::fs::write(&path, "not json").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Json(_))));
}

#[test]
fn test_sqlite_store_empty() {
    let store = SqliteStore::in_memory().unwrap();
    assert_eq!(store.load().unwrap(), Workspace::new());
}

#[test]
fn test_sqlite_store_round_trip() {
    let mut store = SqliteStore::in_memory().unwrap();
    let workspace = sample_workspace();
    store.save(&workspace).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, workspace);

    let claim = &loaded.claims()[0];
    assert_eq!(claim.status(), ClaimStatus::Verified);
    assert_eq!(claim.verification_logs().len(), 1);
    assert_eq!(claim.verification_logs()[0].sources_found.len(), 2);

    let pinned = &loaded.sources()[1];
    assert!(pinned.is_confidential);
    assert!(pinned.is_assessment_overridden());
    assert_eq!(pinned.assessment(), SourceAssessment::Credible);
}

#[test]
fn test_sqlite_store_save_replaces_previous() {
    let mut store = SqliteStore::in_memory().unwrap();
    let mut workspace = sample_workspace();
    store.save(&workspace).unwrap();

    let removed = workspace.claims()[1].id;
    workspace.remove_claim(removed).unwrap();
    store.save(&workspace).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.claims().len(), 1);
    assert!(loaded.claim(removed).is_none());
}

#[test]
fn test_sqlite_store_persists_across_connections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("factdesk.db");
    let workspace = sample_workspace();

    {
        let mut store = SqliteStore::new(&path).unwrap();
        store.save(&workspace).unwrap();
    }

    let store = SqliteStore::new(&path).unwrap();
    assert_eq!(store.load().unwrap(), workspace);
}

#[test]
fn test_sqlite_store_reset_workspace() {
    let mut store = SqliteStore::in_memory().unwrap();
    let mut workspace = sample_workspace();
    store.save(&workspace).unwrap();

    workspace.reset();
    store.save(&workspace).unwrap();
    assert_eq!(store.load().unwrap(), Workspace::new());
}

#[test]
fn test_file_store_picks_backend_by_extension() {
    use factdesk_store::FileStore;

    let dir = TempDir::new().unwrap();
    assert!(matches!(
        FileStore::open(dir.path().join("ws.json")).unwrap(),
        FileStore::Json(_)
    ));
    assert!(matches!(
        FileStore::open(dir.path().join("data").join("ws.db")).unwrap(),
        FileStore::Sqlite(_)
    ));

    let mut store = FileStore::open(dir.path().join("ws.sqlite")).unwrap();
    let workspace = sample_workspace();
    store.save(&workspace).unwrap();
    assert_eq!(store.load().unwrap(), workspace);
}
