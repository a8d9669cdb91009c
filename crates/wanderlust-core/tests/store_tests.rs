mod common;

use common::{create_test_db_path, event, holiday, long_weekend, open_store};
use wanderlust_core::{
    AddResult, KeyValueStore, LoadIssue, PlanFilter, PlanKind, PlanStoreBuilder,
    SelectionContext, SqliteStore,
};

#[test]
fn test_saved_holiday_survives_reload() {
    let (_temp_dir, db_path) = create_test_db_path();
    let context = SelectionContext::default();

    let saved = {
        let mut store = open_store(&db_path);
        match store
            .add(holiday("2025-01-01", "New Year's Day"), &context)
            .into_result()
            .expect("Failed to persist plan")
        {
            AddResult::Added(plan) => plan,
            AddResult::Duplicate(signal) => panic!("unexpected duplicate: {signal}"),
        }
    };

    let reloaded = open_store(&db_path);
    assert_eq!(reloaded.plans(), &[saved]);
    assert_eq!(reloaded.counts().holiday, 1);
    assert!(reloaded.contains(PlanKind::Holiday, "2025-01-01"));
}

#[test]
fn test_duplicate_is_detected_across_reload() {
    let (_temp_dir, db_path) = create_test_db_path();
    let context = SelectionContext::default();

    let mut store = open_store(&db_path);
    assert!(!store.add(event("Music Night in Cairo"), &context).value.is_duplicate());
    drop(store);

    let mut reloaded = open_store(&db_path);
    assert!(reloaded.add(event("Music Night in Cairo"), &context).value.is_duplicate());
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_clear_all_then_reload_is_empty() {
    let (_temp_dir, db_path) = create_test_db_path();
    let context = SelectionContext::default();

    let mut store = open_store(&db_path);
    let _ = store.add(holiday("2025-01-01", "New Year's Day"), &context);
    let _ = store.add(event("Music Night in Cairo"), &context);
    let _ = store.add(long_weekend("New Year Break"), &context);
    assert_eq!(store.counts().total, 3);

    store.clear_all().into_result().expect("Failed to clear plans");
    drop(store);

    let reloaded = open_store(&db_path);
    assert!(reloaded.is_empty());
    assert!(reloaded.load_issue().is_none());
}

#[test]
fn test_remove_then_reload_keeps_the_rest_in_order() {
    let (_temp_dir, db_path) = create_test_db_path();
    let context = SelectionContext::default();

    let mut store = open_store(&db_path);
    let _ = store.add(holiday("2025-01-01", "New Year's Day"), &context);
    let concert = store
        .add(event("Music Night in Cairo"), &context)
        .value
        .added()
        .cloned()
        .expect("event added");
    let _ = store.add(long_weekend("New Year Break"), &context);
    assert!(store.remove(concert.id).into_result().expect("persisted"));
    drop(store);

    let reloaded = open_store(&db_path);
    let titles: Vec<&str> = reloaded.list(PlanFilter::All).map(|plan| plan.title()).collect();
    assert_eq!(titles, vec!["New Year's Day", "New Year Break"]);
    assert_eq!(reloaded.list(PlanFilter::Kind(PlanKind::Event)).count(), 0);
}

#[test]
fn test_invalid_json_in_database_loads_empty() {
    let (_temp_dir, db_path) = create_test_db_path();
    {
        let mut raw = SqliteStore::new(&db_path).expect("Failed to open database");
        raw.set("wanderlust_plans", "[{\"id\": 1, \"type\": ")
            .expect("Failed to write slot");
    }

    let mut store = open_store(&db_path);
    assert!(store.is_empty());
    assert!(matches!(store.load_issue(), Some(LoadIssue::MalformedData { .. })));

    // The next save replaces the unreadable data.
    let _ = store.add(holiday("2025-01-01", "New Year's Day"), &SelectionContext::default());
    assert_eq!(open_store(&db_path).len(), 1);
}

#[test]
fn test_reads_collection_written_by_the_browser_dashboard() {
    let (_temp_dir, db_path) = create_test_db_path();
    {
        let mut raw = SqliteStore::new(&db_path).expect("Failed to open database");
        raw.set(
            "wanderlust_plans",
            r#"[
              {"id":1735689600000,"type":"holiday","data":{"name":"New Year's Day","localName":"New Year's Day","date":"2025-01-01","country":"Egypt"},"savedAt":"2025-01-01T00:00:00.000Z","country":"EG","city":"Cairo"},
              {"id":1735689600500,"type":"event","data":{"title":"Music Night in Cairo","date":"Sat, Mar 1","location":"Cairo Opera House","category":"Music"},"savedAt":"2025-01-01T00:00:00.500Z","country":"EG","city":"Cairo"},
              {"id":1735689601000,"type":"longweekend","data":{"title":"New Year Break","dates":"Jan 1 - Jan 4","duration":"4 days"},"savedAt":"2025-01-01T00:00:01.000Z","country":"EG","city":"Cairo"}
            ]"#,
        )
        .expect("Failed to write slot");
    }

    let store = open_store(&db_path);
    let counts = store.counts();
    assert_eq!((counts.holiday, counts.event, counts.long_weekend), (1, 1, 1));
    assert!(store.contains(PlanKind::LongWeekend, "New Year Break"));
    assert!(store.load_issue().is_none());
}

#[test]
fn test_separate_slots_are_independent() {
    let (_temp_dir, db_path) = create_test_db_path();
    let context = SelectionContext::default();

    let mut trips = PlanStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .with_slot("trips")
        .build()
        .expect("Failed to build store");
    let _ = trips.add(holiday("2025-01-01", "New Year's Day"), &context);

    let other = PlanStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .with_slot("other")
        .build()
        .expect("Failed to build store");
    assert!(other.is_empty());
    assert_eq!(other.slot(), "other");
}
