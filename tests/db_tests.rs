use team_picker::db::*;
use team_picker::model::*;

fn sample_snapshot() -> SnapshotData {
    let an = Member::star("An".into());
    let binh = Member::create("Binh".into());
    let chi = Member::create("Chi".into());
    let dung = Member::create("Dung".into());
    SnapshotData {
        members: vec![an.clone(), binh.clone(), chi.clone(), dung.clone()],
        teams: vec![Team::new(vec![an, binh]), Team::new(vec![chi, dung])],
        rounds: vec![vec![Match::new("Team 1", "Team 2")]],
    }
}

// ==========================================================================
// SQLITE STORAGE TESTS
// ==========================================================================

#[test]
fn sqlite_storage_round_trips_snapshot() {
    let storage = SqliteStorage::new(schema::test_connection()).unwrap();
    let store = SnapshotStore::new(storage);
    let data = sample_snapshot();

    store.save(&data).unwrap();
    assert!(store.exists());
    assert_eq!(store.load(), Snapshot::Present(data));
}

#[test]
fn sqlite_storage_records_save_time() {
    let storage = SqliteStorage::new(schema::test_connection()).unwrap();
    assert!(storage.updated_at(DEFAULT_SLOT).unwrap().is_none());

    let store = SnapshotStore::new(&storage);
    store.save(&sample_snapshot()).unwrap();
    assert!(storage.updated_at(DEFAULT_SLOT).unwrap().is_some());
}

#[test]
fn snapshot_survives_reopening_the_file() {
    let path = std::env::temp_dir().join(format!("team-picker-{}.db", Id::<Member>::generate()));
    let data = sample_snapshot();

    {
        let store = SnapshotStore::new(SqliteStorage::open(&path).unwrap());
        store.save(&data).unwrap();
    }

    let store = SnapshotStore::new(SqliteStorage::open(&path).unwrap());
    assert_eq!(store.load().into_data(), Some(data));
    std::fs::remove_file(&path).ok();
}

#[test]
fn custom_slot_keys_are_independent() {
    let storage = SqliteStorage::new(schema::test_connection()).unwrap();
    let league = SnapshotStore::with_key(&storage, "league");
    let cup = SnapshotStore::with_key(&storage, "cup");

    league.save(&sample_snapshot()).unwrap();
    assert!(league.exists());
    assert!(!cup.exists());
    assert_eq!(cup.load(), Snapshot::Empty);
}

#[test]
fn saving_overwrites_previous_snapshot() {
    let store = SnapshotStore::new(SqliteStorage::new(schema::test_connection()).unwrap());
    store.save(&sample_snapshot()).unwrap();

    let smaller = SnapshotData {
        members: vec![Member::create("Em".into())],
        ..SnapshotData::default()
    };
    store.save(&smaller).unwrap();
    assert_eq!(store.load(), Snapshot::Present(smaller));
}

#[test]
fn wrong_shape_is_treated_as_no_snapshot() {
    let storage = SqliteStorage::new(schema::test_connection()).unwrap();
    storage.set(DEFAULT_SLOT, r#"{"savedMembers": 3}"#).unwrap();
    let store = SnapshotStore::new(&storage);
    assert!(store.exists());
    assert_eq!(store.load(), Snapshot::Empty);
}

// ==========================================================================
// MEMORY STORAGE TESTS
// ==========================================================================

#[test]
fn memory_storage_get_set_clear() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("k").unwrap(), None);
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    storage.clear("k").unwrap();
    assert_eq!(storage.get("k").unwrap(), None);
}
