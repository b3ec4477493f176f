//! Session persistence through the JSON file store.

use chrono::{TimeZone, Utc};
use poweroffice_core::session::{KEY_ACCESS_TOKEN, KEY_EXPIRES_AT, KEY_REFRESH_TOKEN};
use poweroffice_core::{ManualClock, Session, SessionStore};
use poweroffice_file::FileStore;
use serde_json::json;

fn grant() -> serde_json::Value {
    json!({
        "expires_in": 600,
        "access_token": "tok-A",
        "refresh_token": "tok-B",
    })
}

#[test]
fn session_survives_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poweroffice.json");
    let clock = ManualClock::at(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());

    Session::with_clock(FileStore::new(&path), clock.clone())
        .set_from_response(&grant())
        .unwrap();

    let reopened = Session::with_clock(FileStore::new(&path), clock);
    assert!(reopened.is_valid().unwrap());
    assert_eq!(reopened.access_token().unwrap().unwrap().as_str(), "tok-A");
    assert_eq!(reopened.refresh_token().unwrap().unwrap().as_str(), "tok-B");
    assert_eq!(
        reopened.expire_date().unwrap(),
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 8, 10, 0).unwrap())
    );
}

#[test]
fn file_layout_is_a_flat_object_of_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poweroffice.json");
    let clock = ManualClock::at(Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());

    Session::with_clock(FileStore::new(&path), clock)
        .set_from_response(&grant())
        .unwrap();

    let content: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        content,
        json!({
            KEY_ACCESS_TOKEN: "tok-A",
            KEY_REFRESH_TOKEN: "tok-B",
            KEY_EXPIRES_AT: "2024-01-01 08:10:00",
        })
    );
}

#[test]
fn disconnect_keeps_foreign_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.json");
    let store = FileStore::new(&path);
    store.put("OTHER_APP_SETTING", "on").unwrap();

    let session = Session::new(store.clone());
    session.set_from_response(&grant()).unwrap();
    session.disconnect().unwrap();

    assert!(!session.is_valid().unwrap());
    assert!(!session.can_refresh().unwrap());
    assert_eq!(store.get("OTHER_APP_SETTING").unwrap().as_deref(), Some("on"));
    assert_eq!(store.get(KEY_ACCESS_TOKEN).unwrap(), None);
}

#[test]
fn disconnect_on_missing_file_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never-written.json");
    let session = Session::new(FileStore::new(&path));

    session.disconnect().unwrap();

    assert!(!path.exists());
}

#[test]
fn concurrent_writers_do_not_corrupt_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poweroffice.json");

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = FileStore::new(&path);
            std::thread::spawn(move || {
                store.put(&format!("KEY_{i}"), &format!("value-{i}")).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let store = FileStore::new(&path);
    for i in 0..8 {
        assert_eq!(
            store.get(&format!("KEY_{i}")).unwrap(),
            Some(format!("value-{i}"))
        );
    }
}
