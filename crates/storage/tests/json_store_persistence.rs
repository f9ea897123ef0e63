use std::fs;

use storage::{JsonFileStore, KeyValueStore, LOCAL_STORAGE_FILE};

#[test]
fn values_written_by_one_store_are_read_by_the_next() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let store = JsonFileStore::open_in(dir.path()).expect("open first");
        store.set("bannerDismissed", "1").expect("set");
        store.set("other", "value").expect("set other");
    }

    let reopened = JsonFileStore::open_in(dir.path()).expect("reopen");
    assert_eq!(
        reopened.get("bannerDismissed").expect("get").as_deref(),
        Some("1")
    );
    assert_eq!(reopened.get("other").expect("get").as_deref(), Some("value"));

    let raw = fs::read_to_string(dir.path().join(LOCAL_STORAGE_FILE)).expect("read file");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("file is json");
    assert_eq!(parsed["bannerDismissed"], "1");
}

#[test]
fn removal_is_persisted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::open_in(dir.path()).expect("open");
    store.set("bannerDismissed", "1").expect("set");
    store.remove("bannerDismissed").expect("remove");

    let reopened = JsonFileStore::open_in(dir.path()).expect("reopen");
    assert_eq!(reopened.get("bannerDismissed").expect("get"), None);
}
