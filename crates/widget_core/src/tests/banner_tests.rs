use super::*;

use storage::{MemoryStore, StorageError, UnavailableStore};

/// Reads succeed but every write fails.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }
}

#[test]
fn shows_when_flag_absent_and_persists_dismissal() {
    let store = Arc::new(MemoryStore::new());
    let mut banner = BannerWidget::mount(store.clone());
    assert_eq!(banner.state(), BannerState::Shown);
    assert_eq!(banner.render(), Some(BannerView::default()));

    assert!(banner.dismiss());
    assert_eq!(banner.state(), BannerState::Dismissed);
    assert_eq!(banner.render(), None);
    assert_eq!(
        store.get(BANNER_STORAGE_KEY).expect("get").as_deref(),
        Some(DISMISSED_SENTINEL)
    );

    let remounted = BannerWidget::mount(store);
    assert_eq!(remounted.state(), BannerState::Dismissed);
    assert!(remounted.render().is_none());
}

#[test]
fn dismissal_is_terminal() {
    let mut banner = BannerWidget::mount(Arc::new(MemoryStore::new()));
    assert!(banner.dismiss());
    assert!(!banner.dismiss());
    assert!(banner.is_dismissed());
}

#[test]
fn values_other_than_sentinel_keep_banner_shown() {
    for value in ["0", "", "true", "yes"] {
        let banner = BannerWidget::mount(Arc::new(MemoryStore::with_entry(
            BANNER_STORAGE_KEY,
            value,
        )));
        assert_eq!(banner.state(), BannerState::Shown, "value {value:?}");
    }
}

#[test]
fn unavailable_storage_degrades_to_shown() {
    let mut banner = BannerWidget::mount(Arc::new(UnavailableStore));
    assert_eq!(banner.state(), BannerState::Shown);

    assert!(banner.dismiss(), "write failure is absorbed");
    assert_eq!(banner.state(), BannerState::Dismissed);
}

#[test]
fn failed_write_still_hides_banner_for_session() {
    let mut banner = BannerWidget::mount(Arc::new(ReadOnlyStore));
    assert!(banner.dismiss());
    assert!(banner.render().is_none());
}

#[test]
fn view_carries_welcome_copy() {
    let view = BannerView::default();
    assert_eq!(view.headline, "Welcome!");
    assert_eq!(view.dismiss_label, "Dismiss");
}
