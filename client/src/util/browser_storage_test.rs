use super::*;
use session::SessionStore;

#[test]
fn outside_browser_every_call_is_unavailable() {
    let storage = BrowserSessionStorage;
    assert!(matches!(storage.load("token"), Err(StorageError::Unavailable(_))));
    assert!(matches!(storage.save("token", "abc"), Err(StorageError::Unavailable(_))));
    assert!(matches!(storage.remove("token"), Err(StorageError::Unavailable(_))));
}

#[test]
fn store_over_unavailable_storage_runs_memory_only() {
    let store = SessionStore::new(BrowserSessionStorage);
    store.initialize();
    assert_eq!(store.read(), "");
    store.write("abc");
    assert_eq!(store.read(), "abc");
    assert!(!store.is_persistent());
}
