use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Storage whose reads and/or writes always fail.
struct FailingStorage {
    fail_load: bool,
    loads: AtomicUsize,
}

impl FailingStorage {
    fn writes_only() -> Self {
        Self { fail_load: false, loads: AtomicUsize::new(0) }
    }

    fn everything() -> Self {
        Self { fail_load: true, loads: AtomicUsize::new(0) }
    }
}

impl TokenStorage for FailingStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_load {
            Err(StorageError::Unavailable("disabled".to_owned()))
        } else {
            Ok(None)
        }
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("quota exceeded".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("quota exceeded".to_owned()))
    }
}

/// Storage whose first `save` fails and later ones succeed.
struct RecoveringStorage {
    inner: MemoryStorage,
    failures_left: AtomicUsize,
}

impl TokenStorage for RecoveringStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failures_left.load(Ordering::SeqCst) > 0 {
            self.failures_left.fetch_sub(1, Ordering::SeqCst);
            return Err(StorageError::Rejected("quota exceeded".to_owned()));
        }
        self.inner.save(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

/// Memory storage that counts loads.
struct CountingStorage {
    inner: MemoryStorage,
    loads: Arc<AtomicUsize>,
}

impl TokenStorage for CountingStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.inner.load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.save(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

fn recorder(store: &SessionStore) -> (Arc<Mutex<Vec<String>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = store.subscribe(move |token| sink.lock().unwrap().push(token.to_owned()));
    (seen, sub)
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_persisted_token_is_signed_out() {
    let store = SessionStore::new(MemoryStorage::new());
    store.initialize();
    assert_eq!(store.read(), "");
    assert!(!store.is_authenticated());
}

#[test]
fn initialize_restores_persisted_token() {
    let storage = MemoryStorage::new();
    storage.save(TOKEN_KEY, "tok-1").unwrap();
    let store = SessionStore::new(storage);
    store.initialize();
    assert_eq!(store.read(), "tok-1");
}

#[test]
fn initialize_twice_matches_once_and_reads_storage_once() {
    let memory = MemoryStorage::new();
    memory.save(TOKEN_KEY, "tok-1").unwrap();
    let loads = Arc::new(AtomicUsize::new(0));
    let store = SessionStore::new(CountingStorage { inner: memory.clone(), loads: Arc::clone(&loads) });

    store.initialize();
    let first = store.read();
    store.initialize();
    assert_eq!(store.read(), first);
    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert_eq!(memory.len(), 1);
}

#[test]
fn initialize_does_not_notify_subscribers() {
    let storage = MemoryStorage::new();
    storage.save(TOKEN_KEY, "tok-1").unwrap();
    let store = SessionStore::new(storage);
    let (seen, _sub) = recorder(&store);
    store.initialize();
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn read_before_initialize_sees_persisted_token() {
    let storage = MemoryStorage::new();
    storage.save(TOKEN_KEY, "tok-1").unwrap();
    let store = SessionStore::new(storage);
    assert_eq!(store.read(), "tok-1");
}

#[test]
fn persisted_empty_string_is_treated_as_absent() {
    let storage = MemoryStorage::new();
    storage.save(TOKEN_KEY, "").unwrap();
    let store = SessionStore::new(storage);
    assert_eq!(store.read(), "");
}

#[test]
fn custom_key_is_used_for_persistence() {
    let storage = MemoryStorage::new();
    let store = SessionStore::with_key(storage.clone(), "auth");
    store.write("tok");
    assert_eq!(storage.get("auth").as_deref(), Some("tok"));
    assert!(storage.get(TOKEN_KEY).is_none());
}

// =============================================================
// write / read
// =============================================================

#[test]
fn write_then_read_returns_value() {
    let store = SessionStore::new(MemoryStorage::new());
    for token in ["a", "tok-123", "with spaces", "ünïcødé", "eyJhbGciOiJIUzI1NiJ9.e30.sig"] {
        store.write(token);
        assert_eq!(store.read(), token);
    }
}

#[test]
fn write_persists_non_empty_token() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    store.write("tok-1");
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-1"));
    assert!(store.is_persistent());
}

#[test]
fn empty_write_removes_persisted_entry() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    store.write("tok-1");
    store.write("");
    assert_eq!(store.read(), "");
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.is_empty());
}

#[test]
fn empty_write_survives_reload() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    store.write("tok-1");
    store.clear();

    let reloaded = SessionStore::new(storage.clone());
    reloaded.initialize();
    assert_eq!(reloaded.read(), "");
    assert_eq!(storage.load(TOKEN_KEY), Ok(None));
}

#[test]
fn token_survives_reload() {
    let storage = MemoryStorage::new();
    SessionStore::new(storage.clone()).write("tok-1");
    let reloaded = SessionStore::new(storage);
    assert_eq!(reloaded.read(), "tok-1");
}

#[test]
fn clones_share_the_same_session() {
    let store = SessionStore::in_memory();
    let header = store.clone();
    store.write("tok-1");
    assert_eq!(header.read(), "tok-1");
    header.clear();
    assert_eq!(store.read(), "");
}

#[test]
fn in_memory_store_is_not_persistent() {
    let store = SessionStore::in_memory();
    store.write("tok-1");
    assert_eq!(store.read(), "tok-1");
    assert!(!store.is_persistent());
}

// =============================================================
// degraded storage
// =============================================================

#[test]
fn failing_writes_keep_memory_value() {
    let store = SessionStore::new(FailingStorage::writes_only());
    store.write("abc");
    assert_eq!(store.read(), "abc");
    assert!(!store.is_persistent());
    assert_eq!(store.read(), "abc");
}

#[test]
fn failing_reads_start_signed_out_in_memory() {
    let store = SessionStore::new(FailingStorage::everything());
    store.initialize();
    assert_eq!(store.read(), "");
    assert!(!store.is_persistent());
    store.write("abc");
    assert_eq!(store.read(), "abc");
}

#[test]
fn failing_storage_still_notifies_subscribers() {
    let store = SessionStore::new(FailingStorage::writes_only());
    let (seen, _sub) = recorder(&store);
    store.write("abc");
    store.clear();
    assert_eq!(*seen.lock().unwrap(), vec!["abc".to_owned(), String::new()]);
}

#[test]
fn failing_storage_is_loaded_once() {
    let storage = Arc::new(FailingStorage::everything());
    let store = SessionStore::new(Arc::clone(&storage));
    store.initialize();
    store.initialize();
    let _ = store.read();
    assert_eq!(storage.loads.load(Ordering::SeqCst), 1);
}

// =============================================================
// subscribers
// =============================================================

#[test]
fn subscribers_observe_write_before_it_returns() {
    let store = SessionStore::in_memory();
    let (seen, _sub) = recorder(&store);
    store.write("tok-1");
    assert_eq!(*seen.lock().unwrap(), vec!["tok-1".to_owned()]);
}

#[test]
fn two_subscribers_see_writes_in_order() {
    let store = SessionStore::in_memory();
    let (a, _sa) = recorder(&store);
    let (b, _sb) = recorder(&store);
    store.write("one");
    store.write("two");
    store.clear();
    let expected = vec!["one".to_owned(), "two".to_owned(), String::new()];
    assert_eq!(*a.lock().unwrap(), expected);
    assert_eq!(*b.lock().unwrap(), expected);
}

#[test]
fn unchanged_write_does_not_notify() {
    let store = SessionStore::in_memory();
    let (seen, _sub) = recorder(&store);
    store.write("tok-1");
    store.write("tok-1");
    store.clear();
    store.clear();
    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[test]
fn nested_write_is_delivered_after_current_round() {
    let store = SessionStore::in_memory();
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));

    let writer = store.clone();
    let sink = Arc::clone(&first);
    let _s1 = store.subscribe(move |token| {
        sink.lock().unwrap().push(token.to_owned());
        if token == "expired" {
            writer.clear();
        }
    });
    let sink = Arc::clone(&second);
    let _s2 = store.subscribe(move |token| sink.lock().unwrap().push(token.to_owned()));

    store.write("expired");

    let expected = vec!["expired".to_owned(), String::new()];
    assert_eq!(*first.lock().unwrap(), expected);
    assert_eq!(*second.lock().unwrap(), expected);
    assert_eq!(store.read(), "");
}

#[test]
fn dropping_subscription_unsubscribes() {
    let store = SessionStore::in_memory();
    let (seen, sub) = recorder(&store);
    assert_eq!(store.subscriber_count(), 1);
    drop(sub);
    assert_eq!(store.subscriber_count(), 0);
    store.write("tok-1");
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn subscription_outliving_store_drops_cleanly() {
    let store = SessionStore::in_memory();
    let sub = store.subscribe(|_| {});
    drop(store);
    drop(sub);
}

#[test]
fn debug_output_hides_token() {
    let store = SessionStore::in_memory();
    store.write("secret-token");
    let rendered = format!("{store:?}");
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("authenticated: true"));
}

#[test]
fn rewriting_same_token_retries_failed_persistence() {
    let slot = MemoryStorage::new();
    let store = SessionStore::new(RecoveringStorage { inner: slot.clone(), failures_left: AtomicUsize::new(1) });
    let (seen, _sub) = recorder(&store);

    store.write("abc");
    assert!(!store.is_persistent());
    assert_eq!(slot.get(TOKEN_KEY), None);

    store.write("abc");
    assert!(store.is_persistent());
    assert_eq!(slot.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(SessionStore::new(slot).read(), "abc");
    assert_eq!(seen.lock().unwrap().len(), 1);
}

// =============================================================
// watch
// =============================================================

#[test]
fn watch_delivers_current_value_then_updates() {
    let store = SessionStore::in_memory();
    store.write("tok-1");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = store.watch(move |token| sink.lock().unwrap().push(token.to_owned()));

    store.write("tok-2");
    assert_eq!(*seen.lock().unwrap(), vec!["tok-1".to_owned(), "tok-2".to_owned()]);
}

#[test]
fn watch_does_not_replay_to_existing_subscribers() {
    let store = SessionStore::in_memory();
    store.write("tok-1");
    let (seen, _sub) = recorder(&store);
    let _watch = store.watch(|_| {});
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn watch_inside_a_round_starts_from_latest_value() {
    let store = SessionStore::in_memory();
    let watched = Arc::new(Mutex::new(Vec::new()));
    let subs = Arc::new(Mutex::new(Vec::new()));

    let inner_store = store.clone();
    let sink = Arc::clone(&watched);
    let keep = Arc::clone(&subs);
    let _outer = store.subscribe(move |token| {
        if token == "first" {
            inner_store.write("second");
            let sink = Arc::clone(&sink);
            let sub = inner_store.watch(move |t| sink.lock().unwrap().push(t.to_owned()));
            keep.lock().unwrap().push(sub);
        }
    });

    store.write("first");
    assert_eq!(*watched.lock().unwrap(), vec!["second".to_owned()]);
    subs.lock().unwrap().clear();
}
