//! Client-side session token store.
//!
//! This crate owns the single authentication token shared by every screen of
//! the storefront client. It is framework-free: the Leptos client wraps it in
//! a reactive context, and tests drive it directly.
//!
//! CONTRACT
//! ========
//! - One token per session; the empty string means "signed out".
//! - Every write is mirrored to the persistence slot. Writing the empty token
//!   removes the slot instead of storing an empty value.
//! - Subscribers are notified synchronously, in write order. A write issued
//!   from inside a subscriber is queued until the current round finishes.
//! - Storage failures never escape: the store falls back to memory-only mode
//!   and the in-memory token stays authoritative. Every later write, including
//!   a repeat of the current token, retries the slot.
//! - `watch` hands a new listener the current token and all later ones with
//!   no gap between them; `subscribe` only sees later writes.

pub mod guard;
pub mod storage;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

pub use guard::{GuardDecision, GuardState, RouteGuard};
pub use storage::{MemoryStorage, StorageError, TokenStorage};

/// Storage key holding the token.
pub const TOKEN_KEY: &str = "token";

type Listener = Arc<dyn Fn(&str) + Send + Sync>;

struct State {
    token: String,
    initialized: bool,
    persistent: bool,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    pending: VecDeque<Delivery>,
    notifying: bool,
}

/// Queued notification and the listeners it is addressed to.
struct Delivery {
    value: String,
    audience: Audience,
}

enum Audience {
    /// Listeners registered before the write was issued.
    RegisteredBefore(u64),
    /// A single new listener receiving its starting value.
    Only(u64),
}

impl Audience {
    fn includes(&self, id: u64) -> bool {
        match *self {
            Self::RegisteredBefore(next_id) => id < next_id,
            Self::Only(target) => id == target,
        }
    }
}

struct Inner {
    key: String,
    storage: Option<Box<dyn TokenStorage>>,
    state: Mutex<State>,
}

impl Inner {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Shared handle to the session token. Clones refer to the same session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state();
        f.debug_struct("SessionStore")
            .field("key", &self.inner.key)
            .field("authenticated", &!state.token.is_empty())
            .field("initialized", &state.initialized)
            .field("persistent", &state.persistent)
            .field("listeners", &state.listeners.len())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Store persisted through `storage` under [`TOKEN_KEY`].
    pub fn new(storage: impl TokenStorage + 'static) -> Self {
        Self::with_key(storage, TOKEN_KEY)
    }

    /// Store persisted through `storage` under a custom key.
    pub fn with_key(storage: impl TokenStorage + 'static, key: impl Into<String>) -> Self {
        Self::build(Some(Box::new(storage)), key.into())
    }

    /// Store with no persistence at all. Starts signed out.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::build(None, TOKEN_KEY.to_owned())
    }

    fn build(storage: Option<Box<dyn TokenStorage>>, key: String) -> Self {
        let persistent = storage.is_some();
        Self {
            inner: Arc::new(Inner {
                key,
                storage,
                state: Mutex::new(State {
                    token: String::new(),
                    initialized: false,
                    persistent,
                    next_id: 0,
                    listeners: Vec::new(),
                    pending: VecDeque::new(),
                    notifying: false,
                }),
            }),
        }
    }

    /// Rehydrate the token from the persistence slot.
    ///
    /// Only the first call reads storage; later calls are no-ops. `read`,
    /// `write` and `subscribe` call this implicitly, so a read can never
    /// observe the pre-initialization value.
    pub fn initialize(&self) {
        let mut state = self.inner.state();
        self.ensure_initialized(&mut state);
    }

    fn ensure_initialized(&self, state: &mut State) {
        if state.initialized {
            return;
        }
        state.initialized = true;
        let Some(storage) = self.inner.storage.as_deref() else {
            return;
        };
        match storage.load(&self.inner.key) {
            Ok(Some(token)) if !token.is_empty() => {
                log::debug!("session: restored token from storage");
                state.token = token;
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("session: storage read failed, continuing in memory: {e}");
                state.persistent = false;
            }
        }
    }

    /// Current token; empty when signed out.
    #[must_use]
    pub fn read(&self) -> String {
        let mut state = self.inner.state();
        self.ensure_initialized(&mut state);
        state.token.clone()
    }

    /// Whether a non-empty token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.read().is_empty()
    }

    /// Whether the last storage access succeeded. `false` means the session
    /// currently lives in memory only.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.inner.state().persistent
    }

    /// Replace the token and notify subscribers.
    ///
    /// An empty `token` signs the session out and removes the persisted
    /// entry. Writing the current value again notifies nobody, but retries
    /// persistence if the store is running in memory only.
    pub fn write(&self, token: impl Into<String>) {
        let token = token.into();
        {
            let mut state = self.inner.state();
            self.ensure_initialized(&mut state);
            if state.token == token {
                if !state.persistent && self.inner.storage.is_some() {
                    state.persistent = self.persist(&token);
                }
                return;
            }
            state.token.clone_from(&token);
            state.persistent = self.persist(&token);
            let audience = Audience::RegisteredBefore(state.next_id);
            state.pending.push_back(Delivery { value: token, audience });
            if !Self::begin_delivery(&mut state) {
                return;
            }
        }
        self.deliver();
    }

    /// Claim the delivery loop. `false` when a round is already running; the
    /// queued value is then delivered by that round.
    fn begin_delivery(state: &mut State) -> bool {
        if state.notifying {
            return false;
        }
        state.notifying = true;
        true
    }

    /// Sign out. Same as `write("")`.
    pub fn clear(&self) {
        self.write(String::new());
    }

    fn persist(&self, token: &str) -> bool {
        let Some(storage) = self.inner.storage.as_deref() else {
            return false;
        };
        let key = &self.inner.key;
        let result = if token.is_empty() {
            storage.remove(key)
        } else {
            storage.save(key, token)
        };
        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("session: storage write failed, continuing in memory: {e}");
                false
            }
        }
    }

    fn deliver(&self) {
        loop {
            let (value, listeners) = {
                let mut state = self.inner.state();
                let Some(Delivery { value, audience }) = state.pending.pop_front() else {
                    state.notifying = false;
                    return;
                };
                let listeners: Vec<Listener> = state
                    .listeners
                    .iter()
                    .filter(|(id, _)| audience.includes(*id))
                    .map(|(_, l)| Arc::clone(l))
                    .collect();
                (value, listeners)
            };
            for listener in listeners {
                listener(&value);
            }
        }
    }

    /// Register `listener` for every future token value.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let mut state = self.inner.state();
        self.ensure_initialized(&mut state);
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, Arc::new(listener)));
        Subscription { id, inner: Arc::downgrade(&self.inner) }
    }

    /// Register `listener` for the current token and every later one.
    ///
    /// The current value is taken under the same lock that registers the
    /// listener, so no write can fall between them. It is delivered through
    /// the notification queue: immediately when called outside a
    /// notification round, otherwise right after writes already queued.
    /// Either way `listener` sees the values in write order and ends on the
    /// latest one.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn watch<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let (subscription, run_delivery) = {
            let mut state = self.inner.state();
            self.ensure_initialized(&mut state);
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, Arc::new(listener)));
            let value = state.token.clone();
            state.pending.push_back(Delivery { value, audience: Audience::Only(id) });
            let subscription = Subscription { id, inner: Arc::downgrade(&self.inner) };
            (subscription, Self::begin_delivery(&mut state))
        };
        if run_delivery {
            self.deliver();
        }
        subscription
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.state().listeners.len()
    }
}

/// Guard for a registered listener; unsubscribes on drop.
pub struct Subscription {
    id: u64,
    inner: Weak<Inner>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.state().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
