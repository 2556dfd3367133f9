//! Reactive view of the session token for Leptos components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The framework-free [`SessionStore`] stays the single source of truth. This
//! context mirrors its value into an `RwSignal` through a store subscription,
//! so views re-render on login and logout while every write still goes
//! through the store (and therefore reaches storage and route guards).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use session::{SessionStore, Subscription};

/// Session handle provided to the whole component tree.
#[derive(Clone)]
pub struct SessionContext {
    store: SessionStore,
    token: RwSignal<String>,
    _subscription: Arc<Subscription>,
}

impl SessionContext {
    /// Initialize `store` and mirror it into a signal.
    pub fn new(store: SessionStore) -> Self {
        store.initialize();
        let token = RwSignal::new(String::new());
        let subscription = store.watch(move |value| token.set(value.to_owned()));
        Self { store, token, _subscription: Arc::new(subscription) }
    }

    /// Underlying store, for attaching route guards.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Reactive token; empty when signed out.
    pub fn token(&self) -> Signal<String> {
        self.token.into()
    }

    /// Reactive signed-in flag.
    pub fn is_authenticated(&self) -> Signal<bool> {
        let token = self.token;
        Signal::derive(move || token.with(|t| !t.is_empty()))
    }

    /// Current token without tracking.
    pub fn read(&self) -> String {
        self.store.read()
    }

    /// Store a fresh token after login.
    pub fn write(&self, token: impl Into<String>) {
        self.store.write(token);
    }

    /// Sign out.
    pub fn clear(&self) {
        log::info!("session: signed out");
        self.store.clear();
    }
}

/// Build the session context from `store` and provide it.
pub fn provide_session(store: SessionStore) -> SessionContext {
    let ctx = SessionContext::new(store);
    provide_context(ctx.clone());
    ctx
}

/// Session context provided by the app root.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
