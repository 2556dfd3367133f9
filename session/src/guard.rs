//! Route guard for screens that require a signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected screens never inspect the token themselves. They attach a
//! [`RouteGuard`], which evaluates the current token immediately and again on
//! every change, and reports transitions through two callbacks: one to
//! navigate away, one to start the screen's data loading.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::{SessionStore, Subscription};

/// Default public entry point for signed-out visitors.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of checking a token against a protected screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the screen; fetches use this token.
    Allow(String),
    /// Leave for the public redirect target.
    Redirect,
}

impl GuardDecision {
    #[must_use]
    pub fn evaluate(token: &str) -> Self {
        if token.is_empty() {
            Self::Redirect
        } else {
            Self::Allow(token.to_owned())
        }
    }
}

/// Last state a guard reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Protected content may render with this token.
    Allowed(String),
    /// The screen was sent to this path.
    Redirected(String),
}

type Callback = Arc<dyn Fn(&str) + Send + Sync>;

struct Shared {
    redirect_to: String,
    state: Mutex<Option<GuardState>>,
    on_redirect: Callback,
    on_allow: Callback,
}

impl Shared {
    fn apply(&self, token: &str) {
        let next = match GuardDecision::evaluate(token) {
            GuardDecision::Allow(token) => GuardState::Allowed(token),
            GuardDecision::Redirect => GuardState::Redirected(self.redirect_to.clone()),
        };
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.as_ref() == Some(&next) {
                return;
            }
            *state = Some(next.clone());
        }
        match next {
            GuardState::Allowed(token) => (self.on_allow)(&token),
            GuardState::Redirected(path) => (self.on_redirect)(&path),
        }
    }
}

/// Live guard bound to a [`SessionStore`]. Detaches when dropped.
pub struct RouteGuard {
    shared: Arc<Shared>,
    _subscription: Subscription,
}

impl RouteGuard {
    /// Attach a guard to `store`.
    ///
    /// `on_redirect` receives `redirect_to` whenever the session becomes
    /// signed out (including at attach time). `on_allow` receives the token
    /// whenever the session becomes signed in or switches accounts.
    pub fn attach<R, A>(store: &SessionStore, redirect_to: impl Into<String>, on_redirect: R, on_allow: A) -> Self
    where
        R: Fn(&str) + Send + Sync + 'static,
        A: Fn(&str) + Send + Sync + 'static,
    {
        let shared = Arc::new(Shared {
            redirect_to: redirect_to.into(),
            state: Mutex::new(None),
            on_redirect: Arc::new(on_redirect),
            on_allow: Arc::new(on_allow),
        });
        let listener = Arc::clone(&shared);
        let subscription = store.watch(move |token| listener.apply(token));
        Self { shared, _subscription: subscription }
    }

    /// Most recent guard state.
    #[must_use]
    pub fn state(&self) -> Option<GuardState> {
        self.shared.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Whether protected content may currently render.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self.state(), Some(GuardState::Allowed(_)))
    }
}
