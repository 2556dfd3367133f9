//! Transient notices shown after user actions.
//!
//! DESIGN
//! ======
//! [`ToastQueue`] is plain data so ordering and dismissal are testable
//! without a browser. [`Toasts`] wraps it in a signal for the component tree
//! and, in the browser, schedules auto-dismiss with `gloo-timers`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays visible.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind, title: title.into(), description: description.into() });
        if self.items.len() > MAX_TOASTS {
            let excess = self.items.len() - MAX_TOASTS;
            self.items.drain(..excess);
        }
        id
    }

    /// Remove the toast with `id`, if still visible.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Toast queue shared through context.
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    pub fn new() -> Self {
        Self(RwSignal::new(ToastQueue::default()))
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.0
    }

    pub fn info(&self, title: &str, description: impl Into<String>) {
        self.show(ToastKind::Info, title, description.into());
    }

    pub fn success(&self, title: &str, description: impl Into<String>) {
        self.show(ToastKind::Success, title, description.into());
    }

    pub fn error(&self, title: &str, description: impl Into<String>) {
        self.show(ToastKind::Error, title, description.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|q| q.dismiss(id));
    }

    fn show(&self, kind: ToastKind, title: &str, description: String) {
        let mut id = 0;
        self.0.update(|q| id = q.push(kind, title, description));
        #[cfg(feature = "hydrate")]
        {
            let queue = self.0;
            gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || {
                queue.try_update(|q| q.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast queue provided by the app root.
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}
