//! Route guard wrapper for screens that need a signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders its content inside [`RequireAuth`]. The
//! wrapper attaches a [`RouteGuard`] to the session store for as long as the
//! route is mounted: a signed-out session navigates to the login screen
//! without rendering or fetching anything, and a signed-in session exposes
//! its token to the content through [`AllowedToken`].
//!
//! DESIGN
//! ======
//! Guard callbacks only set signals. Navigation happens in an effect, so it
//! runs in the browser after hydration and never during server rendering.
//! Content stays behind a "checking" placeholder until the client mounts,
//! which keeps the server HTML and the first client render identical.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::RouteGuard;

use crate::config::LOGIN_PATH;
use crate::state::session::use_session;

/// Token the guard allowed, provided to protected content.
///
/// Changes only on guard transitions (sign-in, account switch), so content
/// effects keyed on it fetch once per allowed session.
#[derive(Clone, Copy)]
pub struct AllowedToken(pub ReadSignal<Option<String>>);

impl AllowedToken {
    /// Current allowed token without tracking; empty when not allowed.
    pub fn get_untracked(&self) -> String {
        self.0.get_untracked().unwrap_or_default()
    }

    /// Whether a response fetched with `token` still belongs to this session.
    /// Results for a previous account are dropped.
    pub fn is_current(&self, token: &str) -> bool {
        self.0.with_untracked(|t| t.as_deref() == Some(token))
    }
}

/// Allowed token of the enclosing [`RequireAuth`].
pub fn use_allowed_token() -> AllowedToken {
    expect_context::<AllowedToken>()
}

/// `false` during server rendering and hydration, `true` once mounted.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move || set_mounted.set(true));
    mounted
}

/// Render `children` only while the session is signed in.
#[component]
pub fn RequireAuth(
    /// Public path signed-out visitors are sent to.
    #[prop(into, default = LOGIN_PATH.to_owned())]
    redirect_to: String,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let mounted = use_mounted();

    let (allowed, set_allowed) = signal(None::<String>);
    let (redirect, set_redirect) = signal(None::<String>);
    provide_context(AllowedToken(allowed));

    let guard = RouteGuard::attach(
        session.store(),
        redirect_to,
        move |path| {
            set_allowed.set(None);
            set_redirect.set(Some(path.to_owned()));
        },
        move |token| {
            set_redirect.set(None);
            set_allowed.set(Some(token.to_owned()));
        },
    );
    on_cleanup(move || drop(guard));

    Effect::new(move || {
        if let Some(path) = redirect.get() {
            log::debug!("guard: redirecting to {path}");
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || mounted.get() && allowed.with(Option::is_some)
            fallback=move || {
                view! {
                    <div class="page page--guard">
                        <p>
                            {move || {
                                if mounted.get() && redirect.with(Option::is_some) {
                                    "Redirecting to login..."
                                } else {
                                    "Checking session..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
