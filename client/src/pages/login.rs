//! Login page supporting email + password and Google sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login writes the token into the session store, which updates
//! the header, releases route guards and persists the token for reloads.
//! Google sign-in returns here with `#credential=<jwt>` in the URL; the page
//! exchanges that credential once and strips the fragment.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::{GOOGLE_LOGIN_URI, HOME_PATH, google_client_id};
use crate::net::api;
use crate::net::types::LoginRequest;
use crate::state::forms::validate_login;
use crate::state::session::use_session;
use crate::state::toast::use_toasts;

/// Extract a Google credential from a `#credential=...` URL fragment.
#[cfg(any(test, feature = "hydrate"))]
fn credential_from_fragment(fragment: &str) -> Option<String> {
    fragment
        .trim_start_matches('#')
        .split('&')
        .find_map(|pair| pair.strip_prefix("credential="))
        .filter(|c| !c.is_empty())
        .map(str::to_owned)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    // Bumped after a successful login; the effect below navigates home.
    let logged_in_seq = RwSignal::new(0_u64);

    Effect::new(move || {
        if logged_in_seq.get() > 0 {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    let submit = {
        let session = session.clone();
        move |request: LoginRequest| {
            busy.set(true);
            error.set(String::new());
            let session = session.clone();
            leptos::task::spawn_local(async move {
                match api::login(&request).await {
                    Ok(token) => {
                        session.write(token);
                        toasts.success("Login Successful", "Welcome back!");
                        logged_in_seq.update(|n| *n += 1);
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        error.set(e.to_string());
                    }
                }
                busy.set(false);
            });
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let submit = submit.clone();
        Effect::new(move || {
            let Some(location) = web_sys::window().map(|w| w.location()) else {
                return;
            };
            let Some(credential) = location.hash().ok().as_deref().and_then(credential_from_fragment) else {
                return;
            };
            let _ = location.set_hash("");
            submit(LoginRequest::Google { credential });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(message) = validate_login(&email_value, &password_value) {
            error.set(message.to_owned());
            return;
        }
        submit(LoginRequest::Password { email: email_value, password: password_value });
    };

    view! {
        <section class="page auth-page">
            <form class="auth-page__card" on:submit=on_submit>
                <h1>"Welcome Back"</h1>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-page__error">{move || error.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
                {google_client_id()
                    .map(|client_id| {
                        view! {
                            <div class="auth-page__google">
                                <script src="https://accounts.google.com/gsi/client"></script>
                                <div
                                    id="g_id_onload"
                                    data-client_id=client_id
                                    data-ux_mode="redirect"
                                    data-login_uri=GOOGLE_LOGIN_URI
                                ></div>
                                <div class="g_id_signin" data-type="standard"></div>
                            </div>
                        }
                    })}
                <p class="auth-page__switch">
                    "Don't have an account? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </form>
        </section>
    }
}
