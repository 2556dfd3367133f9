//! Account registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::LOGIN_PATH;
use crate::net::api;
use crate::net::types::SignupRequest;
use crate::state::forms::validate_signup;
use crate::state::toast::use_toasts;

#[component]
pub fn SignupPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered_seq = RwSignal::new(0_u64);

    Effect::new(move || {
        if registered_seq.get() > 0 {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = SignupRequest {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        if let Err(message) = validate_signup(&request.name, &request.email, &request.password, &request.confirm_password)
        {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        leptos::task::spawn_local(async move {
            match api::signup(&request).await {
                Ok(message) => {
                    toasts.success("Signup Successful", message);
                    registered_seq.update(|n| *n += 1);
                }
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <section class="page auth-page">
            <form class="auth-page__card" on:submit=on_submit>
                <h1>"Create Account"</h1>
                {field("Name", "text", name)}
                {field("Email", "email", email)}
                {field("Password", "password", password)}
                {field("Confirm Password", "password", confirm)}
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-page__error">{move || error.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                </button>
                <p class="auth-page__switch">
                    "Already have an account? "
                    <a href="/login">"Login"</a>
                </p>
            </form>
        </section>
    }
}
