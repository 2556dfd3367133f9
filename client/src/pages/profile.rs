//! Profile editor for the signed-in user.

use leptos::prelude::*;

use crate::components::require_auth::{RequireAuth, use_allowed_token};
use crate::net::api;
use crate::net::types::{ProfileUpdate, UserDetails};
use crate::state::forms::profile_update;
use crate::state::toast::use_toasts;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ProfileEditor/>
        </RequireAuth>
    }
}

#[component]
fn ProfileEditor() -> impl IntoView {
    let token = use_allowed_token();
    let toasts = use_toasts();

    let details = RwSignal::new(None::<UserDetails>);
    let form = RwSignal::new(ProfileUpdate::default());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    Effect::new(move || {
        let Some(current) = token.0.get() else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = api::fetch_user_details(&current).await;
            if !token.is_current(&current) {
                return;
            }
            match result {
                Ok(user) => {
                    form.set(profile_update(&user));
                    details.set(Some(user));
                }
                Err(e) => toasts.error("Error", e.to_string()),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let current = token.get_untracked();
        let update = form.get_untracked();
        saving.set(true);
        leptos::task::spawn_local(async move {
            match api::update_profile(&current, &update).await {
                Ok(message) => toasts.success("Success", message),
                Err(e) => toasts.error("Error", e.to_string()),
            }
            saving.set(false);
        });
    };

    let text_field = move |label: &'static str, get: fn(&ProfileUpdate) -> &String, set: fn(&mut ProfileUpdate, String)| {
        view! {
            <label>
                {label}
                <input
                    type="text"
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <section class="page profile-page">
            <h1>"Edit Profile"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading profile..."</p> }>
                <div class="profile-page__summary">
                    {move || {
                        details
                            .get()
                            .map(|user| {
                                view! {
                                    <p>"Email: " {user.email}</p>
                                    <p>"Member since: " {user.joining_date}</p>
                                }
                            })
                    }}
                </div>
                <form class="profile-page__form" on:submit=on_submit>
                    {text_field("Name", |f| &f.name, |f, v| f.name = v)}
                    {text_field("Phone Number", |f| &f.phone_number, |f, v| f.phone_number = v)}
                    {text_field("Address", |f| &f.address, |f, v| f.address = v)}
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </Show>
        </section>
    }
}
