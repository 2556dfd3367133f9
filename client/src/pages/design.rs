//! Design generator: trend lookup for an outfit, then image generation.

use leptos::prelude::*;

use crate::components::require_auth::{RequireAuth, use_allowed_token};
use crate::net::api;
use crate::net::types::Trend;
use crate::state::design::{DesignSelection, GENDERS, OCCASIONS, REGIONS};
use crate::state::toast::use_toasts;

#[component]
pub fn DesignPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DesignGenerator/>
        </RequireAuth>
    }
}

#[component]
fn DesignGenerator() -> impl IntoView {
    let token = use_allowed_token();
    let toasts = use_toasts();

    let selection = RwSignal::new(DesignSelection::default());
    let trends = RwSignal::new(Vec::<Trend>::new());
    let selected_trend = RwSignal::new(String::new());
    let image_url = RwSignal::new(None::<String>);
    let loading_trends = RwSignal::new(false);
    let loading_image = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_fetch_trends = move |_: leptos::ev::MouseEvent| {
        let request = match selection.with_untracked(DesignSelection::trends_request) {
            Ok(request) => request,
            Err(message) => {
                toasts.error("Error", message);
                return;
            }
        };
        loading_trends.set(true);
        error.set(String::new());
        trends.set(Vec::new());
        selected_trend.set(String::new());
        image_url.set(None);
        let current = token.get_untracked();
        leptos::task::spawn_local(async move {
            match api::fetch_trends(&current, &request).await {
                Ok(list) => trends.set(list),
                Err(e) => {
                    error.set(e.to_string());
                    toasts.error("Error", e.to_string());
                }
            }
            loading_trends.set(false);
        });
    };

    let on_generate = move |_: leptos::ev::MouseEvent| {
        let request = match selection.with_untracked(|s| s.image_request(&selected_trend.get_untracked())) {
            Ok(request) => request,
            Err(message) => {
                toasts.error("Error", message);
                return;
            }
        };
        loading_image.set(true);
        error.set(String::new());
        image_url.set(None);
        let current = token.get_untracked();
        leptos::task::spawn_local(async move {
            match api::generate_image(&current, &request).await {
                Ok(url) => image_url.set(Some(url)),
                Err(e) => {
                    error.set(e.to_string());
                    toasts.error("Error", e.to_string());
                }
            }
            loading_image.set(false);
        });
    };

    let select = move |label: &'static str,
                       options: Signal<Vec<&'static str>>,
                       current: Signal<String>,
                       apply: fn(&mut DesignSelection, &str)| {
        view! {
            <label>
                {label}
                <select
                    prop:value=move || current.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        selection.update(|s| apply(s, &value));
                    }
                >
                    <option value="">{format!("Select {}", label.to_lowercase())}</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|o| view! { <option value=o selected=move || current.get() == o>{o}</option> })
                            .collect_view()
                    }}
                </select>
            </label>
        }
    };

    view! {
        <section class="page design-page">
            <h1>"Generate a Design"</h1>
            <div class="design-page__form">
                {select(
                    "Gender",
                    Signal::derive(|| GENDERS.to_vec()),
                    Signal::derive(move || selection.with(|s| s.gender.clone())),
                    DesignSelection::set_gender,
                )}
                {select(
                    "Occasion",
                    Signal::derive(|| OCCASIONS.to_vec()),
                    Signal::derive(move || selection.with(|s| s.occasion.clone())),
                    DesignSelection::set_occasion,
                )}
                {select(
                    "Dress Type",
                    Signal::derive(move || selection.with(|s| s.available_dresses().to_vec())),
                    Signal::derive(move || selection.with(|s| s.dress_type.clone())),
                    |s, v| s.dress_type = v.to_owned(),
                )}
                {select(
                    "Region",
                    Signal::derive(|| REGIONS.to_vec()),
                    Signal::derive(move || selection.with(|s| s.region.clone())),
                    |s, v| s.region = v.to_owned(),
                )}
                <button class="btn btn--primary" disabled=move || loading_trends.get() on:click=on_fetch_trends>
                    {move || if loading_trends.get() { "Fetching trends..." } else { "Get Trends" }}
                </button>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>

            <Show when=move || trends.with(|t| !t.is_empty())>
                <div class="design-page__trends">
                    <h2>"Current Trends"</h2>
                    {move || {
                        trends
                            .get()
                            .into_iter()
                            .map(|trend| {
                                let text = trend.text().to_owned();
                                let value = text.clone();
                                let checked = text.clone();
                                view! {
                                    <label class="design-page__trend">
                                        <input
                                            type="radio"
                                            name="trend"
                                            prop:checked=move || selected_trend.get() == checked
                                            on:change=move |_| selected_trend.set(value.clone())
                                        />
                                        {text}
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                    <button class="btn btn--primary" disabled=move || loading_image.get() on:click=on_generate>
                        {move || if loading_image.get() { "Generating..." } else { "Generate Image" }}
                    </button>
                </div>
            </Show>

            {move || image_url.get().map(|src| view! { <img class="design-page__image" src=src alt="Generated design"/> })}
        </section>
    }
}
