//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    Effect::new(move || {
        log::warn!("route not found: {}", location.pathname.get());
    });

    view! {
        <section class="page not-found-page">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <a class="btn btn--primary" href="/">"Return to Home"</a>
        </section>
    }
}
