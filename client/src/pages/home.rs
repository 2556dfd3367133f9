//! Landing page.

use leptos::prelude::*;

use crate::components::require_auth::use_mounted;
use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let mounted = use_mounted();
    let authenticated = session.is_authenticated();

    view! {
        <section class="page home-page">
            <div class="home-page__hero">
                <h1>"Discover what's trending, then wear it"</h1>
                <p>
                    "Browse handmade fashion from local shops, generate outfit designs from current trends, "
                    "and let the trend assistant help you pick."
                </p>
                <Show
                    when=move || mounted.get() && authenticated.get()
                    fallback=|| {
                        view! {
                            <div class="home-page__cta">
                                <a class="btn btn--primary" href="/signup">"Get Started"</a>
                                <a class="btn" href="/login">"Login"</a>
                            </div>
                        }
                    }
                >
                    <div class="home-page__cta">
                        <a class="btn btn--primary" href="/explore">"Explore Products"</a>
                        <a class="btn" href="/generate-design">"Generate a Design"</a>
                    </div>
                </Show>
            </div>
            <div class="home-page__features">
                <article>
                    <h3>"Trend Designs"</h3>
                    <p>"Pick an occasion and region to see current trends and a generated look."</p>
                </article>
                <article>
                    <h3>"Local Shops"</h3>
                    <p>"Open your own shop, list products and run marketing campaigns."</p>
                </article>
                <article>
                    <h3>"Trend Assistant"</h3>
                    <p>"Ask about styles, fabrics and what to wear, with optional web search."</p>
                </article>
            </div>
        </section>
    }
}
