//! Site header with session-aware navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::require_auth::use_mounted;
use crate::config::HOME_PATH;
use crate::state::session::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let mounted = use_mounted();
    let authenticated = session.is_authenticated();
    let signed_in = move || mounted.get() && authenticated.get();
    let menu_open = RwSignal::new(false);
    let logout_seq = RwSignal::new(0_u64);

    Effect::new(move || {
        if logout_seq.get() > 0 {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    let on_logout = Callback::new(move |()| {
        menu_open.set(false);
        session.clear();
        logout_seq.update(|n| *n += 1);
    });

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"AITrendShopper"</a>
            <nav class="site-header__nav">
                <a href="/generate-design">"Generate Design"</a>
                <a href="/explore">"Explore"</a>
                <a href="/chatbot">"Trend Assistant"</a>
            </nav>
            <span class="site-header__spacer"></span>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <div class="site-header__auth">
                            <a href="/login" class="btn">"Login"</a>
                            <a href="/signup" class="btn btn--primary">"Sign Up"</a>
                        </div>
                    }
                }
            >
                <div class="site-header__account">
                    <a href="/cart" class="site-header__cart">"Cart"</a>
                    <button class="btn site-header__profile" on:click=move |_| menu_open.update(|open| *open = !*open)>
                        "Profile"
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="site-header__menu" on:click=move |_| menu_open.set(false)>
                            <a href="/myaccount">"My Account"</a>
                            <a href="/edit_profile">"Edit Profile"</a>
                            <a href="/shop">"My Shop"</a>
                            <a href="/marketing">"Marketing"</a>
                            <a href="/dashboard">"Dashboard"</a>
                            <button class="btn site-header__logout" on:click=move |_| on_logout.run(())>
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </header>
    }
}
