//! Account menu linking to profile, shop and marketing screens.

use leptos::prelude::*;

use crate::components::require_auth::RequireAuth;
use crate::state::session::use_session;

struct MenuItem {
    text: &'static str,
    path: &'static str,
    description: &'static str,
}

static MENU: [(&str, &[MenuItem]); 2] = [
    (
        "Account",
        &[
            MenuItem { text: "Profile", path: "/edit_profile", description: "Edit your personal information" },
            MenuItem { text: "Orders", path: "/dashboard", description: "Track purchases and shop sales" },
            MenuItem { text: "Cart", path: "/cart", description: "Review items before checkout" },
        ],
    ),
    (
        "Business",
        &[
            MenuItem { text: "Shop", path: "/shop", description: "Manage your shop and products" },
            MenuItem { text: "Dashboard", path: "/shop-dashboard", description: "Products and campaign controls" },
            MenuItem { text: "Marketing", path: "/marketing", description: "Manage marketing campaigns and promotions" },
        ],
    ),
];

#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AccountMenu/>
        </RequireAuth>
    }
}

#[component]
fn AccountMenu() -> impl IntoView {
    let session = use_session();
    // The guard sends this screen to the login page once the token is gone.
    let on_logout = move |_| session.clear();

    view! {
        <section class="page account-page">
            <h1>"My Account"</h1>
            <p class="page__subtitle">"Manage your account settings and preferences"</p>
            {MENU
                .iter()
                .map(|(title, items)| {
                    view! {
                        <div class="account-page__group">
                            <h2>{*title}</h2>
                            <div class="account-page__grid">
                                {items
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <a class="account-page__card" href=item.path>
                                                <h3>{item.text}</h3>
                                                <p>{item.description}</p>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <button class="btn btn--danger account-page__logout" on:click=on_logout>
                "Logout"
            </button>
        </section>
    }
}
