//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns the two app-wide contexts: the session (token store
//! mirrored into a signal) and the toast queue. In the browser the session
//! persists to `sessionStorage`; during server rendering it is memory-only and
//! always signed out, so protected routes render their guard placeholder.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::SessionStore;

use crate::components::{header::Header, toast_host::ToastHost};
use crate::pages::{
    account::AccountPage,
    cart::CartPage,
    chatbot::ChatbotPage,
    dashboard::DashboardPage,
    design::DesignPage,
    explore::ExplorePage,
    home::HomePage,
    login::LoginPage,
    marketing::MarketingPage,
    not_found::NotFoundPage,
    profile::ProfilePage,
    shop::{ShopDashboardPage, ShopPage},
    signup::SignupPage,
};
use crate::state::{session::provide_session, toast::Toasts};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn session_store() -> SessionStore {
    #[cfg(feature = "hydrate")]
    {
        SessionStore::new(crate::util::browser_storage::BrowserSessionStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionStore::in_memory()
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_session(session_store());
    provide_context(Toasts::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/trendshop.css"/>
        <Title text="AITrendShopper"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("myaccount") view=AccountPage/>
                    <Route path=StaticSegment("edit_profile") view=ProfilePage/>
                    <Route path=StaticSegment("shop") view=ShopPage/>
                    <Route path=StaticSegment("shop-dashboard") view=ShopDashboardPage/>
                    <Route path=StaticSegment("marketing") view=MarketingPage/>
                    <Route path=StaticSegment("generate-design") view=DesignPage/>
                    <Route path=StaticSegment("explore") view=ExplorePage/>
                    <Route path=StaticSegment("chatbot") view=ChatbotPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
