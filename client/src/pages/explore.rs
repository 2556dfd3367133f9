//! Product catalog with search, likes and add-to-cart.

use leptos::prelude::*;

use crate::components::dialog::{ImageDialog, ShopDialog};
use crate::components::product_card::ProductCard;
use crate::components::require_auth::{AllowedToken, RequireAuth, use_allowed_token};
use crate::net::api;
use crate::net::types::Shop;
use crate::state::catalog::{CatalogState, search_term};
use crate::state::toast::{Toasts, use_toasts};

#[component]
pub fn ExplorePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <Catalog/>
        </RequireAuth>
    }
}

fn load(token: AllowedToken, query: Option<String>, catalog: RwSignal<CatalogState>, loading: RwSignal<bool>, toasts: Toasts) {
    let current = token.get_untracked();
    if current.is_empty() {
        return;
    }
    loading.set(true);
    leptos::task::spawn_local(async move {
        let result = match &query {
            Some(q) => api::search_products(&current, q).await,
            None => api::fetch_all_products(&current).await,
        };
        if !token.is_current(&current) {
            return;
        }
        match result {
            Ok(products) => {
                if query.is_some() && products.is_empty() {
                    toasts.info("No Results", "No products match your search.");
                }
                catalog.update(|c| c.replace(products));
            }
            Err(e) => toasts.error("Error", e.to_string()),
        }
        loading.set(false);
    });
}

#[component]
fn Catalog() -> impl IntoView {
    let token = use_allowed_token();
    let toasts = use_toasts();

    let catalog = RwSignal::new(CatalogState::default());
    let loading = RwSignal::new(true);
    let query = RwSignal::new(String::new());
    let shop_open = RwSignal::new(None::<Shop>);
    let image_open = RwSignal::new(None::<String>);

    Effect::new(move || {
        if token.0.with(Option::is_some) {
            load(token, None, catalog, loading, toasts);
        }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = query.with_untracked(|q| search_term(q).map(str::to_owned));
        load(token, term, catalog, loading, toasts);
    };

    let on_add = Callback::new(move |product_id: String| {
        let current = token.get_untracked();
        let Some(quantity) = catalog
            .try_update(|c| c.adding.insert(product_id.clone()).then(|| c.quantity(&product_id)))
            .flatten()
        else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::add_to_cart(&current, &product_id, quantity).await {
                Ok(()) => toasts.success("Added to Cart", "Added successfully."),
                Err(e) => toasts.error("Error", e.to_string()),
            }
            catalog.update(|c| {
                c.adding.remove(&product_id);
            });
        });
    });

    let on_quantity = Callback::new(move |(product_id, raw): (String, String)| {
        catalog.update(|c| c.set_quantity(&product_id, &raw));
    });
    let on_view_shop = Callback::new(move |shop: Shop| shop_open.set(Some(shop)));
    let on_view_image = Callback::new(move |src: String| image_open.set(Some(src)));
    let close_shop = Callback::new(move |()| shop_open.set(None));
    let close_image = Callback::new(move |()| image_open.set(None));

    let on_like = Callback::new(move |product_id: String| {
        let current = token.get_untracked();
        if !catalog.try_update(|c| c.liking.insert(product_id.clone())).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::toggle_like(&current, &product_id).await;
            catalog.update(|c| {
                c.liking.remove(&product_id);
                if result.is_ok() {
                    c.apply_like(&product_id);
                }
            });
            match result {
                Ok(message) => toasts.success("Success", message),
                Err(e) => toasts.error("Error", e.to_string()),
            }
        });
    });

    view! {
        <section class="page explore-page">
            <h1>"Explore"</h1>
            <form class="explore-page__search" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Search"</button>
            </form>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading products..."</p> }>
                <Show
                    when=move || catalog.with(|c| !c.products.is_empty())
                    fallback=|| view! { <p class="page__empty">"No products found."</p> }
                >
                    <div class="explore-page__grid">
                        <For
                            each=move || catalog.with(|c| c.products.clone())
                            key=|p| (p.id.clone(), p.liked, p.like_count)
                            children=move |product| {
                                let id_add = product.id.clone();
                                let id_like = product.id.clone();
                                let id_quantity = product.id.clone();
                                view! {
                                    <ProductCard
                                        product=product
                                        adding=Signal::derive(move || catalog.with(|c| c.adding.contains(&id_add)))
                                        liking=Signal::derive(move || catalog.with(|c| c.liking.contains(&id_like)))
                                        quantity=Signal::derive(move || catalog.with(|c| c.quantity(&id_quantity)))
                                        on_add=on_add
                                        on_like=on_like
                                        on_quantity=on_quantity
                                        on_view_shop=on_view_shop
                                        on_view_image=on_view_image
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
            {move || shop_open.get().map(|shop| view! { <ShopDialog shop=shop on_close=close_shop/> })}
            {move || image_open.get().map(|src| view! { <ImageDialog src=src on_close=close_image/> })}
        </section>
    }
}
