//! Shopping cart with removal and checkout.

use leptos::prelude::*;

use crate::components::require_auth::{RequireAuth, use_allowed_token};
use crate::net::api;
use crate::net::endpoints::product_image_url;
use crate::state::cart::{CartState, format_price};
use crate::state::toast::use_toasts;

#[component]
pub fn CartPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <CartView/>
        </RequireAuth>
    }
}

#[component]
fn CartView() -> impl IntoView {
    let token = use_allowed_token();
    let toasts = use_toasts();

    let cart = RwSignal::new(CartState::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    let reload = move || {
        let current = token.get_untracked();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = api::fetch_cart(&current).await;
            if !token.is_current(&current) {
                return;
            }
            match result {
                Ok(items) => {
                    error.set(String::new());
                    cart.set(CartState::with_items(items));
                }
                Err(e) => {
                    error.set(e.to_string());
                    toasts.error("Error", e.to_string());
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move || {
        if token.0.with(Option::is_some) {
            reload();
        }
    });

    let on_remove = move |product_id: String| {
        if !cart.try_update(|c| c.begin_remove(&product_id)).unwrap_or(false) {
            return;
        }
        let current = token.get_untracked();
        leptos::task::spawn_local(async move {
            let result = api::remove_from_cart(&current, &product_id).await;
            cart.update(|c| c.finish_remove(&product_id, result.is_ok()));
            match result {
                Ok(()) => toasts.success("Item Removed", "Removed from cart."),
                Err(e) => toasts.error("Error", e.to_string()),
            }
        });
    };

    let on_checkout = move |_: leptos::ev::MouseEvent| {
        if cart.with_untracked(|c| c.is_empty() || c.checking_out) {
            return;
        }
        cart.update(|c| c.checking_out = true);
        let current = token.get_untracked();
        leptos::task::spawn_local(async move {
            match api::checkout(&current).await {
                Ok(()) => {
                    toasts.success("Order Placed", "Your order was placed successfully.");
                    cart.set(CartState::default());
                }
                Err(e) => {
                    toasts.error("Checkout Failed", e.to_string());
                    cart.update(|c| c.checking_out = false);
                }
            }
        });
    };

    view! {
        <section class="page cart-page">
            <h1>"Your Cart"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading cart..."</p> }>
                <Show when=move || !error.get().is_empty()>
                    <p class="page__error">{move || error.get()}</p>
                </Show>
                <Show
                    when=move || cart.with(|c| !c.is_empty())
                    fallback=|| {
                        view! {
                            <div class="page__empty">
                                <p>"Your cart is empty"</p>
                                <a class="btn btn--primary" href="/explore">"Start Shopping"</a>
                            </div>
                        }
                    }
                >
                    <ul class="cart-page__items">
                        <For
                            each=move || cart.with(|c| c.items.clone())
                            key=|item| item.id.clone()
                            children=move |item| {
                                let id = item.id.clone();
                                let removing_id = item.id.clone();
                                let removing = move || cart.with(|c| c.is_removing(&removing_id));
                                let removing_label = removing.clone();
                                #[allow(clippy::cast_precision_loss)]
                                let line_total = item.price * item.ordered_quantity as f64;
                                view! {
                                    <li class="cart-page__item">
                                        {item.product_image.as_deref().map(|f| view! { <img src=product_image_url(f) alt=""/> })}
                                        <div class="cart-page__details">
                                            <h3>{item.product_name.clone()}</h3>
                                            <p>{item.description.clone()}</p>
                                            <span>{format!("Qty: {}", item.ordered_quantity)}</span>
                                        </div>
                                        <span class="cart-page__price">{format!("Rs {}", format_price(line_total))}</span>
                                        <button
                                            class="btn btn--danger"
                                            disabled=removing
                                            on:click=move |_| on_remove(id.clone())
                                        >
                                            {move || if removing_label() { "Removing..." } else { "Remove" }}
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <div class="cart-page__summary">
                        <span>"Total"</span>
                        <strong>{move || format!("Rs {}", format_price(cart.with(CartState::total)))}</strong>
                        <button
                            class="btn btn--primary"
                            disabled=move || cart.with(|c| c.checking_out)
                            on:click=on_checkout
                        >
                            {move || if cart.with(|c| c.checking_out) { "Placing order..." } else { "Checkout" }}
                        </button>
                    </div>
                </Show>
            </Show>
        </section>
    }
}
