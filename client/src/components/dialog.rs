//! Modal overlays used by the catalog: shop details and enlarged images.

use leptos::prelude::*;

use crate::net::types::Shop;
use crate::state::catalog::shop_contact_lines;

/// Shop name, description and contact details.
#[component]
pub fn ShopDialog(shop: Shop, on_close: Callback<()>) -> impl IntoView {
    let lines = shop_contact_lines(&shop);
    let description = Some(shop.description).filter(|d| !d.trim().is_empty());

    view! {
        <div class="dialog" on:click=move |_| on_close.run(())>
            <div class="dialog__panel" role="dialog" on:click=|ev| ev.stop_propagation()>
                <button class="dialog__close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                <h2>{shop.shop_name}</h2>
                {description.map(|d| view! { <p class="dialog__description">{d}</p> })}
                {lines
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <p>
                                <strong>{format!("{label}: ")}</strong>
                                {value}
                            </p>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Full-size product image; any click closes it.
#[component]
pub fn ImageDialog(src: String, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog dialog--image" on:click=move |_| on_close.run(())>
            <img class="dialog__image" src=src alt="Product"/>
        </div>
    }
}
