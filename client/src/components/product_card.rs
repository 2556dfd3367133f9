//! Catalog card with like, quantity and add-to-cart actions.

use leptos::prelude::*;

use crate::net::endpoints::product_image_url;
use crate::net::types::{Product, Shop};
use crate::state::cart::format_price;

#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)] adding: Signal<bool>,
    #[prop(into)] liking: Signal<bool>,
    #[prop(into)] quantity: Signal<u32>,
    on_add: Callback<String>,
    on_like: Callback<String>,
    /// `(product id, raw input)` on every quantity edit.
    on_quantity: Callback<(String, String)>,
    on_view_shop: Callback<Shop>,
    on_view_image: Callback<String>,
) -> impl IntoView {
    let id_add = product.id.clone();
    let id_like = product.id.clone();
    let id_quantity = product.id.clone();
    let image = product.product_image.as_deref().map(product_image_url);
    let shop = product.shop.clone();
    let like_label = if product.liked { "♥" } else { "♡" };

    view! {
        <article class="product-card">
            {image
                .map(|src| {
                    let full = src.clone();
                    view! {
                        <img
                            class="product-card__image"
                            src=src
                            alt=product.product_name.clone()
                            on:click=move |_| on_view_image.run(full.clone())
                        />
                    }
                })}
            <div class="product-card__body">
                <h3 class="product-card__name">{product.product_name.clone()}</h3>
                {shop
                    .map(|shop| {
                        let name = shop.shop_name.clone();
                        view! {
                            <span class="product-card__shop">{name}</span>
                            <button class="btn btn--outline" on:click=move |_| on_view_shop.run(shop.clone())>
                                "View Shop"
                            </button>
                        }
                    })}
                <p class="product-card__description">{product.description.clone()}</p>
                <span class="product-card__price">{format!("Rs {}", format_price(product.price))}</span>
            </div>
            <div class="product-card__actions">
                <button
                    class="btn product-card__like"
                    class:product-card__like--on=product.liked
                    disabled=move || liking.get()
                    on:click=move |_| on_like.run(id_like.clone())
                >
                    {format!("{like_label} {}", product.like_count)}
                </button>
                <input
                    class="product-card__quantity"
                    type="number"
                    min="1"
                    aria-label="Quantity"
                    prop:value=move || quantity.get().to_string()
                    on:input=move |ev| on_quantity.run((id_quantity.clone(), event_target_value(&ev)))
                />
                <button
                    class="btn btn--primary product-card__add"
                    disabled=move || adding.get()
                    on:click=move |_| on_add.run(id_add.clone())
                >
                    {move || if adding.get() { "Adding..." } else { "Add to Cart" }}
                </button>
            </div>
        </article>
    }
}
