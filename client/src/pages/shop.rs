//! Shop management: shop details, product inventory and campaign controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/shop` and `/shop-dashboard` share this screen. The dashboard variant adds
//! per-product campaign start/check controls. A user without a shop sees the
//! create form; saving switches it to edit mode.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::require_auth::{AllowedToken, RequireAuth, use_allowed_token};
use crate::net::api::{self, ApiError, Upload};
use crate::net::endpoints::{product_image_url, shop_banner_url};
use crate::net::types::{Product, ProductForm, Shop, ShopForm};
use crate::state::cart::format_price;
use crate::state::forms::{validate_product, validate_shop};
use crate::state::marketing::CampaignPanel;
use crate::state::toast::use_toasts;
use crate::util::markdown;
use crate::util::upload::{preview_url, selected_file};

#[component]
pub fn ShopPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ShopManager campaigns=false/>
        </RequireAuth>
    }
}

#[component]
pub fn ShopDashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ShopManager campaigns=true/>
        </RequireAuth>
    }
}

/// Which product the product form is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Editing {
    Closed,
    New,
    Existing(String),
}

#[component]
fn ShopManager(campaigns: bool) -> impl IntoView {
    let token = use_allowed_token();
    let toasts = use_toasts();

    let shop = RwSignal::new(None::<Shop>);
    let shop_form = RwSignal::new(ShopForm::default());
    let shop_error = RwSignal::new(String::new());
    let banner = RwSignal::new_local(None::<Upload>);
    let banner_preview = RwSignal::new(None::<String>);

    let products = RwSignal::new(Vec::<Product>::new());
    let product_error = RwSignal::new(String::new());
    let editing = RwSignal::new(Editing::Closed);
    let product_form = RwSignal::new(ProductForm::default());
    let product_image = RwSignal::new_local(None::<Upload>);
    let product_preview = RwSignal::new(None::<String>);

    let panels = RwSignal::new(HashMap::<String, CampaignPanel>::new());
    // Bumped after every successful save to refetch shop and products.
    let reload_seq = RwSignal::new(0_u64);

    Effect::new(move || {
        reload_seq.track();
        let Some(current) = token.0.get() else {
            return;
        };
        load_shop(token, current, shop, shop_form, banner_preview, products, shop_error, product_error);
    });

    let on_shop_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = shop_form.get_untracked();
        if let Err(message) = validate_shop(&form) {
            shop_error.set(message.to_owned());
            return;
        }
        shop_error.set(String::new());
        let exists = shop.with_untracked(Option::is_some);
        let file = banner.get_untracked();
        let current = token.get_untracked();
        leptos::task::spawn_local(async move {
            match api::save_shop(&current, &form, exists, file).await {
                Ok(()) => {
                    toasts.success("Success", if exists { "Shop updated" } else { "Shop created" });
                    banner.set(None);
                    reload_seq.update(|n| *n += 1);
                }
                Err(e) => shop_error.set(e.to_string()),
            }
        });
    };

    let open_product = move |target: Editing| {
        let form = match &target {
            Editing::Existing(id) => products
                .with_untracked(|ps| ps.iter().find(|p| &p.id == id).map(ProductForm::from_product))
                .unwrap_or_default(),
            _ => ProductForm::default(),
        };
        let preview = match &target {
            Editing::Existing(id) => products.with_untracked(|ps| {
                ps.iter().find(|p| &p.id == id).and_then(|p| p.product_image.as_deref().map(product_image_url))
            }),
            _ => None,
        };
        product_form.set(form);
        product_image.set(None);
        product_preview.set(preview);
        product_error.set(String::new());
        editing.set(target);
    };

    let on_product_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = product_form.get_untracked();
        if let Err(message) = validate_product(&form) {
            product_error.set(message.to_owned());
            return;
        }
        let target = match editing.get_untracked() {
            Editing::Existing(id) => Some(id),
            Editing::New => None,
            Editing::Closed => return,
        };
        let file = product_image.get_untracked();
        let current = token.get_untracked();
        leptos::task::spawn_local(async move {
            match api::save_product(&current, &form, target.as_deref(), file).await {
                Ok(()) => {
                    toasts.success("Success", if target.is_some() { "Product updated" } else { "Product added" });
                    editing.set(Editing::Closed);
                    reload_seq.update(|n| *n += 1);
                }
                Err(e) => product_error.set(e.to_string()),
            }
        });
    };

    let on_delete = move |product_id: String| {
        let current = token.get_untracked();
        leptos::task::spawn_local(async move {
            match api::delete_product(&current, &product_id).await {
                Ok(()) => {
                    toasts.success("Deleted", "Product removed from your shop");
                    products.update(|ps| ps.retain(|p| p.id != product_id));
                }
                Err(e) => toasts.error("Error", e.to_string()),
            }
        });
    };

    let on_start_campaign = move |product_id: String| {
        panels.update(|m| m.entry(product_id.clone()).or_default().begin());
        leptos::task::spawn_local(async move {
            let outcome = api::start_campaign(&product_id).await.map_err(|e| e.to_string());
            panels.update(|m| m.entry(product_id).or_default().started(outcome));
        });
    };

    let on_check_campaign = move |product_id: String| {
        panels.update(|m| m.entry(product_id.clone()).or_default().begin());
        leptos::task::spawn_local(async move {
            let outcome = api::fetch_campaign_result(&product_id).await.map_err(|e| e.to_string());
            panels.update(|m| m.entry(product_id).or_default().checked(outcome));
        });
    };

    let shop_field = move |key: &'static str, label: &'static str| {
        let value = move || {
            shop_form.with(|f| f.fields().iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned()).unwrap_or_default())
        };
        let on_input = move |ev: leptos::ev::Event| {
            let text = event_target_value(&ev);
            shop_form.update(|f| match key {
                "shop_name" => f.shop_name = text,
                "description" => f.description = text,
                "address" => f.address = text,
                "contact_number" => f.contact_number = text,
                "contact_email" => f.contact_email = text,
                _ => f.tagline = text,
            });
        };
        view! {
            <label>
                {label}
                <input type="text" name=key prop:value=value on:input=on_input/>
            </label>
        }
    };

    let product_field = move |key: &'static str, label: &'static str, kind: &'static str| {
        let value = move || {
            product_form
                .with(|f| f.fields().iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned()).unwrap_or_default())
        };
        let on_input = move |ev: leptos::ev::Event| {
            let text = event_target_value(&ev);
            product_form.update(|f| match key {
                "product_name" => f.product_name = text,
                "description" => f.description = text,
                "price" => f.price = text,
                _ => f.quantity = text,
            });
        };
        view! {
            <label>
                {label}
                <input type=kind name=key prop:value=value on:input=on_input/>
            </label>
        }
    };

    view! {
        <section class="page shop-page">
            <div class="shop-page__panel">
                <h2>{move || if shop.with(Option::is_some) { "Edit Your Shop" } else { "Create Your Shop" }}</h2>
                <Show when=move || !shop_error.get().is_empty()>
                    <p class="page__error">{move || shop_error.get()}</p>
                </Show>
                <form class="shop-page__form" on:submit=on_shop_submit>
                    {shop_field("shop_name", "Shop Name")}
                    {shop_field("description", "Description")}
                    {shop_field("address", "Address")}
                    {shop_field("contact_number", "Contact Number")}
                    {shop_field("contact_email", "Contact Email")}
                    {shop_field("tagline", "Tagline")}
                    <label>
                        "Shop Banner"
                        <input
                            type="file"
                            accept="image/*"
                            on:change=move |ev| {
                                let file = selected_file(&ev);
                                banner_preview.set(file.as_ref().and_then(preview_url));
                                banner.set(file);
                            }
                        />
                    </label>
                    {move || banner_preview.get().map(|src| view! { <img class="shop-page__banner" src=src alt="Banner"/> })}
                    <button class="btn btn--primary" type="submit">
                        {move || if shop.with(Option::is_some) { "Save Shop" } else { "Create Shop" }}
                    </button>
                </form>
            </div>

            <div class="shop-page__panel">
                <div class="shop-page__panel-header">
                    <h2>"Your Products"</h2>
                    <button class="btn btn--primary" on:click=move |_| open_product(Editing::New)>
                        "+ Add Product"
                    </button>
                </div>
                <Show when=move || !product_error.get().is_empty()>
                    <p class="page__error">{move || product_error.get()}</p>
                </Show>
                <Show when=move || editing.with(|e| *e != Editing::Closed)>
                    <form class="shop-page__product-form" on:submit=on_product_submit>
                        {product_field("product_name", "Name", "text")}
                        {product_field("description", "Description", "text")}
                        {product_field("price", "Price", "number")}
                        {product_field("quantity", "Quantity", "number")}
                        <label>
                            "Product Image"
                            <input
                                type="file"
                                accept="image/*"
                                on:change=move |ev| {
                                    let file = selected_file(&ev);
                                    product_preview.set(file.as_ref().and_then(preview_url));
                                    product_image.set(file);
                                }
                            />
                        </label>
                        {move || product_preview.get().map(|src| view! { <img class="shop-page__preview" src=src alt="Preview"/> })}
                        <div class="shop-page__form-actions">
                            <button class="btn btn--primary" type="submit">
                                {move || if matches!(editing.get(), Editing::Existing(_)) { "Update" } else { "Add" }}
                            </button>
                            <button class="btn" type="button" on:click=move |_| editing.set(Editing::Closed)>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </Show>
                <div class="shop-page__products">
                    <For
                        each=move || products.get()
                        key=|p| p.id.clone()
                        children=move |product| {
                            let edit_id = product.id.clone();
                            let delete_id = product.id.clone();
                            let campaign_id = product.id.clone();
                            view! {
                                <article class="shop-product">
                                    {product
                                        .product_image
                                        .as_deref()
                                        .map(|f| view! { <img src=product_image_url(f) alt=product.product_name.clone()/> })}
                                    <h3>{product.product_name.clone()}</h3>
                                    <p>{product.description.clone()}</p>
                                    <p>{format!("Price: Rs {}", format_price(product.price))}</p>
                                    <p>{format!("Quantity: {}", product.quantity.unwrap_or_default())}</p>
                                    <div class="shop-product__actions">
                                        <button class="btn" on:click=move |_| open_product(Editing::Existing(edit_id.clone()))>
                                            "Edit"
                                        </button>
                                        <button class="btn btn--danger" on:click=move |_| on_delete(delete_id.clone())>
                                            "Delete"
                                        </button>
                                    </div>
                                    <Show when=move || campaigns>
                                        <CampaignControls
                                            product_id=campaign_id.clone()
                                            panels=panels
                                            on_start=Callback::new(on_start_campaign)
                                            on_check=Callback::new(on_check_campaign)
                                        />
                                    </Show>
                                </article>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}

#[allow(clippy::too_many_arguments)]
fn load_shop(
    token: AllowedToken,
    current: String,
    shop: RwSignal<Option<Shop>>,
    shop_form: RwSignal<ShopForm>,
    banner_preview: RwSignal<Option<String>>,
    products: RwSignal<Vec<Product>>,
    shop_error: RwSignal<String>,
    product_error: RwSignal<String>,
) {
    leptos::task::spawn_local(async move {
        let (shop_result, products_result) =
            futures::future::join(api::fetch_shop(&current), api::fetch_shop_products(&current)).await;
        if !token.is_current(&current) {
            return;
        }
        match shop_result {
            Ok(found) => {
                shop_form.set(ShopForm::from_shop(&found));
                banner_preview.set(found.shop_banner.as_deref().map(shop_banner_url));
                shop.set(Some(found));
            }
            // The backend answers `status: false` when the user has no shop yet.
            Err(ApiError::Rejected(_)) => shop.set(None),
            Err(e) => shop_error.set(e.to_string()),
        }
        match products_result {
            Ok(list) => products.set(list),
            Err(ApiError::Rejected(_)) => products.set(Vec::new()),
            Err(e) => product_error.set(e.to_string()),
        }
    });
}

#[component]
fn CampaignControls(
    product_id: String,
    panels: RwSignal<HashMap<String, CampaignPanel>>,
    on_start: Callback<String>,
    on_check: Callback<String>,
) -> impl IntoView {
    let panel = {
        let id = product_id.clone();
        move || panels.with(|m| m.get(&id).cloned().unwrap_or_default())
    };
    let start_id = product_id.clone();
    let check_id = product_id;
    let loading = {
        let panel = panel.clone();
        move || panel().loading
    };

    view! {
        <div class="campaign-controls">
            <button class="btn" disabled=loading.clone() on:click=move |_| on_start.run(start_id.clone())>
                "Start Campaign"
            </button>
            <button class="btn" disabled=loading on:click=move |_| on_check.run(check_id.clone())>
                "Check Result"
            </button>
            {move || {
                let panel = panel();
                let status = (!panel.status.is_empty()).then(|| view! { <p class="campaign-controls__status">{panel.status.clone()}</p> });
                let result = panel.result.map(|r| {
                    view! {
                        <div class="campaign-controls__result">
                            <p>{format!("Mails sent: {} / {}", r.successfully_send_mails, r.target_mails)}</p>
                            <div class="markdown" inner_html=markdown::to_html(&r.blog_post)></div>
                        </div>
                    }
                });
                (status, result)
            }}
        </div>
    }
}
