//! Marketing dashboard: one campaign card per shop product.
//!
//! Each product's campaign status is checked on load; finished campaigns
//! fetch their result. Starting a campaign shows the result as soon as the
//! backend reports it.

use leptos::prelude::*;

use crate::components::require_auth::{RequireAuth, use_allowed_token};
use crate::net::api;
use crate::net::types::Product;
use crate::state::cart::format_price;
use crate::state::marketing::{ProductCampaign, Section, find_mut, strategy_label, strategy_value};
use crate::state::toast::use_toasts;
use crate::util::markdown;

#[component]
pub fn MarketingPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <MarketingDashboard/>
        </RequireAuth>
    }
}

/// Resolve campaign status (and result when done) for one product.
async fn load_campaign(product: Product) -> ProductCampaign {
    let mut row = ProductCampaign::new(product);
    match api::campaign_done(&row.product.id).await {
        Ok(true) => match api::fetch_campaign_result(&row.product.id).await {
            Ok(result) => row.finish(result),
            Err(e) => log::warn!("marketing: result for {} unavailable: {e}", row.product.id),
        },
        Ok(false) => {}
        Err(e) => log::warn!("marketing: status for {} unavailable: {e}", row.product.id),
    }
    row
}

#[component]
fn MarketingDashboard() -> impl IntoView {
    let token = use_allowed_token();
    let toasts = use_toasts();

    let rows = RwSignal::new(Vec::<ProductCampaign>::new());
    let loading = RwSignal::new(true);

    Effect::new(move || {
        let Some(current) = token.0.get() else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            let products = api::fetch_shop_products(&current).await;
            if !token.is_current(&current) {
                return;
            }
            match products {
                Ok(products) => {
                    rows.set(products.iter().cloned().map(ProductCampaign::new).collect());
                    let detailed = futures::future::join_all(products.into_iter().map(load_campaign)).await;
                    if token.is_current(&current) {
                        rows.set(detailed);
                    }
                }
                Err(e) => toasts.error("Error loading products", e.to_string()),
            }
            loading.set(false);
        });
    });

    let on_start = move |product_id: String| {
        rows.update(|r| {
            if let Some(row) = find_mut(r, &product_id) {
                row.starting = true;
            }
        });
        leptos::task::spawn_local(async move {
            let outcome = match api::start_campaign(&product_id).await {
                Ok(()) => api::fetch_campaign_result(&product_id).await,
                Err(e) => Err(e),
            };
            rows.update(|r| {
                let Some(row) = find_mut(r, &product_id) else {
                    return;
                };
                match &outcome {
                    Ok(result) => row.finish(result.clone()),
                    Err(_) => row.starting = false,
                }
            });
            if let Err(e) = outcome {
                toasts.error("Failed to start campaign", e.to_string());
            }
        });
    };

    let toggle = move |product_id: String, section: Section| {
        rows.update(|r| {
            if let Some(row) = find_mut(r, &product_id) {
                row.sections.toggle(section);
            }
        });
    };

    view! {
        <section class="page marketing-page">
            <h1>"Marketing Dashboard"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading products..."</p> }>
                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <p class="page__empty">"Add products to your shop to run campaigns."</p> }
                >
                    {move || rows.get().into_iter().map(|row| campaign_card(row, on_start, toggle)).collect_view()}
                </Show>
            </Show>
        </section>
    }
}

fn campaign_card(
    row: ProductCampaign,
    on_start: impl Fn(String) + Copy + 'static,
    toggle: impl Fn(String, Section) + Copy + 'static,
) -> impl IntoView {
    let id = row.product.id.clone();
    let stats = row.stats();
    let sections = row.sections;
    let start_id = id.clone();

    view! {
        <article class="campaign-card">
            <header class="campaign-card__header">
                <h2>{row.product.product_name.clone()}</h2>
                <p>{row.product.description.clone()}</p>
            </header>
            <div class="campaign-card__meta">
                <p>{format!("Price: Rs {}", format_price(row.product.price))}</p>
                <p>{format!("Quantity: {}", row.product.quantity.unwrap_or_default())}</p>
                <p>{format!("Created At: {}", row.product.created_at.clone().unwrap_or_default())}</p>
                {(!row.done)
                    .then(|| {
                        view! {
                            <button
                                class="btn btn--primary"
                                disabled=row.starting
                                on:click=move |_| on_start(start_id.clone())
                            >
                                {if row.starting { "Starting..." } else { "Start Campaign" }}
                            </button>
                        }
                    })}
            </div>
            {row
                .result
                .map(|result| {
                    let toggles = Section::ALL
                        .into_iter()
                        .map(|section| {
                            let id = id.clone();
                            view! {
                                <button class="btn btn--outline" on:click=move |_| toggle(id.clone(), section)>
                                    {section.toggle_label(sections.is_open(section))}
                                </button>
                            }
                        })
                        .collect_view();
                    let poster = sections
                        .is_open(Section::Image)
                        .then(|| view! { <img class="campaign-card__poster" src=api::poster_url(&id) alt="Campaign Poster"/> });
                    let suggestions = sections.is_open(Section::Suggestions).then(|| {
                        let items = result
                            .marketing_strategy
                            .iter()
                            .map(|(key, value)| {
                                view! {
                                    <li>
                                        <strong>{format!("{}:", strategy_label(key))}</strong>
                                        " "
                                        {strategy_value(value)}
                                    </li>
                                }
                            })
                            .collect_view();
                        view! {
                            <div class="campaign-card__suggestions">
                                <h3>"Marketing Suggestions"</h3>
                                <ul>{items}</ul>
                            </div>
                        }
                    });
                    let blog = sections
                        .is_open(Section::Blog)
                        .then(|| view! { <div class="markdown campaign-card__blog" inner_html=markdown::to_html(&result.blog_post)></div> });
                    let chart = stats.filter(|_| sections.is_open(Section::Stats)).map(|s| {
                        let sent = s.sent_percent();
                        view! {
                            <div class="campaign-card__stats">
                                <div class="bar">
                                    <span class="bar__label">{format!("Sent {}", s.sent)}</span>
                                    <span class="bar__fill bar__fill--sent" style=format!("width: {sent:.0}%")></span>
                                </div>
                                <div class="bar">
                                    <span class="bar__label">{format!("Failed {}", s.failed)}</span>
                                    <span
                                        class="bar__fill bar__fill--failed"
                                        style=format!("width: {:.0}%", 100.0 - sent)
                                    ></span>
                                </div>
                            </div>
                        }
                    });
                    view! {
                        <div class="campaign-card__result">
                            <div class="campaign-card__toggles">{toggles}</div>
                            {poster}
                            {suggestions}
                            {blog}
                            {chart}
                        </div>
                    }
                })}
        </article>
    }
}
