//! Order dashboard: the user's purchases and their shop's sales.

use leptos::prelude::*;

use crate::components::require_auth::{RequireAuth, use_allowed_token};
use crate::net::api;
use crate::net::types::{Order, OrderItem, ShopOrder};
use crate::state::cart::format_price;
use crate::state::orders::{ReadOrders, is_completed, mark_completed, product_sales, with_item_totals};
use crate::state::toast::use_toasts;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <Orders/>
        </RequireAuth>
    }
}

/// Loading / error / data triple for one list.
#[derive(Clone, Debug)]
enum Load<T> {
    Loading,
    Failed(String),
    Ready(Vec<T>),
}

#[component]
fn Orders() -> impl IntoView {
    let token = use_allowed_token();
    let toasts = use_toasts();

    let purchases = RwSignal::new(Load::<Order>::Loading);
    let sales = RwSignal::new(Load::<ShopOrder>::Loading);
    let read = RwSignal::new(ReadOrders::default());

    Effect::new(move || {
        let Some(current) = token.0.get() else {
            return;
        };
        purchases.set(Load::Loading);
        sales.set(Load::Loading);
        leptos::task::spawn_local(async move {
            let (mine, shop) = futures::future::join(api::fetch_orders(&current), api::fetch_shop_orders(&current)).await;
            if !token.is_current(&current) {
                return;
            }
            purchases.set(match mine {
                Ok(orders) => Load::Ready(orders),
                Err(e) => Load::Failed(e.to_string()),
            });
            sales.set(match shop {
                Ok(orders) => Load::Ready(with_item_totals(orders)),
                Err(e) => Load::Failed(e.to_string()),
            });
        });
    });

    let on_complete = move |order_id: String| {
        let current = token.get_untracked();
        leptos::task::spawn_local(async move {
            let result = api::complete_order(&current, &order_id).await;
            if !token.is_current(&current) {
                return;
            }
            match result {
                Ok(()) => {
                    toasts.success("Success", "Order marked as completed");
                    purchases.update(|p| {
                        if let Load::Ready(orders) = p {
                            mark_completed(orders, &order_id);
                        }
                    });
                }
                Err(e) => toasts.error("Failed", e.to_string()),
            }
        });
    };

    let on_mark_read = move |order_id: String| {
        read.update(|r| r.mark(&order_id));
        toasts.info("Marked read", format!("Shop order {order_id} marked as read"));
    };

    view! {
        <section class="page dashboard-page">
            <h1>"Your Purchases"</h1>
            {move || match purchases.get() {
                Load::Loading => view! { <p>"Loading orders..."</p> }.into_any(),
                Load::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Load::Ready(orders) if orders.is_empty() => {
                    view! {
                        <div class="page__empty">
                            <p>"You have no orders yet"</p>
                            <a class="btn btn--primary" href="/explore">"Start Shopping"</a>
                        </div>
                    }
                        .into_any()
                }
                Load::Ready(orders) => {
                    orders
                        .into_iter()
                        .map(|order| {
                            let done = is_completed(&order);
                            let id = order.id.clone();
                            view! {
                                <article class="order-card">
                                    <h2>{format!("Order ID: {}", order.id)}</h2>
                                    <p class="order-card__date">{format!("Date: {}", order.ordered_at)}</p>
                                    <OrderLines items=order.items.clone()/>
                                    <div class="order-card__total">
                                        <span>"Total"</span>
                                        <span>{format!("Rs {}", format_price(order.total_amount))}</span>
                                    </div>
                                    <button
                                        class="btn btn--primary"
                                        disabled=done
                                        on:click=move |_| on_complete(id.clone())
                                    >
                                        {if done { "Completed" } else { "Mark as Complete" }}
                                    </button>
                                </article>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}

            <h1>"Your Sales"</h1>
            {move || match sales.get() {
                Load::Loading => view! { <p>"Loading sales..."</p> }.into_any(),
                Load::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Load::Ready(orders) if orders.is_empty() => {
                    view! { <p class="page__empty">"No orders for your shop yet"</p> }.into_any()
                }
                Load::Ready(orders) => {
                    let summary = product_sales(&orders);
                    view! {
                        {orders
                            .into_iter()
                            .map(|order| {
                                let id = order.order_id.clone();
                                let can_mark = {
                                    let order = order.clone();
                                    move || read.with(|r| r.can_mark(&order))
                                };
                                let can_mark_label = can_mark.clone();
                                view! {
                                    <article class="order-card">
                                        <h2>{format!("Order ID: {}", order.order_id)}</h2>
                                        <p class="order-card__date">{format!("Date: {}", order.ordered_at)}</p>
                                        <OrderLines items=order.items.clone()/>
                                        <div class="order-card__total">
                                            <span>"Total"</span>
                                            <span>{format!("Rs {}", format_price(order.total_amount))}</span>
                                        </div>
                                        <button
                                            class="btn"
                                            disabled=move || !can_mark()
                                            on:click=move |_| on_mark_read(id.clone())
                                        >
                                            {move || if can_mark_label() { "Mark as Read" } else { "Read" }}
                                        </button>
                                    </article>
                                }
                            })
                            .collect_view()}
                        <h2>"Product Sales Analysis"</h2>
                        <div class="dashboard-page__sales">
                            {summary
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <div class="sales-card">
                                            <h3>{s.name}</h3>
                                            <p>{format!("Quantity Sold: {}", s.quantity)}</p>
                                            <p>{format!("Total Revenue: Rs {}", format_price(s.amount))}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn OrderLines(items: Vec<OrderItem>) -> impl IntoView {
    view! {
        <ul class="order-card__lines">
            {items
                .into_iter()
                .map(|it| {
                    view! {
                        <li>
                            <span>{format!("{} x {}", it.product_name, it.quantity)}</span>
                            <span>{format!("Rs {}", format_price(it.amount))}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
