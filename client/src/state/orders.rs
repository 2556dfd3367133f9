//! Order history for buyers and sales for shop owners.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use std::collections::HashSet;

use crate::net::types::{Order, OrderItem, ShopOrder};

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETED: &str = "completed";

/// Sum of line amounts.
pub fn items_total(items: &[OrderItem]) -> f64 {
    items.iter().map(|i| i.amount).sum()
}

/// Recompute each shop order's total from the items it contains.
pub fn with_item_totals(mut orders: Vec<ShopOrder>) -> Vec<ShopOrder> {
    for order in &mut orders {
        order.total_amount = items_total(&order.items);
    }
    orders
}

/// Whether a buyer order can still be marked complete.
pub fn is_completed(order: &Order) -> bool {
    order.status.as_deref() == Some(STATUS_COMPLETED)
}

/// Mark the buyer order `id` as completed locally.
pub fn mark_completed(orders: &mut [Order], id: &str) {
    if let Some(order) = orders.iter_mut().find(|o| o.id == id) {
        order.status = Some(STATUS_COMPLETED.to_owned());
    }
}

/// Units sold and revenue for one product across shop orders.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductSales {
    pub product_id: String,
    pub name: String,
    pub quantity: i64,
    pub amount: f64,
}

/// Aggregate shop order lines per product, in first-seen order.
pub fn product_sales(orders: &[ShopOrder]) -> Vec<ProductSales> {
    let mut sales: Vec<ProductSales> = Vec::new();
    for item in orders.iter().flat_map(|o| &o.items) {
        match sales.iter_mut().find(|s| s.product_id == item.product_id) {
            Some(entry) => {
                entry.quantity += item.quantity;
                entry.amount += item.amount;
            }
            None => sales.push(ProductSales {
                product_id: item.product_id.clone(),
                name: item.product_name.clone(),
                quantity: item.quantity,
                amount: item.amount,
            }),
        }
    }
    sales
}

/// Shop orders the owner has acknowledged this visit. Not persisted.
#[derive(Clone, Debug, Default)]
pub struct ReadOrders(HashSet<String>);

impl ReadOrders {
    pub fn mark(&mut self, order_id: &str) {
        self.0.insert(order_id.to_owned());
    }

    /// Only pending orders not yet acknowledged offer "Mark as Read".
    pub fn can_mark(&self, order: &ShopOrder) -> bool {
        order.status == STATUS_PENDING && !self.0.contains(&order.order_id)
    }
}
