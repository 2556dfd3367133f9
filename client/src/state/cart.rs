//! Shopping cart screen state.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use std::collections::HashSet;

use crate::net::types::CartItem;

#[derive(Clone, Debug, Default)]
pub struct CartState {
    pub items: Vec<CartItem>,
    /// Items with a removal request in flight.
    pub removing: HashSet<String>,
    pub checking_out: bool,
}

impl CartState {
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self { items, ..Self::default() }
    }

    /// Sum of `price * ordered_quantity` over all lines.
    #[allow(clippy::cast_precision_loss)]
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.price * i.ordered_quantity as f64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flag `id` as being removed. Returns `false` if already in flight.
    pub fn begin_remove(&mut self, id: &str) -> bool {
        self.removing.insert(id.to_owned())
    }

    /// Finish a removal; the line disappears only when the backend agreed.
    pub fn finish_remove(&mut self, id: &str, removed: bool) {
        self.removing.remove(id);
        if removed {
            self.items.retain(|i| i.id != id);
        }
    }

    pub fn is_removing(&self, id: &str) -> bool {
        self.removing.contains(id)
    }
}

/// Price formatted with two decimals, as shown next to totals.
pub fn format_price(amount: f64) -> String {
    format!("{amount:.2}")
}
