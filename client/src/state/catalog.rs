//! Product catalog state for the explore screen.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::{HashMap, HashSet};

use crate::net::types::{Product, Shop};

#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub adding: HashSet<String>,
    pub liking: HashSet<String>,
    /// Quantity typed on each card; absent means 1.
    pub quantities: HashMap<String, u32>,
}

impl CatalogState {
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Quantity the next add-to-cart sends for `product_id`.
    pub fn quantity(&self, product_id: &str) -> u32 {
        self.quantities.get(product_id).copied().unwrap_or(1)
    }

    pub fn set_quantity(&mut self, product_id: &str, raw: &str) {
        self.quantities.insert(product_id.to_owned(), parse_quantity(raw));
    }

    /// Flip `liked` and adjust `like_count` once the backend accepted the toggle.
    pub fn apply_like(&mut self, product_id: &str) {
        if let Some(p) = self.products.iter_mut().find(|p| p.id == product_id) {
            p.like_count = if p.liked { (p.like_count - 1).max(0) } else { p.like_count + 1 };
            p.liked = !p.liked;
        }
    }
}

/// A blank search shows the full catalog instead of querying.
pub fn search_term(input: &str) -> Option<&str> {
    let term = input.trim();
    (!term.is_empty()).then_some(term)
}

/// Card quantity input; anything below 1 or unparsable counts as 1.
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().ok().filter(|q| *q >= 1).unwrap_or(1)
}

/// Labelled contact lines of a shop, skipping blank fields.
pub fn shop_contact_lines(shop: &Shop) -> Vec<(&'static str, String)> {
    [("Address", &shop.address), ("Phone", &shop.contact_number), ("Email", &shop.contact_email)]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| (label, value.clone()))
        .collect()
}
