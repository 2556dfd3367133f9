use super::*;

fn item(id: &str, price: f64, qty: i64) -> CartItem {
    CartItem {
        id: id.to_owned(),
        product_name: format!("product {id}"),
        description: String::new(),
        price,
        ordered_quantity: qty,
        product_image: None,
    }
}

#[test]
fn total_multiplies_price_by_quantity() {
    let cart = CartState::with_items(vec![item("a", 10.0, 2), item("b", 2.5, 4)]);
    assert!((cart.total() - 30.0).abs() < f64::EPSILON);
}

#[test]
fn empty_cart_totals_zero() {
    let cart = CartState::default();
    assert!(cart.is_empty());
    assert!(cart.total().abs() < f64::EPSILON);
}

#[test]
fn remove_is_guarded_while_in_flight() {
    let mut cart = CartState::with_items(vec![item("a", 1.0, 1)]);
    assert!(cart.begin_remove("a"));
    assert!(!cart.begin_remove("a"));
    assert!(cart.is_removing("a"));
}

#[test]
fn successful_remove_drops_line() {
    let mut cart = CartState::with_items(vec![item("a", 1.0, 1), item("b", 1.0, 1)]);
    cart.begin_remove("a");
    cart.finish_remove("a", true);
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].id, "b");
    assert!(!cart.is_removing("a"));
}

#[test]
fn failed_remove_keeps_line() {
    let mut cart = CartState::with_items(vec![item("a", 1.0, 1)]);
    cart.begin_remove("a");
    cart.finish_remove("a", false);
    assert_eq!(cart.items.len(), 1);
    assert!(!cart.is_removing("a"));
}

#[test]
fn format_price_uses_two_decimals() {
    assert_eq!(format_price(12.5), "12.50");
    assert_eq!(format_price(0.0), "0.00");
}
