use super::*;

fn product(id: &str, liked: bool, likes: i64) -> Product {
    Product { id: id.to_owned(), liked, like_count: likes, ..Product::default() }
}

#[test]
fn like_increments_count() {
    let mut state = CatalogState::default();
    state.replace(vec![product("p1", false, 2)]);
    state.apply_like("p1");
    assert!(state.products[0].liked);
    assert_eq!(state.products[0].like_count, 3);
}

#[test]
fn unlike_decrements_without_going_negative() {
    let mut state = CatalogState::default();
    state.replace(vec![product("p1", true, 0)]);
    state.apply_like("p1");
    assert!(!state.products[0].liked);
    assert_eq!(state.products[0].like_count, 0);
}

#[test]
fn like_for_unknown_product_is_ignored() {
    let mut state = CatalogState::default();
    state.replace(vec![product("p1", false, 1)]);
    state.apply_like("nope");
    assert_eq!(state.products[0].like_count, 1);
}

#[test]
fn blank_search_falls_back_to_full_catalog() {
    assert_eq!(search_term("   "), None);
    assert_eq!(search_term(" kurta "), Some("kurta"));
}

#[test]
fn quantity_defaults_to_one() {
    let state = CatalogState::default();
    assert_eq!(state.quantity("p1"), 1);
}

#[test]
fn quantity_follows_card_input() {
    let mut state = CatalogState::default();
    state.set_quantity("p1", "3");
    state.set_quantity("p2", "0");
    assert_eq!(state.quantity("p1"), 3);
    assert_eq!(state.quantity("p2"), 1);
}

#[test]
fn parse_quantity_clamps_to_one() {
    assert_eq!(parse_quantity(" 4 "), 4);
    assert_eq!(parse_quantity(""), 1);
    assert_eq!(parse_quantity("-2"), 1);
    assert_eq!(parse_quantity("two"), 1);
}

#[test]
fn shop_contact_lines_skip_blank_fields() {
    let shop = Shop {
        shop_name: "Threads".to_owned(),
        address: "12 Mall Road".to_owned(),
        contact_number: "  ".to_owned(),
        contact_email: "hi@threads.pk".to_owned(),
        ..Shop::default()
    };
    assert_eq!(
        shop_contact_lines(&shop),
        vec![("Address", "12 Mall Road".to_owned()), ("Email", "hi@threads.pk".to_owned())]
    );
}
