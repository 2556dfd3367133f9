use super::*;

fn line(product: &str, qty: i64, amount: f64) -> OrderItem {
    OrderItem { product_id: product.to_owned(), product_name: format!("{product} name"), quantity: qty, amount }
}

fn shop_order(id: &str, items: Vec<OrderItem>) -> ShopOrder {
    ShopOrder {
        order_id: id.to_owned(),
        items,
        total_amount: 0.0,
        ordered_at: "2024-05-01".to_owned(),
        status: STATUS_PENDING.to_owned(),
    }
}

#[test]
fn shop_totals_are_recomputed_from_items() {
    let orders = with_item_totals(vec![shop_order("o1", vec![line("a", 1, 10.0), line("b", 2, 5.0)])]);
    assert!((orders[0].total_amount - 15.0).abs() < f64::EPSILON);
}

#[test]
fn product_sales_groups_by_product_in_first_seen_order() {
    let orders = vec![
        shop_order("o1", vec![line("a", 1, 10.0), line("b", 2, 6.0)]),
        shop_order("o2", vec![line("a", 3, 30.0)]),
    ];
    let sales = product_sales(&orders);
    assert_eq!(sales.len(), 2);
    assert_eq!(sales[0].product_id, "a");
    assert_eq!(sales[0].quantity, 4);
    assert!((sales[0].amount - 40.0).abs() < f64::EPSILON);
    assert_eq!(sales[1].name, "b name");
}

#[test]
fn mark_completed_updates_matching_order() {
    let mut orders = vec![Order {
        id: "o1".to_owned(),
        items: vec![],
        total_amount: 0.0,
        ordered_at: String::new(),
        status: None,
    }];
    assert!(!is_completed(&orders[0]));
    mark_completed(&mut orders, "o1");
    assert!(is_completed(&orders[0]));
    mark_completed(&mut orders, "missing");
}

#[test]
fn read_orders_hide_mark_button() {
    let mut read = ReadOrders::default();
    let order = shop_order("o1", vec![]);
    assert!(read.can_mark(&order));
    read.mark("o1");
    assert!(!read.can_mark(&order));
}

#[test]
fn completed_shop_orders_cannot_be_marked() {
    let read = ReadOrders::default();
    let mut order = shop_order("o1", vec![]);
    order.status = STATUS_COMPLETED.to_owned();
    assert!(!read.can_mark(&order));
}
