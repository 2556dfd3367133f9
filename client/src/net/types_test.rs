use super::*;
use serde_json::json;

#[test]
fn envelope_check_passes_on_status_true() {
    let env: Envelope = serde_json::from_value(json!({ "status": true, "message": "ok" })).unwrap();
    assert_eq!(env.check("fallback"), Ok(()));
}

#[test]
fn envelope_check_returns_backend_message() {
    let env: Envelope = serde_json::from_value(json!({ "status": false, "message": "User not found" })).unwrap();
    assert_eq!(env.check("fallback"), Err("User not found".to_owned()));
}

#[test]
fn envelope_check_uses_fallback_without_message() {
    let env: Envelope = serde_json::from_value(json!({})).unwrap();
    assert_eq!(env.check("Login failed."), Err("Login failed.".to_owned()));
}

#[test]
fn product_deserializes_catalog_shape() {
    let product: Product = serde_json::from_value(json!({
        "_id": "p1",
        "product_name": "Kurta",
        "description": "Cotton",
        "price": 25.5,
        "product_image": "p1.png",
        "liked": true,
        "like_count": 3,
        "shop": { "_id": "s1", "shop_name": "Threads" }
    }))
    .unwrap();
    assert_eq!(product.id, "p1");
    assert!(product.liked);
    assert_eq!(product.like_count, 3);
    assert_eq!(product.shop.unwrap().shop_name, "Threads");
    assert_eq!(product.quantity, None);
}

#[test]
fn product_missing_optional_fields_defaults() {
    let product: Product = serde_json::from_value(json!({
        "_id": "p1",
        "product_name": "Kurta",
        "price": 10
    }))
    .unwrap();
    assert_eq!(product.description, "");
    assert_eq!(product.like_count, 0);
    assert!(!product.liked);
}

#[test]
fn reply_flattens_payload_next_to_envelope() {
    #[derive(Debug, serde::Deserialize)]
    struct CartPayload {
        cart: Vec<CartItem>,
    }
    let reply: Reply<CartPayload> = serde_json::from_value(json!({
        "status": true,
        "message": "Cart retrieved successfully",
        "cart": [{ "_id": "p1", "product_name": "Kurta", "price": 10.0, "ordered_quantity": 2 }]
    }))
    .unwrap();
    assert!(reply.envelope.status);
    assert_eq!(reply.payload.cart.len(), 1);
    assert_eq!(reply.payload.cart[0].ordered_quantity, 2);
}

#[test]
fn shop_order_status_defaults_to_pending() {
    let order: ShopOrder = serde_json::from_value(json!({
        "order_id": "o1",
        "items": [],
        "ordered_at": "2024-05-01"
    }))
    .unwrap();
    assert_eq!(order.status, "pending");
}

#[test]
fn trend_accepts_string_and_object() {
    let trends: Vec<Trend> = serde_json::from_value(json!([
        "Pastel sharara",
        { "dress_type": "Sherwani", "description": "Ivory sherwani with gold work" }
    ]))
    .unwrap();
    assert_eq!(trends[0].text(), "Pastel sharara");
    assert_eq!(trends[1].text(), "Ivory sherwani with gold work");
}

#[test]
fn login_request_serializes_both_variants() {
    let password = LoginRequest::Password { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(serde_json::to_value(&password).unwrap(), json!({ "email": "a@b.com", "password": "pw" }));
    let google = LoginRequest::Google { credential: "jwt".to_owned() };
    assert_eq!(serde_json::to_value(&google).unwrap(), json!({ "credential": "jwt" }));
}

#[test]
fn shop_form_prefills_from_shop() {
    let shop = Shop {
        id: "s1".to_owned(),
        shop_name: "Threads".to_owned(),
        tagline: "Made by hand".to_owned(),
        ..Shop::default()
    };
    let form = ShopForm::from_shop(&shop);
    assert_eq!(form.shop_name, "Threads");
    assert_eq!(form.fields()[5], ("tagline", "Made by hand"));
}

#[test]
fn product_form_prefills_numbers_as_text() {
    let product = Product {
        id: "p1".to_owned(),
        product_name: "Kurta".to_owned(),
        price: 12.5,
        quantity: Some(4),
        ..Product::default()
    };
    let form = ProductForm::from_product(&product);
    assert_eq!(form.price, "12.5");
    assert_eq!(form.quantity, "4");
}

#[test]
fn campaign_result_reads_strategy_map() {
    let result: CampaignResult = serde_json::from_value(json!({
        "blog_post": "# Launch",
        "target_mails": 10,
        "successfully_send_mails": 7,
        "marketing_strategy": { "target_audience": "Students" }
    }))
    .unwrap();
    assert_eq!(result.marketing_strategy["target_audience"], "Students");
}
