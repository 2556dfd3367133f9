use super::*;

const TOKEN: &str = "tok-1";

fn form_field<'a>(spec: &'a RequestSpec, key: &str) -> Option<&'a str> {
    match &spec.body {
        Body::Form(fields) => fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str()),
        _ => None,
    }
}

fn json_body(spec: &RequestSpec) -> &serde_json::Value {
    match &spec.body {
        Body::Json(value) => value,
        other => panic!("expected JSON body, got {other:?}"),
    }
}

#[test]
fn url_joins_base_and_path() {
    assert_eq!(cart(TOKEN).url("/api"), "/api/get_cart");
    assert_eq!(orders(TOKEN).url("http://127.0.0.1:8000"), "http://127.0.0.1:8000/orders/tok-1");
}

#[test]
fn login_posts_json_without_token() {
    let spec = login(&LoginRequest::Password { email: "a@b.com".to_owned(), password: "pw".to_owned() });
    assert_eq!(spec.method, Method::Post);
    assert_eq!(spec.path, "/login");
    assert_eq!(json_body(&spec)["email"], "a@b.com");
    assert!(spec.bearer.is_none());
}

#[test]
fn signup_posts_confirm_password() {
    let spec = signup(&SignupRequest {
        name: "Ali".to_owned(),
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        confirm_password: "pw".to_owned(),
    });
    assert_eq!(json_body(&spec)["confirm_password"], "pw");
}

#[test]
fn path_token_endpoints() {
    assert_eq!(user_details(TOKEN).path, "/get_user_details/tok-1");
    assert_eq!(all_products(TOKEN).path, "/get_all_products/tok-1");
    assert_eq!(shop(TOKEN).path, "/get_shop/tok-1");
    assert_eq!(shop_products(TOKEN).path, "/get_shop_products/tok-1");
    assert_eq!(shop_orders(TOKEN).path, "/shop_orders/tok-1");
    assert_eq!(chat_history(TOKEN).method, Method::Post);
    assert_eq!(chat_history(TOKEN).path, "/get_history/tok-1");
}

#[test]
fn token_position_inside_path() {
    assert_eq!(toggle_like(TOKEN, "p1").path, "/toggle_like/tok-1/p1");
    assert_eq!(complete_order(TOKEN, "o1").path, "/orders/o1/complete/tok-1");
    let delete = delete_product(TOKEN, "p1");
    assert_eq!(delete.method, Method::Delete);
    assert_eq!(delete.path, "/delete_product/p1/tok-1");
}

#[test]
fn search_sends_query_parameter() {
    let spec = search_products(TOKEN, "red kurta");
    assert_eq!(spec.path, "/search_product/tok-1");
    assert_eq!(spec.query, vec![("query", "red kurta".to_owned())]);
}

#[test]
fn cart_uses_query_token() {
    let spec = cart(TOKEN);
    assert_eq!(spec.method, Method::Get);
    assert_eq!(spec.query, vec![("token", TOKEN.to_owned())]);

    let remove = remove_from_cart(TOKEN, "p1");
    assert_eq!(remove.method, Method::Delete);
    assert_eq!(remove.query, vec![("token", TOKEN.to_owned()), ("product_id", "p1".to_owned())]);
}

#[test]
fn add_to_cart_and_checkout_use_form_token() {
    let add = add_to_cart(TOKEN, "p1", 3);
    assert_eq!(form_field(&add, "token"), Some(TOKEN));
    assert_eq!(form_field(&add, "product_id"), Some("p1"));
    assert_eq!(form_field(&add, "quantity"), Some("3"));

    let checkout = checkout(TOKEN);
    assert_eq!(checkout.path, "/checkout");
    assert_eq!(form_field(&checkout, "token"), Some(TOKEN));
}

#[test]
fn save_shop_switches_between_create_and_edit() {
    let form = ShopForm { shop_name: "Threads".to_owned(), ..ShopForm::default() };
    let create = save_shop(TOKEN, &form, false);
    assert_eq!((create.method, create.path.as_str()), (Method::Post, "/create_shop"));
    let edit = save_shop(TOKEN, &form, true);
    assert_eq!((edit.method, edit.path.as_str()), (Method::Put, "/edit_shop"));
    assert_eq!(form_field(&edit, "token"), Some(TOKEN));
    assert_eq!(form_field(&edit, "shop_name"), Some("Threads"));
}

#[test]
fn save_product_switches_between_add_and_edit() {
    let form = ProductForm { product_name: "Kurta".to_owned(), price: "10".to_owned(), ..ProductForm::default() };
    let add = save_product(TOKEN, &form, None);
    assert_eq!((add.method, add.path.as_str()), (Method::Post, "/add_product"));
    let edit = save_product(TOKEN, &form, Some("p9"));
    assert_eq!((edit.method, edit.path.as_str()), (Method::Put, "/edit_product/p9"));
    assert_eq!(form_field(&edit, "price"), Some("10"));
}

#[test]
fn profile_and_chat_send_token_in_json() {
    let update = ProfileUpdate { name: "Ali".to_owned(), ..ProfileUpdate::default() };
    let spec = edit_profile(TOKEN, &update);
    assert_eq!(spec.method, Method::Put);
    assert_eq!(json_body(&spec)["token"], TOKEN);
    assert_eq!(json_body(&spec)["name"], "Ali");

    let ask = ask(TOKEN, "what is trending?", true);
    assert_eq!(json_body(&ask)["token"], TOKEN);
    assert_eq!(json_body(&ask)["search"], true);
}

#[test]
fn design_generator_uses_bearer_header() {
    let request = TrendsRequest {
        gender: "female".to_owned(),
        dress_type: "Saree".to_owned(),
        occasion: "Wedding".to_owned(),
        region: "Pakistan".to_owned(),
    };
    let spec = trends(TOKEN, &request);
    assert_eq!(spec.bearer.as_deref(), Some(TOKEN));
    assert_eq!(json_body(&spec)["region"], "Pakistan");

    let image = image(
        TOKEN,
        &ImageRequest {
            dress_type: "Saree".to_owned(),
            trend_description: "Pastel".to_owned(),
            gender: "female".to_owned(),
            occasion: "Wedding".to_owned(),
        },
    );
    assert_eq!(image.bearer.as_deref(), Some(TOKEN));
}

#[test]
fn marketing_endpoints_are_keyed_by_product() {
    assert_eq!(marketing_status("p1").path, "/marketing-status/p1");
    assert_eq!(start_campaign("p1").method, Method::Post);
    assert_eq!(campaign_result("p1").path, "/check-result/p1");
    assert_eq!(product_poster("p1").url("/api"), "/api/product-poster/p1");
}

#[test]
fn asset_urls() {
    assert_eq!(product_image_url("a.png"), "/assets/products_images/a.png");
    assert_eq!(shop_banner_url("b.png"), "/assets/shops_images/b.png");
}
