//! Request descriptions for every backend endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend accepts the session token in different places depending on the
//! endpoint: a path segment, a query parameter, a multipart field, a JSON body
//! field or a bearer header. That placement is part of the backend contract,
//! so it is written down exactly once here, as a pure [`RequestSpec`] per
//! endpoint. `api` executes specs in the browser; tests inspect them directly.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use serde_json::json;

use super::types::{ImageRequest, LoginRequest, ProductForm, ProfileUpdate, ShopForm, SignupRequest, TrendsRequest};

/// HTTP method of a backend call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Request body of a backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// Multipart text fields; file parts are attached by the caller.
    Form(Vec<(&'static str, String)>),
}

/// Everything needed to issue one backend request, minus file uploads.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    /// Path below the API base, starting with `/`.
    pub path: String,
    /// Query parameters, encoded by the HTTP layer.
    pub query: Vec<(&'static str, String)>,
    /// Token sent as `Authorization: Bearer ...`.
    pub bearer: Option<String>,
    pub body: Body,
}

impl RequestSpec {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), bearer: None, body: Body::Empty }
    }

    fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Body::Json(body);
        self
    }

    fn form(mut self, fields: Vec<(&'static str, String)>) -> Self {
        self.body = Body::Form(fields);
        self
    }

    /// Absolute or root-relative URL for this request under `base`.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{base}{}", self.path)
    }
}

// =============================================================================
// ACCOUNT
// =============================================================================

pub fn login(request: &LoginRequest) -> RequestSpec {
    RequestSpec::post("/login").json(json!(request))
}

pub fn signup(request: &SignupRequest) -> RequestSpec {
    RequestSpec::post("/signup").json(json!(request))
}

pub fn user_details(token: &str) -> RequestSpec {
    RequestSpec::get(format!("/get_user_details/{token}"))
}

pub fn edit_profile(token: &str, update: &ProfileUpdate) -> RequestSpec {
    RequestSpec::put("/edit_profile").json(json!({
        "token": token,
        "name": update.name,
        "phone_number": update.phone_number,
        "address": update.address,
    }))
}

// =============================================================================
// CATALOG
// =============================================================================

pub fn all_products(token: &str) -> RequestSpec {
    RequestSpec::get(format!("/get_all_products/{token}"))
}

pub fn search_products(token: &str, query: &str) -> RequestSpec {
    RequestSpec::get(format!("/search_product/{token}")).query("query", query)
}

pub fn toggle_like(token: &str, product_id: &str) -> RequestSpec {
    RequestSpec::post(format!("/toggle_like/{token}/{product_id}"))
}

// =============================================================================
// CART + ORDERS
// =============================================================================

pub fn add_to_cart(token: &str, product_id: &str, quantity: u32) -> RequestSpec {
    RequestSpec::post("/add_to_cart").form(vec![
        ("token", token.to_owned()),
        ("product_id", product_id.to_owned()),
        ("quantity", quantity.to_string()),
    ])
}

pub fn cart(token: &str) -> RequestSpec {
    RequestSpec::get("/get_cart").query("token", token)
}

pub fn remove_from_cart(token: &str, product_id: &str) -> RequestSpec {
    RequestSpec::delete("/remove_from_cart")
        .query("token", token)
        .query("product_id", product_id)
}

pub fn checkout(token: &str) -> RequestSpec {
    RequestSpec::post("/checkout").form(vec![("token", token.to_owned())])
}

pub fn orders(token: &str) -> RequestSpec {
    RequestSpec::get(format!("/orders/{token}"))
}

pub fn shop_orders(token: &str) -> RequestSpec {
    RequestSpec::get(format!("/shop_orders/{token}"))
}

pub fn complete_order(token: &str, order_id: &str) -> RequestSpec {
    RequestSpec::post(format!("/orders/{order_id}/complete/{token}"))
}

// =============================================================================
// SHOP
// =============================================================================

pub fn shop(token: &str) -> RequestSpec {
    RequestSpec::get(format!("/get_shop/{token}"))
}

/// Create the shop, or edit it when `exists`.
pub fn save_shop(token: &str, form: &ShopForm, exists: bool) -> RequestSpec {
    let spec = if exists { RequestSpec::put("/edit_shop") } else { RequestSpec::post("/create_shop") };
    spec.form(with_token_field(token, &form.fields()))
}

pub fn shop_products(token: &str) -> RequestSpec {
    RequestSpec::get(format!("/get_shop_products/{token}"))
}

/// Add a product, or edit `editing` when set.
pub fn save_product(token: &str, form: &ProductForm, editing: Option<&str>) -> RequestSpec {
    let spec = match editing {
        Some(id) => RequestSpec::put(format!("/edit_product/{id}")),
        None => RequestSpec::post("/add_product"),
    };
    spec.form(with_token_field(token, &form.fields()))
}

pub fn delete_product(token: &str, product_id: &str) -> RequestSpec {
    RequestSpec::delete(format!("/delete_product/{product_id}/{token}"))
}

fn with_token_field(token: &str, fields: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    std::iter::once(("token", token.to_owned()))
        .chain(fields.iter().map(|(k, v)| (*k, (*v).to_owned())))
        .collect()
}

// =============================================================================
// MARKETING
// =============================================================================

pub fn marketing_status(product_id: &str) -> RequestSpec {
    RequestSpec::get(format!("/marketing-status/{product_id}"))
}

pub fn start_campaign(product_id: &str) -> RequestSpec {
    RequestSpec::post(format!("/start-campaign/{product_id}"))
}

pub fn campaign_result(product_id: &str) -> RequestSpec {
    RequestSpec::get(format!("/check-result/{product_id}"))
}

pub fn product_poster(product_id: &str) -> RequestSpec {
    RequestSpec::get(format!("/product-poster/{product_id}"))
}

// =============================================================================
// DESIGN GENERATOR
// =============================================================================

pub fn trends(token: &str, request: &TrendsRequest) -> RequestSpec {
    RequestSpec::post("/trends").bearer(token).json(json!(request))
}

pub fn image(token: &str, request: &ImageRequest) -> RequestSpec {
    RequestSpec::post("/image").bearer(token).json(json!(request))
}

// =============================================================================
// ASSISTANT
// =============================================================================

pub fn chat_history(token: &str) -> RequestSpec {
    RequestSpec::post(format!("/get_history/{token}"))
}

pub fn ask(token: &str, query: &str, search: bool) -> RequestSpec {
    RequestSpec::post("/get_response").json(json!({
        "token": token,
        "query": query,
        "search": search,
    }))
}

// =============================================================================
// STATIC ASSETS
// =============================================================================

/// Public URL of an uploaded product image.
pub fn product_image_url(file_name: &str) -> String {
    format!("/assets/products_images/{file_name}")
}

/// Public URL of an uploaded shop banner.
pub fn shop_banner_url(file_name: &str) -> String {
    format!("/assets/shops_images/{file_name}")
}
