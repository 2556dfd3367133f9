//! REST API helpers for communicating with the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! screen behavior (inline message, toast) without crashing hydration. The
//! backend's `{ status: false, message }` replies become
//! [`ApiError::Rejected`] carrying the backend's message verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::Deserialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::endpoints;
#[cfg(any(test, feature = "hydrate"))]
use super::endpoints::RequestSpec;
use super::types::{
    CampaignResult, CartItem, ChatEntry, ImageRequest, LoginRequest, Order, Product, ProductForm, ProfileUpdate,
    Shop, ShopForm, ShopOrder, SignupRequest, Trend, TrendsRequest, UserDetails,
};

/// File attached to a multipart upload.
#[cfg(feature = "hydrate")]
pub type Upload = web_sys::File;
/// File attached to a multipart upload (no files outside the browser).
#[cfg(not(feature = "hydrate"))]
pub type Upload = ();

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// Non-2xx response without a usable message.
    #[error("{}", status_failed_message(*.0))]
    Status(u16),
    /// The backend answered `status: false`.
    #[error("{0}")]
    Rejected(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

fn status_failed_message(status: u16) -> String {
    format!("request failed with status {status}")
}

/// Pick the most useful message from a non-2xx body (`message` or FastAPI's `detail`).
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(status: u16, body: &str) -> ApiError {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let message = parsed.as_ref().and_then(|v| {
        v.get("message")
            .or_else(|| v.get("detail"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
    });
    match message {
        Some(message) if !message.is_empty() => ApiError::Rejected(message),
        _ => ApiError::Status(status),
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// First path segment, used to name a call in logs without leaking the token.
#[cfg(any(test, feature = "hydrate"))]
fn endpoint_name(spec: &RequestSpec) -> &str {
    spec.path.trim_start_matches('/').split('/').next().unwrap_or_default()
}

#[cfg(feature = "hydrate")]
fn build_request(spec: &RequestSpec, files: &[(&'static str, Upload)]) -> Result<gloo_net::http::Request, ApiError> {
    use super::endpoints::{Body, Method};
    use gloo_net::http::Request;

    let url = spec.url(&crate::config::api_base());
    let mut builder = match spec.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    if !spec.query.is_empty() {
        builder = builder.query(spec.query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    if let Some(token) = &spec.bearer {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    let network = |e: gloo_net::Error| ApiError::Network(e.to_string());
    match &spec.body {
        Body::Empty => builder.build().map_err(network),
        Body::Json(value) => builder.json(value).map_err(network),
        Body::Form(fields) => {
            let js = |_| ApiError::Network("could not build form data".to_owned());
            let form = web_sys::FormData::new().map_err(js)?;
            for (key, value) in fields {
                form.append_with_str(key, value).map_err(js)?;
            }
            for (key, file) in files {
                form.append_with_blob_and_filename(key, file, &file.name()).map_err(js)?;
            }
            builder.body(form).map_err(network)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send(spec: &RequestSpec, files: Vec<(&'static str, Upload)>) -> Result<gloo_net::http::Response, ApiError> {
    let request = build_request(spec, &files)?;
    let resp = request.send().await.map_err(|e| {
        log::warn!("api: {:?} {} failed: {e}", spec.method, endpoint_name(spec));
        ApiError::Network(e.to_string())
    })?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    log::warn!("api: {:?} {} returned {status}", spec.method, endpoint_name(spec));
    let body = resp.text().await.unwrap_or_default();
    Err(error_from_body(status, &body))
}

/// Send `spec` and decode an enveloped JSON reply.
#[cfg(feature = "hydrate")]
async fn call<T: DeserializeOwned>(spec: RequestSpec, fallback: &str) -> Result<T, ApiError> {
    call_with_files(spec, Vec::new(), fallback).await
}

#[cfg(feature = "hydrate")]
async fn call_with_files<T: DeserializeOwned>(
    spec: RequestSpec,
    files: Vec<(&'static str, Upload)>,
    fallback: &str,
) -> Result<T, ApiError> {
    let resp = send(&spec, files).await?;
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    decode_reply(&text, fallback)
}

/// Decode `{ status, message, ...payload }`, mapping `status: false` to [`ApiError::Rejected`].
#[cfg(any(test, feature = "hydrate"))]
fn decode_reply<T: serde::de::DeserializeOwned>(text: &str, fallback: &str) -> Result<T, ApiError> {
    let envelope: super::types::Envelope =
        serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope.check(fallback).map_err(ApiError::Rejected)?;
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[cfg(feature = "hydrate")]
#[derive(Deserialize)]
struct Message {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(feature = "hydrate")]
impl Message {
    fn or(self, fallback: &str) -> String {
        self.message.unwrap_or_else(|| fallback.to_owned())
    }
}

// =============================================================================
// ACCOUNT
// =============================================================================

/// Exchange credentials for a session token via `POST /login`.
///
/// # Errors
///
/// Returns the backend's message when the credentials are rejected.
pub async fn login(request: &LoginRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct Token {
            token: String,
        }
        let body: Token = call(endpoints::login(request), "Login failed.").await?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoints::login(request);
        Err(ApiError::Unavailable)
    }
}

/// Register an account via `POST /signup`. Returns the backend's message.
///
/// # Errors
///
/// Returns the backend's message when registration is refused.
pub async fn signup(request: &SignupRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: Message = call(endpoints::signup(request), "Signup failed.").await?;
        Ok(body.or("User registered successfully"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoints::signup(request);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the signed-in user's profile.
///
/// # Errors
///
/// Returns an [`ApiError`] when the token is invalid or the request fails.
pub async fn fetch_user_details(token: &str) -> Result<UserDetails, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: Data<UserDetails> = call(endpoints::user_details(token), "Could not load profile").await?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Save profile edits. Returns the backend's message.
///
/// # Errors
///
/// Returns an [`ApiError`] when the update is rejected.
pub async fn update_profile(token: &str, update: &ProfileUpdate) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: Message = call(endpoints::edit_profile(token, update), "Update failed").await?;
        Ok(body.or("Profile updated successfully"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, update);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// Fetch every product visible to the user.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn fetch_all_products(token: &str) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: Data<Vec<Product>> = call(endpoints::all_products(token), "Could not load products").await?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Search the catalog.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn search_products(token: &str, query: &str) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: Data<Vec<Product>> = call(endpoints::search_products(token, query), "Search failed").await?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, query);
        Err(ApiError::Unavailable)
    }
}

/// Like or unlike a product. Returns the backend's message.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn toggle_like(token: &str, product_id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: Message = call(endpoints::toggle_like(token, product_id), "Could not update like").await?;
        Ok(body.or("Like updated"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, product_id);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// CART + ORDERS
// =============================================================================

/// Add `quantity` of a product to the cart.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn add_to_cart(token: &str, product_id: &str, quantity: u32) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: Message = call(endpoints::add_to_cart(token, product_id, quantity), "Could not add to cart").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, product_id, quantity);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the cart contents.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn fetch_cart(token: &str) -> Result<Vec<CartItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct Cart {
            #[serde(default)]
            cart: Vec<CartItem>,
        }
        let body: Cart = call(endpoints::cart(token), "Could not load cart").await?;
        Ok(body.cart)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Remove a product from the cart.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn remove_from_cart(token: &str, product_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: Message = call(endpoints::remove_from_cart(token, product_id), "Could not remove item").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, product_id);
        Err(ApiError::Unavailable)
    }
}

/// Turn the cart into an order.
///
/// # Errors
///
/// Returns an [`ApiError`] when checkout is refused.
pub async fn checkout(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: Message = call(endpoints::checkout(token), "Checkout failed").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the user's own orders.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or no orders exist.
pub async fn fetch_orders(token: &str) -> Result<Vec<Order>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct Orders {
            orders: Vec<Order>,
        }
        let body: Orders = call(endpoints::orders(token), "Could not load orders").await?;
        Ok(body.orders)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch orders that include items from the user's shop.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or no orders exist.
pub async fn fetch_shop_orders(token: &str) -> Result<Vec<ShopOrder>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct Orders {
            orders: Vec<ShopOrder>,
        }
        let body: Orders = call(endpoints::shop_orders(token), "Could not load shop orders").await?;
        Ok(body.orders)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Mark a shop order as completed.
///
/// # Errors
///
/// Returns an [`ApiError`] when the order cannot be completed.
pub async fn complete_order(token: &str, order_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: Message = call(endpoints::complete_order(token, order_id), "Could not complete order").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, order_id);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// SHOP
// =============================================================================

/// Fetch the user's shop.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] when the user has no shop yet.
pub async fn fetch_shop(token: &str) -> Result<Shop, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: Data<Shop> = call(endpoints::shop(token), "Shop not found").await?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Create or update the user's shop, optionally replacing its banner.
///
/// # Errors
///
/// Returns an [`ApiError`] when the backend rejects the form.
pub async fn save_shop(token: &str, form: &ShopForm, exists: bool, banner: Option<Upload>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let files = banner.map(|f| ("shop_banner", f)).into_iter().collect();
        let _: Message =
            call_with_files(endpoints::save_shop(token, form, exists), files, "Could not save shop").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, form, exists, banner);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the products listed by the user's shop.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the user has no shop.
pub async fn fetch_shop_products(token: &str) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: Data<Vec<Product>> = call(endpoints::shop_products(token), "Could not load products").await?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Add a product, or edit `editing` when set, optionally with a new image.
///
/// # Errors
///
/// Returns an [`ApiError`] when the backend rejects the form.
pub async fn save_product(
    token: &str,
    form: &ProductForm,
    editing: Option<&str>,
    image: Option<Upload>,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let files = image.map(|f| ("product_image", f)).into_iter().collect();
        let _: Message =
            call_with_files(endpoints::save_product(token, form, editing), files, "Could not save product").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, form, editing, image);
        Err(ApiError::Unavailable)
    }
}

/// Delete one of the shop's products.
///
/// # Errors
///
/// Returns an [`ApiError`] when the product cannot be deleted.
pub async fn delete_product(token: &str, product_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: Message = call(endpoints::delete_product(token, product_id), "Could not delete product").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, product_id);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// MARKETING
// =============================================================================

/// Whether a campaign already ran for the product.
///
/// The status endpoint answers `status: false` for "not done", so that reply
/// is a normal `Ok(false)` rather than an error.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request itself fails.
pub async fn campaign_done(product_id: &str) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(&endpoints::marketing_status(product_id), Vec::new()).await?;
        let envelope: super::types::Envelope = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.status)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        Err(ApiError::Unavailable)
    }
}

/// Kick off a campaign; the backend runs it in the background.
///
/// # Errors
///
/// Returns an [`ApiError`] when the campaign cannot start.
pub async fn start_campaign(product_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: Message = call(endpoints::start_campaign(product_id), "Could not start campaign").await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the finished campaign for a product.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] while no result exists yet.
pub async fn fetch_campaign_result(product_id: &str) -> Result<CampaignResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct Campaign {
            campaign_result: CampaignResult,
        }
        let body: Campaign = call(endpoints::campaign_result(product_id), "No campaign found").await?;
        Ok(body.campaign_result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        Err(ApiError::Unavailable)
    }
}

/// URL of the generated campaign poster, usable directly as an `<img>` source.
pub fn poster_url(product_id: &str) -> String {
    endpoints::product_poster(product_id).url(&crate::config::api_base())
}

// =============================================================================
// DESIGN GENERATOR
// =============================================================================

/// Look up current trends for the chosen outfit.
///
/// # Errors
///
/// Returns an [`ApiError`] when the lookup fails.
pub async fn fetch_trends(token: &str, request: &TrendsRequest) -> Result<Vec<Trend>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct Trends {
            trends: Vec<Trend>,
        }
        let body: Data<Trends> = call(endpoints::trends(token, request), "Failed to fetch trends").await?;
        Ok(body.data.trends)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}

/// Generate a design image and return a browser object URL for it.
///
/// # Errors
///
/// Returns an [`ApiError`] when generation fails.
pub async fn generate_image(token: &str, request: &ImageRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(&endpoints::image(token, request), Vec::new()).await?;
        let bytes = resp.binary().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let failed = |_| ApiError::Decode("Image generation failed".to_owned());
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(failed)?;
        web_sys::Url::create_object_url_with_blob(&blob).map_err(failed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// ASSISTANT
// =============================================================================

/// Load previous exchanges with the assistant.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails.
pub async fn fetch_chat_history(token: &str) -> Result<Vec<ChatEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct History {
            #[serde(default)]
            history: Vec<ChatEntry>,
        }
        let body: History = call(endpoints::chat_history(token), "Could not load history").await?;
        Ok(body.history)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Ask the assistant a question, optionally allowing web search.
///
/// # Errors
///
/// Returns an [`ApiError`] when the assistant cannot answer.
pub async fn ask_assistant(token: &str, question: &str, search: bool) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct Answer {
            answer: String,
        }
        let body: Answer = call(endpoints::ask(token, question, search), "No answer").await?;
        Ok(body.answer)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, question, search);
        Err(ApiError::Unavailable)
    }
}
