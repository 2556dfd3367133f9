//! Backend DTOs for the storefront REST API.
//!
//! DESIGN
//! ======
//! The backend wraps every JSON response in a `{ status, message, ... }`
//! envelope whose payload field name varies per endpoint (`data`, `cart`,
//! `orders`, `history`, ...). Each response gets its own small struct and the
//! shared [`Envelope`] check turns `status: false` into an error message.
//! Optional backend fields default instead of failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Common `{ status, message }` envelope fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// `Ok(())` when the backend reported success, otherwise its message.
    ///
    /// # Errors
    ///
    /// Returns the backend's message (or `fallback`) when `status` is false.
    pub fn check(&self, fallback: &str) -> Result<(), String> {
        if self.status {
            Ok(())
        } else {
            Err(self.message.clone().unwrap_or_else(|| fallback.to_owned()))
        }
    }
}

/// Envelope with an arbitrary payload field flattened alongside it.
#[derive(Clone, Debug, Deserialize)]
pub struct Reply<T> {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(flatten)]
    pub payload: T,
}

/// Shop summary, both standalone and embedded in products.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub shop_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub shop_banner: Option<String>,
}

/// Product as listed in the catalog or a seller's inventory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub shop_id: Option<String>,
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub product_image: Option<String>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub shop: Option<Shop>,
}

/// Product line in the shopping cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub ordered_quantity: i64,
    #[serde(default)]
    pub product_image: Option<String>,
}

/// One product line of an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub amount: f64,
}

/// Order placed by the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub ordered_at: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Order containing items sold by the signed-in user's shop.
///
/// The backend only returns the shop's own items, so `total_amount` is
/// recomputed client-side from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShopOrder {
    pub order_id: String,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total_amount: f64,
    pub ordered_at: String,
    #[serde(default = "default_order_status")]
    pub status: String,
}

fn default_order_status() -> String {
    "pending".to_owned()
}

/// Profile of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub joining_date: String,
}

/// One question/answer exchange with the assistant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub question: String,
    #[serde(default)]
    pub response: Option<String>,
}

/// Result of a finished marketing campaign.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignResult {
    #[serde(default)]
    pub blog_post: String,
    #[serde(default)]
    pub target_mails: i64,
    #[serde(default)]
    pub successfully_send_mails: i64,
    #[serde(default)]
    pub marketing_strategy: serde_json::Map<String, serde_json::Value>,
}

/// A fashion trend suggestion; the backend returns either bare strings or
/// structured items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Trend {
    Text(String),
    Item {
        #[serde(default)]
        dress_type: Option<String>,
        #[serde(default)]
        occasion: Option<String>,
        #[serde(default)]
        gender: Option<String>,
        description: String,
    },
}

impl Trend {
    /// Text used as the trend description for image generation.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Item { description, .. } => description,
        }
    }
}

/// Request body for `POST /trends`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendsRequest {
    pub gender: String,
    pub dress_type: String,
    pub occasion: String,
    pub region: String,
}

/// Request body for `POST /image`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageRequest {
    pub dress_type: String,
    pub trend_description: String,
    pub gender: String,
    pub occasion: String,
}

/// Editable profile fields sent to `PUT /edit_profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone_number: String,
    pub address: String,
}

/// Text fields of the shop create/edit form.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ShopForm {
    pub shop_name: String,
    pub description: String,
    pub address: String,
    pub contact_number: String,
    pub contact_email: String,
    pub tagline: String,
}

impl ShopForm {
    /// Prefill from an existing shop.
    #[must_use]
    pub fn from_shop(shop: &Shop) -> Self {
        Self {
            shop_name: shop.shop_name.clone(),
            description: shop.description.clone(),
            address: shop.address.clone(),
            contact_number: shop.contact_number.clone(),
            contact_email: shop.contact_email.clone(),
            tagline: shop.tagline.clone(),
        }
    }

    /// `(name, value)` pairs in form order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("shop_name", &self.shop_name),
            ("description", &self.description),
            ("address", &self.address),
            ("contact_number", &self.contact_number),
            ("contact_email", &self.contact_email),
            ("tagline", &self.tagline),
        ]
    }
}

/// Text fields of the product add/edit form. Numbers stay as typed text until
/// validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProductForm {
    pub product_name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
}

impl ProductForm {
    /// Prefill from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_name: product.product_name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.unwrap_or_default().to_string(),
        }
    }

    /// `(name, value)` pairs in form order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("product_name", &self.product_name),
            ("description", &self.description),
            ("price", &self.price),
            ("quantity", &self.quantity),
        ]
    }
}

/// Credentials accepted by `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LoginRequest {
    Password { email: String, password: String },
    Google { credential: String },
}

/// Body of `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
