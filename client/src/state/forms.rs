//! Validation for the account, shop and product forms.
//!
//! Checks run before any request is sent; the backend still validates, and
//! its message is shown when it refuses.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{ProductForm, ProfileUpdate, ShopForm, UserDetails};

pub const LOGIN_REQUIRED: &str = "Both username and password are required.";
pub const SIGNUP_REQUIRED: &str = "All fields are required.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";

/// Both login fields must be filled in.
///
/// # Errors
///
/// Returns [`LOGIN_REQUIRED`] when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(LOGIN_REQUIRED);
    }
    Ok(())
}

/// Every signup field is required and the passwords must match.
///
/// # Errors
///
/// Returns [`SIGNUP_REQUIRED`] or [`PASSWORD_MISMATCH`].
pub fn validate_signup(name: &str, email: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() || confirm.is_empty() {
        return Err(SIGNUP_REQUIRED);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(())
}

/// Shop name and contact email are required; the email must look like one.
///
/// # Errors
///
/// Returns the message for the first invalid field.
pub fn validate_shop(form: &ShopForm) -> Result<(), &'static str> {
    if form.shop_name.trim().is_empty() {
        return Err("Shop name is required.");
    }
    let email = form.contact_email.trim();
    if email.is_empty() {
        return Err("Contact email is required.");
    }
    if !email.contains('@') {
        return Err("Contact email is not valid.");
    }
    Ok(())
}

/// Name and price are required; price and quantity must be non-negative numbers.
///
/// # Errors
///
/// Returns the message for the first invalid field.
pub fn validate_product(form: &ProductForm) -> Result<(), &'static str> {
    if form.product_name.trim().is_empty() {
        return Err("Product name is required.");
    }
    match form.price.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => {}
        _ => return Err("Price must be a valid number."),
    }
    let quantity = form.quantity.trim();
    if !quantity.is_empty() && quantity.parse::<u32>().is_err() {
        return Err("Quantity must be a whole number.");
    }
    Ok(())
}

/// Editable profile fields prefilled from the loaded profile.
pub fn profile_update(details: &UserDetails) -> ProfileUpdate {
    ProfileUpdate {
        name: details.name.clone(),
        phone_number: details.phone_number.clone(),
        address: details.address.clone(),
    }
}
