//! Google sign-in callback.
//!
//! Google Identity Services in redirect mode POSTs the ID token as a form
//! field to this host. The host never verifies or stores it: after the
//! double-submit CSRF check it redirects to the login page with the token in
//! the URL fragment, and the login page exchanges it with the backend.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::Form;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

const CSRF_COOKIE_NAME: &str = "g_csrf_token";

#[derive(Deserialize)]
pub struct GoogleCallback {
    credential: String,
    #[serde(default)]
    g_csrf_token: Option<String>,
}

/// Both halves of Google's double-submit token must be present and equal.
pub fn csrf_matches(cookie: Option<&str>, field: Option<&str>) -> bool {
    matches!((cookie, field), (Some(c), Some(f)) if !c.is_empty() && c == f)
}

/// An ID token is three base64url segments; anything else is not forwarded.
pub fn is_id_token(credential: &str) -> bool {
    credential.split('.').count() == 3
        && credential.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'='))
}

/// Login page location carrying the credential in its fragment.
pub fn login_location(credential: &str) -> String {
    format!("{}#credential={credential}", client::config::LOGIN_PATH)
}

/// `POST /auth/google`: hand Google's credential back to the login page.
pub async fn google_callback(jar: CookieJar, Form(form): Form<GoogleCallback>) -> Response {
    let cookie = jar.get(CSRF_COOKIE_NAME).map(Cookie::value);
    if !csrf_matches(cookie, form.g_csrf_token.as_deref()) {
        tracing::warn!("google sign-in rejected: csrf token mismatch");
        return (StatusCode::BAD_REQUEST, "invalid csrf token").into_response();
    }
    if !is_id_token(&form.credential) {
        tracing::warn!("google sign-in rejected: malformed credential");
        return (StatusCode::BAD_REQUEST, "malformed credential").into_response();
    }
    Redirect::to(&login_location(&form.credential)).into_response()
}
