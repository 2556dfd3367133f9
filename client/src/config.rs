//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser talks to the storefront backend through the SSR host's `/api`
//! proxy. A different prefix (for example a direct backend origin) can be
//! baked in at build time with `TRENDSHOP_API_BASE`.
//!
//! Google sign-in is shown only when `TRENDSHOP_GOOGLE_CLIENT_ID` is set at
//! build time. Google posts the credential to [`GOOGLE_LOGIN_URI`] on the
//! host, which hands it back to the login page in the URL fragment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default API prefix served by the SSR host proxy.
pub const DEFAULT_API_BASE: &str = "/api";

/// Public route protected screens redirect to.
pub const LOGIN_PATH: &str = session::guard::LOGIN_PATH;

/// Public route shown after logging out from the header.
pub const HOME_PATH: &str = "/";

/// Host route receiving Google's credential POST.
pub const GOOGLE_LOGIN_URI: &str = "/auth/google";

/// OAuth client id for Google sign-in, if configured.
pub fn google_client_id() -> Option<&'static str> {
    option_env!("TRENDSHOP_GOOGLE_CLIENT_ID").map(str::trim).filter(|id| !id.is_empty())
}

/// API prefix for all backend calls, without a trailing slash.
pub fn api_base() -> String {
    normalize_base(option_env!("TRENDSHOP_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}
