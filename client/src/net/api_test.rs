use super::*;
use crate::net::types::Shop;

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(500).to_string(), "request failed with status 500");
}

#[test]
fn rejected_error_displays_backend_message_verbatim() {
    assert_eq!(ApiError::Rejected("Invalid credentials".to_owned()).to_string(), "Invalid credentials");
}

#[test]
fn unavailable_error_mentions_server() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn error_body_prefers_message_field() {
    assert_eq!(
        error_from_body(400, r#"{"status": false, "message": "Shop not found"}"#),
        ApiError::Rejected("Shop not found".to_owned())
    );
}

#[test]
fn error_body_reads_fastapi_detail() {
    assert_eq!(
        error_from_body(401, r#"{"detail": "Invalid token"}"#),
        ApiError::Rejected("Invalid token".to_owned())
    );
}

#[test]
fn error_body_without_message_falls_back_to_status() {
    assert_eq!(error_from_body(502, "Bad Gateway"), ApiError::Status(502));
    assert_eq!(error_from_body(500, r#"{"message": ""}"#), ApiError::Status(500));
}

#[test]
fn decode_reply_returns_payload_on_success() {
    #[derive(serde::Deserialize)]
    struct Payload {
        data: Shop,
    }
    let body = r#"{"status": true, "data": {"_id": "s1", "shop_name": "Threads"}}"#;
    let payload: Payload = decode_reply(body, "Shop not found").unwrap();
    assert_eq!(payload.data.shop_name, "Threads");
}

#[test]
fn decode_reply_maps_status_false_to_rejected() {
    let body = r#"{"status": false, "message": "Cart is empty"}"#;
    let err = decode_reply::<serde_json::Value>(body, "Checkout failed").unwrap_err();
    assert_eq!(err, ApiError::Rejected("Cart is empty".to_owned()));
}

#[test]
fn decode_reply_uses_fallback_without_message() {
    let err = decode_reply::<serde_json::Value>(r#"{"status": false}"#, "Login failed.").unwrap_err();
    assert_eq!(err, ApiError::Rejected("Login failed.".to_owned()));
}

#[test]
fn decode_reply_reports_malformed_json() {
    let err = decode_reply::<serde_json::Value>("<html>", "x").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn endpoint_name_hides_token_segments() {
    assert_eq!(endpoint_name(&endpoints::orders("secret")), "orders");
    assert_eq!(endpoint_name(&endpoints::toggle_like("secret", "p1")), "toggle_like");
    assert_eq!(endpoint_name(&endpoints::cart("secret")), "get_cart");
}

#[test]
fn poster_url_points_at_api_base() {
    assert_eq!(poster_url("p1"), format!("{}/product-poster/p1", crate::config::api_base()));
}
