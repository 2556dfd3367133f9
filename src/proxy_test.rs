use super::*;

#[test]
fn upstream_url_joins_backend_and_path() {
    assert_eq!(upstream_url("http://api:8000", "get_cart", None), "http://api:8000/get_cart");
    assert_eq!(upstream_url("http://api:8000", "/orders/tok", None), "http://api:8000/orders/tok");
}

#[test]
fn upstream_url_keeps_raw_query() {
    assert_eq!(
        upstream_url("http://api:8000", "search_product/tok", Some("query=red%20kurta")),
        "http://api:8000/search_product/tok?query=red%20kurta"
    );
    assert_eq!(upstream_url("http://api:8000", "get_cart", Some("")), "http://api:8000/get_cart");
}

#[test]
fn backend_path_keeps_percent_encoding() {
    let uri = Uri::from_static("/api/search_product/tok%2Fx?query=a%3Fb");
    assert_eq!(backend_path(&uri), "/search_product/tok%2Fx");
    assert_eq!(
        upstream_url("http://api:8000", backend_path(&uri), uri.query()),
        "http://api:8000/search_product/tok%2Fx?query=a%3Fb"
    );
}

#[test]
fn backend_path_outside_prefix_is_unchanged() {
    assert_eq!(backend_path(&Uri::from_static("/healthz")), "/healthz");
}

#[test]
fn forwarded_headers_use_allowlist() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
    headers.insert(header::COOKIE, HeaderValue::from_static("g_csrf_token=x"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

    let forwarded = forwarded_headers(&headers);
    let names: Vec<&HeaderName> = forwarded.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec![&header::CONTENT_TYPE, &header::AUTHORIZATION]);
    assert_eq!(forwarded[1].1, "Bearer tok");
}

#[test]
fn endpoint_label_hides_token_segments() {
    assert_eq!(endpoint_label("get_user_details/secret-token"), "get_user_details");
    assert_eq!(endpoint_label("/checkout"), "checkout");
    assert_eq!(endpoint_label(""), "");
}

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Unreachable("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Body("eof".into()).status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn proxy_error_response_uses_backend_envelope_shape() {
    let response = ProxyError::Timeout.into_response();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[test]
fn proxy_keeps_trimmed_backend_url() {
    let config = HostConfig {
        port: 3000,
        backend_url: "http://api:8000".to_owned(),
        timeouts: crate::config::BackendTimeouts { request_secs: 5, connect_secs: 1 },
        assets_dir: "public/assets".into(),
        max_body_bytes: 1024,
    };
    let proxy = BackendProxy::new(&config).unwrap();
    assert_eq!(proxy.backend_url, "http://api:8000");
}

#[tokio::test]
async fn unreachable_backend_maps_to_bad_gateway() {
    let config = HostConfig {
        port: 3000,
        // Port 9 (discard) on localhost is closed in test environments.
        backend_url: "http://127.0.0.1:9".to_owned(),
        timeouts: crate::config::BackendTimeouts { request_secs: 5, connect_secs: 1 },
        assets_dir: "public/assets".into(),
        max_body_bytes: 1024,
    };
    let proxy = BackendProxy::new(&config).unwrap();
    let result = forward(
        State(proxy),
        Method::GET,
        Uri::from_static("/api/get_cart?token=t"),
        HeaderMap::new(),
        Bytes::new(),
    )
    .await;
    let err = result.err().unwrap();
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
}
