use super::*;

#[test]
fn normalize_base_trims_trailing_slash() {
    assert_eq!(normalize_base("http://127.0.0.1:8000/"), "http://127.0.0.1:8000");
    assert_eq!(normalize_base("/api//"), "/api");
}

#[test]
fn normalize_base_falls_back_when_blank() {
    assert_eq!(normalize_base("   "), DEFAULT_API_BASE);
    assert_eq!(normalize_base("/"), DEFAULT_API_BASE);
}

#[test]
fn login_path_matches_guard_default() {
    assert_eq!(LOGIN_PATH, "/login");
}

#[test]
fn google_login_uri_is_host_route() {
    assert!(GOOGLE_LOGIN_URI.starts_with('/'));
}
