use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BACKEND_URL");
        std::env::remove_var("BACKEND_TIMEOUT_SECS");
        std::env::remove_var("BACKEND_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("ASSETS_DIR");
        std::env::remove_var("MAX_BODY_BYTES");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_host_env() };

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(
        cfg.timeouts,
        BackendTimeouts { request_secs: DEFAULT_BACKEND_TIMEOUT_SECS, connect_secs: DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
    assert_eq!(cfg.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
}

#[test]
fn from_env_parses_overrides() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("BACKEND_URL", "https://shop.example.test/");
        std::env::set_var("BACKEND_TIMEOUT_SECS", "5");
        std::env::set_var("BACKEND_CONNECT_TIMEOUT_SECS", "2");
        std::env::set_var("ASSETS_DIR", "/srv/assets");
        std::env::set_var("MAX_BODY_BYTES", "1024");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://shop.example.test");
    assert_eq!(cfg.timeouts, BackendTimeouts { request_secs: 5, connect_secs: 2 });
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/assets"));
    assert_eq!(cfg.max_body_bytes, 1024);

    unsafe { clear_host_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "http");
    }

    assert_eq!(HostConfig::from_env(), Err(ConfigError::InvalidPort("http".to_owned())));

    unsafe { clear_host_env() };
}

#[test]
fn unparsable_timeout_falls_back_to_default() {
    unsafe {
        clear_host_env();
        std::env::set_var("BACKEND_TIMEOUT_SECS", "soon");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_BACKEND_TIMEOUT_SECS);

    unsafe { clear_host_env() };
}

#[test]
fn backend_url_requires_http_scheme() {
    assert_eq!(
        parse_backend_url(Some("localhost:8000")),
        Err(ConfigError::InvalidBackendUrl("localhost:8000".to_owned()))
    );
    assert_eq!(parse_backend_url(Some("  ")), Ok(DEFAULT_BACKEND_URL.to_owned()));
    assert_eq!(parse_backend_url(Some("http://api:8000//")), Ok("http://api:8000".to_owned()));
}
