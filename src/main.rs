mod auth;
mod config;
mod proxy;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let port = config.port;
    tracing::info!(backend = %config.backend_url, assets = %config.assets_dir.display(), "host configured");

    let proxy = proxy::BackendProxy::new(&config).expect("failed to build backend client");
    let app = routes::app(&config, proxy).expect("leptos configuration failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "trendshop listening");
    axum::serve(listener, app).await.expect("server failed");
}
