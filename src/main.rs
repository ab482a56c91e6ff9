mod config;
mod routes;

use config::{ConfigError, SiteConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt::init();

    let config = SiteConfig::from_env()?;
    if !config.pkg_dir.is_dir() {
        tracing::warn!(pkg_dir = %config.pkg_dir.display(), "wasm bundle missing; pages will load without behavior");
    }

    let app = routes::app(&config);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|source| StartupError::Bind { port, source })?;

    tracing::info!(%port, website_dir = %config.website_dir.display(), "launchpad listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
