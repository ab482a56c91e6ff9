//! Router assembly.
//!
//! The host only serves files: the static pages at `/` and the wasm bundle
//! under `/pkg`. Page behavior runs entirely in the browser.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;

#[must_use]
pub fn app(config: &SiteConfig) -> Router {
    let website = ServeDir::new(&config.website_dir).append_index_html_on_directories(true);
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(website)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
