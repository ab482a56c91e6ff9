use super::*;
use axum::body::Body;
use axum::http::Request;
use std::fs;
use tower::ServiceExt;

fn site() -> (tempfile::TempDir, SiteConfig) {
    let root = tempfile::tempdir().unwrap();
    let website_dir = root.path().join("website");
    let pkg_dir = root.path().join("pkg");
    fs::create_dir_all(&website_dir).unwrap();
    fs::create_dir_all(&pkg_dir).unwrap();
    fs::write(website_dir.join("index.html"), "<h1>Launchpad</h1>").unwrap();
    fs::write(website_dir.join("login.html"), "<form name=\"login\"></form>").unwrap();
    fs::write(pkg_dir.join("client.js"), "export default function init() {}").unwrap();
    let config = SiteConfig { port: 0, website_dir, pkg_dir };
    (root, config)
}

async fn get_status(config: &SiteConfig, uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app(config).oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_is_ok() {
    let (_root, config) = site();
    assert_eq!(get_status(&config, "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn root_serves_index() {
    let (_root, config) = site();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app(&config).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"<h1>Launchpad</h1>");
}

#[tokio::test]
async fn pages_and_bundle_are_served() {
    let (_root, config) = site();
    assert_eq!(get_status(&config, "/login.html").await, StatusCode::OK);
    assert_eq!(get_status(&config, "/pkg/client.js").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_files_are_not_found() {
    let (_root, config) = site();
    assert_eq!(get_status(&config, "/missing.html").await, StatusCode::NOT_FOUND);
    assert_eq!(get_status(&config, "/pkg/missing.wasm").await, StatusCode::NOT_FOUND);
}
