//! Shared utilities for integration testing.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use tower::ServiceExt;

use cir_management_ui::config::Settings;
use cir_management_ui::http::server::HttpServer;
use cir_management_ui::startup;

/// Build the full application router with default settings.
pub fn test_app() -> Router {
    test_app_with(Settings::default())
}

/// Build the full application router with specific settings.
pub fn test_app_with(settings: Settings) -> Router {
    let state = startup::init(settings).expect("application state");
    HttpServer::build_router(state)
}

/// Send a GET request and return the response.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with an urlencoded form body.
pub async fn post_form(app: Router, path: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into a string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert status and return the body text.
pub async fn expect_page(response: Response<Body>, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    body_text(response).await
}
