//! Error page responses: status codes preserved, content mapped through the
//! table, including the deliberate 400→500 and 405→404 borrowing.

mod common;

use axum::http::StatusCode;

use common::{expect_page, get, test_app};

#[tokio::test]
async fn error_400_route_renders_the_500_page() {
    let response = get(test_app(), "/400").await;
    let body = expect_page(response, StatusCode::BAD_REQUEST).await;
    assert!(body.contains("Sorry, there is a problem with the service"));
}

#[tokio::test]
async fn error_401_route_renders_the_unauthorised_page() {
    let response = get(test_app(), "/401").await;
    let body = expect_page(response, StatusCode::UNAUTHORIZED).await;
    assert!(body.contains("Unauthorised"));
}

#[tokio::test]
async fn error_403_route_renders_the_forbidden_page() {
    let response = get(test_app(), "/403").await;
    let body = expect_page(response, StatusCode::FORBIDDEN).await;
    assert!(body.contains("Forbidden"));
}

#[tokio::test]
async fn unmatched_path_renders_the_404_page() {
    let response = get(test_app(), "/page-not-found").await;
    let body = expect_page(response, StatusCode::NOT_FOUND).await;
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn error_405_route_renders_the_404_page() {
    let response = get(test_app(), "/405").await;
    let body = expect_page(response, StatusCode::METHOD_NOT_ALLOWED).await;
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn error_500_route_renders_the_server_error_page() {
    let response = get(test_app(), "/500").await;
    let body = expect_page(response, StatusCode::INTERNAL_SERVER_ERROR).await;
    assert!(body.contains("Sorry, there is a problem with the service"));
}

#[tokio::test]
async fn error_pages_are_full_html_documents() {
    let response = get(test_app(), "/500").await;
    let body = expect_page(response, StatusCode::INTERNAL_SERVER_ERROR).await;

    assert!(body.contains("<!doctype html"));
    assert!(body.contains("Internal Server Error - CIR Management"));
}
