//! Diagnostic error triggers.
//!
//! Each endpoint deliberately aborts with one of the handled status codes so
//! the error-page table can be verified end to end, including the deliberate
//! 400→500 and 405→404 content borrowing.

use axum::http::StatusCode;

/// Simulate a bad request. Renders the 500 page with status 400.
pub async fn trigger_400() -> StatusCode {
    StatusCode::BAD_REQUEST
}

/// Simulate an unauthorized error.
pub async fn trigger_401() -> StatusCode {
    StatusCode::UNAUTHORIZED
}

/// Simulate a forbidden error.
pub async fn trigger_403() -> StatusCode {
    StatusCode::FORBIDDEN
}

/// Simulate a method-not-allowed error. Renders the 404 page with status 405.
pub async fn trigger_405() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// Simulate an internal server error.
pub async fn trigger_500() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}
