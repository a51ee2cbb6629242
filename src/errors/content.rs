//! Static content records for the handled error statuses.

use axum::http::StatusCode;
use serde::Serialize;

/// Content of one rendered error page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorContent {
    /// Page title.
    pub title: &'static str,
    /// Main heading.
    pub heading: &'static str,
    /// Body lines shown under the heading.
    pub messages: &'static [&'static str],
}

pub const UNAUTHORISED: ErrorContent = ErrorContent {
    title: "Unauthorised",
    heading: "Unauthorised",
    messages: &["You must be signed in to view this page."],
};

pub const FORBIDDEN: ErrorContent = ErrorContent {
    title: "Forbidden",
    heading: "Forbidden",
    messages: &["You do not have permission to view this page."],
};

pub const PAGE_NOT_FOUND: ErrorContent = ErrorContent {
    title: "Page not found",
    heading: "Page not found",
    messages: &[
        "If you entered a web address, check it is correct.",
        "If you pasted the web address, check you copied the entire address.",
    ],
};

pub const SERVER_ERROR: ErrorContent = ErrorContent {
    title: "Internal Server Error",
    heading: "Sorry, there is a problem with the service",
    messages: &["Try again later."],
};

/// Look up the page content for a handled status code.
///
/// 400 deliberately returns the 500 page and 405 deliberately returns the
/// 404 page; callers keep the original status on the response. Unhandled
/// statuses return `None` and pass through untouched.
pub fn content_for(status: StatusCode) -> Option<&'static ErrorContent> {
    match status.as_u16() {
        400 | 500 => Some(&SERVER_ERROR),
        401 => Some(&UNAUTHORISED),
        403 => Some(&FORBIDDEN),
        404 | 405 => Some(&PAGE_NOT_FOUND),
        _ => None,
    }
}
