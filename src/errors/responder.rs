//! Error responder middleware.
//!
//! Sits above the route table and rewrites any outgoing response whose
//! status appears in the content table into a full HTML error page. Handler
//! aborts, the 404 fallback, method-not-allowed responses and panics (mapped
//! to 500 by the panic guard below this layer) all funnel through here, so
//! no raw status or stack trace ever reaches the client.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use tera::Context;

use crate::errors::content::{content_for, ErrorContent};
use crate::http::server::AppState;

/// Replace table-listed error responses with their rendered page.
pub async fn error_pages(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let url = request.uri().to_string();
    let response = next.run(request).await;

    let status = response.status();
    let Some(content) = content_for(status) else {
        return response;
    };

    log_error(status, &url);

    let body = match render(&state, content) {
        Ok(body) => body,
        Err(error) => {
            tracing::error!(%error, status_code = status.as_u16(), "error page render failed");
            fallback_page(content)
        }
    };

    (status, Html(body)).into_response()
}

/// One log record per handled error: warn below 500, error at or above.
fn log_error(status: StatusCode, url: &str) {
    let status_code = status.as_u16();
    if status.is_server_error() {
        tracing::error!(url, status_code, "an error has occurred");
    } else {
        tracing::warn!(url, status_code, "an error has occurred");
    }
}

fn render(state: &AppState, content: &ErrorContent) -> Result<String, crate::templates::TemplateError> {
    let mut context = Context::new();
    context.insert("page_title", content.title);
    context.insert("content", content);
    state.templates.render("errors/error.html", context)
}

/// Last-resort body when the template engine itself is the failure.
fn fallback_page(content: &ErrorContent) -> String {
    format!(
        "<!doctype html><html lang=\"en\"><head><title>{}</title></head>\
         <body><h1>{}</h1></body></html>",
        content.title, content.heading
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::content::SERVER_ERROR;

    #[test]
    fn fallback_page_carries_title_and_heading() {
        let page = fallback_page(&SERVER_ERROR);
        assert!(page.contains("Internal Server Error"));
        assert!(page.contains("Sorry, there is a problem with the service"));
    }
}
