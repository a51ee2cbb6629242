//! Security response headers.
//!
//! Builds the Content-Security-Policy from the configured CDN URL and the
//! analytics domains, plus the fixed framing/transport/content-type headers.
//! All of them are attached to every response via `SetResponseHeaderLayer`.

use axum::http::header::{
    HeaderName, HeaderValue, CONTENT_SECURITY_POLICY, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS,
    X_FRAME_OPTIONS,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Settings;

/// Analytics domains allowed to receive script and connect traffic.
const ANALYTICS_SOURCES: &str = "https://*.googletagmanager.com https://*.google-analytics.com";

/// One year, the conventional HSTS horizon.
pub const STRICT_TRANSPORT_SECURITY_VALUE: &str = "max-age=31536000; includeSubDomains";

pub const X_FRAME_OPTIONS_VALUE: &str = "DENY";

pub const X_CONTENT_TYPE_OPTIONS_VALUE: &str = "nosniff";

/// Assemble the Content-Security-Policy for the configured CDN.
pub fn content_security_policy(settings: &Settings) -> String {
    let cdn = settings.cdn_url.trim_end_matches('/');
    [
        format!("default-src 'self' {cdn}"),
        format!("font-src 'self' {cdn}"),
        format!("script-src 'self' {cdn} {ANALYTICS_SOURCES}"),
        format!("style-src 'self' {cdn}"),
        format!("connect-src 'self' {ANALYTICS_SOURCES}"),
        "img-src 'self' data:".to_string(),
        "frame-src 'none'".to_string(),
        "object-src 'none'".to_string(),
        "base-uri 'none'".to_string(),
        "manifest-src 'self'".to_string(),
    ]
    .join("; ")
}

/// Header layers for every response, computed once from settings.
pub fn response_header_layers(
    settings: &Settings,
) -> Vec<SetResponseHeaderLayer<HeaderValue>> {
    let csp = HeaderValue::from_str(&content_security_policy(settings))
        .unwrap_or_else(|_| HeaderValue::from_static("default-src 'self'"));

    vec![
        overriding(CONTENT_SECURITY_POLICY, csp),
        overriding(
            X_FRAME_OPTIONS,
            HeaderValue::from_static(X_FRAME_OPTIONS_VALUE),
        ),
        overriding(
            STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(STRICT_TRANSPORT_SECURITY_VALUE),
        ),
        overriding(
            X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static(X_CONTENT_TYPE_OPTIONS_VALUE),
        ),
    ]
}

fn overriding(name: HeaderName, value: HeaderValue) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, value)
}
