//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the Axum router: one explicit table of (method, path) → handler
//! - Wire up middleware (security headers, request ID, tracing, request log,
//!   error pages, panic guard, timeout)
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - The route table is built once at startup from settings; nothing is
//!   registered dynamically afterwards
//! - The error responder sits above the routes and below the request log so
//!   every handled error status leaves as a rendered page
//! - The panic guard sits below the responder: a panicking handler becomes a
//!   500 that flows through the same content table

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, Response},
    routing::get,
    Router,
};
use tera::Context;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Settings;
use crate::errors::responder;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::routes::{diagnostics, wizard};
use crate::security::headers;
use crate::templates::TemplateEngine;

/// Paths excluded from the per-request "Request received" log.
const UNLOGGED_PATHS: [&str; 2] = ["/health-check", "/status"];

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub templates: Arc<TemplateEngine>,
}

impl AppState {
    /// Render a page, mapping template failures to a bare 500 that the
    /// error responder turns into the server-error page.
    pub fn render(&self, name: &str, context: Context) -> Result<Html<String>, StatusCode> {
        match self.templates.render(name, context) {
            Ok(body) => Ok(Html(body)),
            Err(error) => {
                tracing::error!(%error, template = name, "template render failed");
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// HTTP server for the management UI.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given application state.
    pub fn new(state: AppState) -> Self {
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the router: route table first, then the middleware stack.
    pub fn build_router(state: AppState) -> Router {
        // POST / is part of the wizard (Home → StartMigration); deployments
        // that disable it answer 405 through the error table instead.
        let home = if state.settings.home_post_enabled {
            get(wizard::home).post(wizard::home_submit)
        } else {
            get(wizard::home)
        };

        let request_timeout = Duration::from_secs(state.settings.request_timeout_secs);

        let mut router = Router::new()
            .route("/", home)
            .route(
                "/start-migration",
                get(wizard::start_migration).post(wizard::start_migration_submit),
            )
            .route("/migrating", get(wizard::migrating))
            .route("/health-check", get(wizard::health))
            .route("/status", get(wizard::health))
            .route("/400", get(diagnostics::trigger_400))
            .route("/401", get(diagnostics::trigger_401))
            .route("/403", get(diagnostics::trigger_403))
            .route("/405", get(diagnostics::trigger_405))
            .route("/500", get(diagnostics::trigger_500))
            .nest_service("/static", ServeDir::new("static"))
            .fallback(not_found)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(TraceLayer::new_for_http())
                    .layer(middleware::from_fn(request_received))
                    .layer(middleware::from_fn_with_state(
                        state.clone(),
                        responder::error_pages,
                    ))
                    .layer(CatchPanicLayer::new())
                    .layer(TimeoutLayer::new(request_timeout)),
            )
            .with_state(state.clone());

        // Outermost: every response, error pages included, carries the
        // security headers.
        for layer in headers::response_header_layers(&state.settings) {
            router = router.layer(layer);
        }

        router
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Log every request except the health probes.
async fn request_received(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if !UNLOGGED_PATHS.contains(&path) {
        tracing::info!(method = %request.method(), path, "Request received");
    }
    next.run(request).await
}

/// Unmatched paths become a bare 404 for the error responder to render.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
