//! CIR Management UI
//!
//! A server-rendered management UI that walks a user through the collection
//! instrument migration workflow, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Request ──▶ security headers ─▶ request id ─▶ trace ─▶ request log
//!                                                               │
//!                                                               ▼
//!                                                        error responder
//!                                                               │
//!                                                               ▼
//!                                                  route table (http/server)
//!                                                  │
//!                ┌──────────────────┬──────────────┤
//!                ▼                  ▼              ▼
//!           routes/wizard    routes/diagnostics  /static
//!           (home, steps,    (trigger 4xx/5xx)
//!            health)
//!                │
//!                ▼
//!           forms (validate) ─▶ templates (Tera) ─▶ Response
//! ```
//!
//! Cross-cutting: config (env → `Settings`, immutable, Arc-shared),
//! observability (tracing), errors (status → page content table).

// Core subsystems
pub mod config;
pub mod http;
pub mod routes;
pub mod templates;

// Request validation
pub mod forms;

// Cross-cutting concerns
pub mod errors;
pub mod observability;
pub mod security;
pub mod startup;

pub use config::Settings;
pub use http::HttpServer;
