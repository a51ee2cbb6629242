//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack, route table)
//!     → request.rs (x-request-id generation and propagation)
//!     → routes::* handlers
//!     → errors::responder (error statuses become rendered pages)
//!     → security headers attached, response sent
//! ```

pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
