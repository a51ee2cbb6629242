//! Error page subsystem.
//!
//! # Data Flow
//! ```text
//! handler / fallback / panic guard produces a status code
//!     → responder.rs (middleware sees the outgoing response)
//!     → content.rs (status → ErrorContent lookup)
//!     → log at warn (<500) or error (>=500)
//!     → rendered errors/error.html, original status preserved
//! ```
//!
//! # Design Decisions
//! - A fixed lookup table, never inferred from error types
//! - 400 deliberately renders the 500 content; 405 deliberately renders the
//!   404 content; both keep their own numeric status
//! - Rendering failures degrade to a minimal hardcoded page, same status

pub mod content;
pub mod responder;

pub use content::{content_for, ErrorContent};
