//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response:
//!     → headers.rs (CSP, X-Frame-Options, HSTS, nosniff)
//!     → Sent to client
//! ```
//!
//! # Design Decisions
//! - Headers applied at the outermost layer so error pages carry them too
//! - Policy values computed once from settings at router build time
//! - HTTPS itself is terminated by infrastructure, not here

pub mod headers;
