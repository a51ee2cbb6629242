//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment variables
//!     → resolver.rs (RUNTIME_ENVIRONMENT → variant)
//!     → schema.rs (base Settings read from env)
//!     → resolver.rs (per-variant overrides applied)
//!     → Settings (immutable)
//!     → shared via Arc to all handlers
//! ```
//!
//! # Design Decisions
//! - Settings are read once at startup and never mutated
//! - Variants are composition, not inheritance: one base record plus an
//!   explicit override set per variant
//! - Unknown RUNTIME_ENVIRONMENT values fall back to the default variant

pub mod resolver;
pub mod schema;

pub use resolver::RuntimeEnvironment;
pub use schema::{LogFormat, Settings};
