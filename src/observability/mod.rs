//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; JSON lines in deployed environments
//! - Request IDs flow through every log record inside the trace span
//! - The health probes are excluded from per-request logging

pub mod logging;
