//! Route handlers.
//!
//! # Data Flow
//! ```text
//! wizard.rs      home → start-migration → migrating, plus health probes
//! diagnostics.rs deliberate 4xx/5xx triggers for verifying the error pages
//! ```

pub mod diagnostics;
pub mod wizard;
