//! Form validation.
//!
//! # Design Decisions
//! - Validation is a pure function: raw submission → form with an error map
//! - Error messages are attached per field, first message wins in the UI
//! - Panel helpers turn the error map into design-system error summaries

pub mod panel;
pub mod validation_version;

pub use validation_version::{ValidationVersionForm, ValidationVersionInput, ENTER_A_NUMBER};
