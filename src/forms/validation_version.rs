//! The start-migration form: a single required integer field.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Field name of the validation version input.
pub const VALIDATION_VERSION_FIELD: &str = "validation_version";

/// Message attached when the field is missing or not a number.
pub const ENTER_A_NUMBER: &str = "Enter a number";

/// Raw submission body of the start-migration form.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ValidationVersionInput {
    pub validation_version: Option<String>,
}

/// A validated (or failed) start-migration submission.
#[derive(Debug, Default, Clone)]
pub struct ValidationVersionForm {
    /// Parsed value, present only when the submission validated.
    pub validation_version: Option<i64>,
    /// Raw submitted text, echoed back into the re-rendered field.
    pub submitted: Option<String>,
    /// Field name → validation messages.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationVersionForm {
    /// An untouched form for the initial GET render.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate a submission. The field must be present, non-empty and parse
    /// as an integer; anything else attaches [`ENTER_A_NUMBER`] to the field.
    pub fn validate(input: ValidationVersionInput) -> Self {
        let submitted = input.validation_version;
        let parsed = submitted
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .and_then(|value| value.parse::<i64>().ok());

        let mut errors = BTreeMap::new();
        if parsed.is_none() {
            errors.insert(
                VALIDATION_VERSION_FIELD.to_string(),
                vec![ENTER_A_NUMBER.to_string()],
            );
        }

        Self {
            validation_version: parsed,
            submitted,
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
