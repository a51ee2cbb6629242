//! Error summary panel helpers.
//!
//! Turns a field → messages error map into the records the design-system
//! error panel and per-field error blocks expect: an anchor to the failing
//! field plus the first message attached to it.

use std::collections::BTreeMap;

use serde::Serialize;

/// One entry of the error summary panel at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelEntry {
    /// Anchor to the field's error element, e.g. `#validation_version_error`.
    pub url: String,
    /// First message attached to the field.
    pub text: String,
}

/// Error block rendered next to a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Element id, e.g. `validation_version_error`.
    pub id: String,
    pub text: String,
}

/// Build the panel entries for an error map.
///
/// Fields named in `order` come first, in that order; remaining fields follow
/// in map order. Fields with an empty message list are skipped.
pub fn error_panel(errors: &BTreeMap<String, Vec<String>>, order: &[&str]) -> Vec<PanelEntry> {
    let mut seen: Vec<&str> = Vec::new();
    let mut entries = Vec::new();

    for field in order {
        if let Some(entry) = panel_entry(field, errors) {
            entries.push(entry);
            seen.push(field);
        }
    }

    for field in errors.keys() {
        if !seen.contains(&field.as_str()) {
            if let Some(entry) = panel_entry(field, errors) {
                entries.push(entry);
            }
        }
    }

    entries
}

fn panel_entry(field: &str, errors: &BTreeMap<String, Vec<String>>) -> Option<PanelEntry> {
    let messages = errors.get(field)?;
    let first = messages.first()?;
    Some(PanelEntry {
        url: format!("#{field}_error"),
        text: first.clone(),
    })
}

/// Build the error block for one field, if it has any messages.
pub fn field_error(field_id: &str, errors: &BTreeMap<String, Vec<String>>) -> Option<FieldError> {
    let messages = errors.get(field_id)?;
    let first = messages.first()?;
    Some(FieldError {
        id: format!("{field_id}_error"),
        text: first.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(pairs: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(field, messages)| {
                (
                    field.to_string(),
                    messages.iter().map(|m| m.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn panel_entry_links_field_anchor_to_first_message() {
        let errors = errors(&[("validation_version", &["Enter a number", "Too small"])]);
        let panel = error_panel(&errors, &[]);

        assert_eq!(
            panel,
            vec![PanelEntry {
                url: "#validation_version_error".to_string(),
                text: "Enter a number".to_string(),
            }]
        );
    }

    #[test]
    fn explicit_order_wins_over_map_order() {
        let errors = errors(&[("alpha", &["a"]), ("beta", &["b"])]);
        let panel = error_panel(&errors, &["beta", "alpha"]);

        assert_eq!(panel[0].url, "#beta_error");
        assert_eq!(panel[1].url, "#alpha_error");
    }

    #[test]
    fn fields_without_messages_are_skipped() {
        let errors = errors(&[("alpha", &[]), ("beta", &["b"])]);
        let panel = error_panel(&errors, &[]);

        assert_eq!(panel.len(), 1);
        assert_eq!(panel[0].url, "#beta_error");
    }

    #[test]
    fn field_error_builds_element_id() {
        let errors = errors(&[("validation_version", &["Enter a number"])]);
        let error = field_error("validation_version", &errors).unwrap();

        assert_eq!(error.id, "validation_version_error");
        assert_eq!(error.text, "Enter a number");
    }

    #[test]
    fn field_error_is_none_without_messages() {
        let errors = errors(&[]);
        assert_eq!(field_error("validation_version", &errors), None);
    }
}
