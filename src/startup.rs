//! Startup initialisation.
//!
//! # Responsibilities
//! - Resolve the design-system version from package.json
//! - Load the template engine
//! - Assemble the shared application state
//!
//! # Design Decisions
//! - Fail fast: a template engine that cannot load is fatal
//! - Derived values are returned in the state, never written back into the
//!   process environment
//! - A bad or missing design-system version is logged and replaced by the
//!   pinned fallback from settings; pages must still render

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::Settings;
use crate::http::server::AppState;
use crate::templates::{TemplateEngine, TemplateError, TEMPLATE_GLOB};

/// npm package the design-system version is pinned by.
const DESIGN_SYSTEM_DEPENDENCY: &str = "@ons/design-system";

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Templates(#[from] TemplateError),
}

/// Build the application state: settings in, explicit state out.
pub fn init(settings: Settings) -> Result<AppState, StartupError> {
    let design_system_version = design_system_version(Path::new("package.json"))
        .unwrap_or_else(|| settings.design_system_version.clone());

    tracing::info!(version = %design_system_version, "Design system version resolved");

    let templates = TemplateEngine::load(TEMPLATE_GLOB, &settings, &design_system_version)?;

    Ok(AppState {
        settings: Arc::new(settings),
        templates: Arc::new(templates),
    })
}

/// Read the design-system version pinned in package.json.
///
/// The npm range prefix is stripped by keeping only digits and dots. Returns
/// `None` (after logging) when the file, the dependency, or a plausible
/// semantic version is missing.
fn design_system_version(path: &Path) -> Option<String> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::error!(%error, path = %path.display(), "package.json could not be read");
            return None;
        }
    };

    let package: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(package) => package,
        Err(error) => {
            tracing::error!(%error, "package.json could not be parsed");
            return None;
        }
    };

    let Some(pinned) = package
        .get("dependencies")
        .and_then(|deps| deps.get(DESIGN_SYSTEM_DEPENDENCY))
        .and_then(serde_json::Value::as_str)
    else {
        tracing::error!(
            dependency = DESIGN_SYSTEM_DEPENDENCY,
            "dependency is not found in package.json"
        );
        return None;
    };

    let version: String = pinned
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if version.split('.').filter(|part| !part.is_empty()).count() != 3 {
        tracing::error!(pinned, "design system version does not follow semantic versioning");
        return None;
    }

    Some(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_package_json(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("package-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).expect("write package.json");
        path
    }

    #[test]
    fn version_is_extracted_and_range_prefix_stripped() {
        let path = write_package_json(r#"{"dependencies": {"@ons/design-system": "^72.0.2"}}"#);
        assert_eq!(design_system_version(&path).as_deref(), Some("72.0.2"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_dependency_yields_none() {
        let path = write_package_json(r#"{"dependencies": {"some-other-lib": "1.0.0"}}"#);
        assert_eq!(design_system_version(&path), None);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn non_semantic_version_yields_none() {
        let path = write_package_json(r#"{"dependencies": {"@ons/design-system": "latest"}}"#);
        assert_eq!(design_system_version(&path), None);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_yields_none() {
        let path = std::env::temp_dir().join(format!("absent-{}.json", uuid::Uuid::new_v4()));
        assert_eq!(design_system_version(&path), None);
    }

    #[test]
    fn init_builds_state_with_default_settings() {
        let state = init(Settings::default()).expect("startup");
        assert!(!state.settings.design_system_version.is_empty());
    }
}
