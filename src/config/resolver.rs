//! Runtime environment resolution.
//!
//! Maps the `RUNTIME_ENVIRONMENT` discriminator onto one of three setting
//! variants. Resolution is a pure total function: unknown or missing values
//! fall back to the default variant rather than failing startup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::schema::{EnvironmentOverrides, LogFormat};

/// The configuration variant the process runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum RuntimeEnvironment {
    /// Local development, anything unrecognised.
    Default,
    /// Deployed dev and staging environments.
    Deployed,
    /// UAT and production.
    Production,
}

impl Default for RuntimeEnvironment {
    fn default() -> Self {
        RuntimeEnvironment::Default
    }
}

impl fmt::Display for RuntimeEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeEnvironment::Default => write!(f, "default"),
            RuntimeEnvironment::Deployed => write!(f, "deployed"),
            RuntimeEnvironment::Production => write!(f, "production"),
        }
    }
}

impl RuntimeEnvironment {
    /// Resolve a discriminator string to a variant.
    pub fn resolve(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("dev") | Some("staging") => RuntimeEnvironment::Deployed,
            Some("prod") => RuntimeEnvironment::Production,
            _ => RuntimeEnvironment::Default,
        }
    }

    /// Setting overrides carried by this variant.
    ///
    /// Deployed environments always log JSON regardless of `LOG_FORMAT`;
    /// production currently adds nothing on top of deployed.
    pub fn overrides(self) -> EnvironmentOverrides {
        match self {
            RuntimeEnvironment::Default => EnvironmentOverrides::default(),
            RuntimeEnvironment::Deployed | RuntimeEnvironment::Production => {
                EnvironmentOverrides {
                    log_format: Some(LogFormat::Json),
                    ..EnvironmentOverrides::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_and_staging_resolve_to_deployed() {
        assert_eq!(
            RuntimeEnvironment::resolve(Some("dev")),
            RuntimeEnvironment::Deployed
        );
        assert_eq!(
            RuntimeEnvironment::resolve(Some("staging")),
            RuntimeEnvironment::Deployed
        );
        assert_eq!(
            RuntimeEnvironment::resolve(Some("dev")),
            RuntimeEnvironment::resolve(Some("staging"))
        );
    }

    #[test]
    fn prod_resolves_to_production() {
        assert_eq!(
            RuntimeEnvironment::resolve(Some("prod")),
            RuntimeEnvironment::Production
        );
    }

    #[test]
    fn resolution_is_case_insensitive() {
        assert_eq!(
            RuntimeEnvironment::resolve(Some("PROD")),
            RuntimeEnvironment::Production
        );
        assert_eq!(
            RuntimeEnvironment::resolve(Some("Staging")),
            RuntimeEnvironment::Deployed
        );
    }

    #[test]
    fn unknown_and_missing_fall_back_to_default() {
        assert_eq!(
            RuntimeEnvironment::resolve(None),
            RuntimeEnvironment::Default
        );
        assert_eq!(
            RuntimeEnvironment::resolve(Some("anything-else")),
            RuntimeEnvironment::Default
        );
        assert_eq!(
            RuntimeEnvironment::resolve(Some("")),
            RuntimeEnvironment::Default
        );
    }

    #[test]
    fn deployed_variants_force_json_logs() {
        assert_eq!(
            RuntimeEnvironment::Deployed.overrides().log_format,
            Some(LogFormat::Json)
        );
        assert_eq!(
            RuntimeEnvironment::Production.overrides().log_format,
            Some(LogFormat::Json)
        );
        assert_eq!(
            RuntimeEnvironment::Default.overrides().log_format,
            None
        );
    }
}
