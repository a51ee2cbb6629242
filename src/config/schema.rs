//! Settings schema definitions.
//!
//! All values have compiled defaults so the application starts with an empty
//! environment. `Settings::from_env` layers environment variables over the
//! defaults and then applies the variant overrides from the resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::resolver::RuntimeEnvironment;

/// Output format for application logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum LogFormat {
    /// Structured JSON lines, one per event.
    Json,
    /// Human-readable console output.
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "JSON"),
            LogFormat::Pretty => write!(f, "Pretty"),
        }
    }
}

/// Application settings, resolved once at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Variant this record was resolved for.
    pub environment: RuntimeEnvironment,

    /// Log output format.
    pub log_format: LogFormat,

    /// Log level name (trace, debug, info, warn, error).
    pub log_level: String,

    /// Base URL of the CDN serving design-system assets.
    pub cdn_url: String,

    /// Secret key for signed artifacts. Unused until a session layer exists.
    pub secret_key: String,

    /// Whether session cookies would carry the Secure attribute.
    pub session_cookie_secure: bool,

    /// Request timeout in seconds, enforced by the timeout layer.
    pub request_timeout_secs: u64,

    /// Fallback design-system version when package.json cannot supply one.
    pub design_system_version: String,

    /// Register POST / (redirects to the first wizard step). When disabled
    /// a POST to the home page is answered 405 through the error table.
    pub home_post_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: RuntimeEnvironment::Default,
            log_format: LogFormat::Json,
            log_level: "INFO".to_string(),
            cdn_url: "https://cdn.ons.gov.uk".to_string(),
            secret_key: String::new(),
            session_cookie_secure: false,
            request_timeout_secs: 30,
            design_system_version: "72.0.2".to_string(),
            home_post_enabled: true,
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment.
    ///
    /// Reads the environment once; later changes to the process environment
    /// are never observed.
    pub fn from_env() -> Self {
        let environment =
            RuntimeEnvironment::resolve(std::env::var("RUNTIME_ENVIRONMENT").ok().as_deref());
        Self::for_environment(environment)
    }

    /// Build settings for a specific variant, reading the base values from
    /// the environment and applying the variant's overrides.
    pub fn for_environment(environment: RuntimeEnvironment) -> Self {
        let defaults = Settings::default();

        let base = Settings {
            environment,
            log_format: env_or("LOG_FORMAT", defaults.log_format, LogFormat::parse),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            cdn_url: std::env::var("CDN_URL").unwrap_or(defaults.cdn_url),
            secret_key: std::env::var("SECRET_KEY").unwrap_or(defaults.secret_key),
            session_cookie_secure: env_or(
                "SESSION_COOKIE_SECURE",
                defaults.session_cookie_secure,
                parse_bool,
            ),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            design_system_version: defaults.design_system_version,
            home_post_enabled: defaults.home_post_enabled,
        };

        environment.overrides().apply(base)
    }
}

fn env_or<T>(key: &str, default: T, parse: impl FnOnce(&str) -> T) -> T {
    match std::env::var(key) {
        Ok(value) => parse(&value),
        Err(_) => default,
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

/// Per-variant setting overrides.
///
/// A `None` field leaves the base value untouched. This replaces the config
/// class inheritance chain of earlier renditions with explicit composition.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentOverrides {
    pub log_format: Option<LogFormat>,
    pub session_cookie_secure: Option<bool>,
}

impl EnvironmentOverrides {
    pub fn apply(self, mut base: Settings) -> Settings {
        if let Some(log_format) = self.log_format {
            base.log_format = log_format;
        }
        if let Some(secure) = self.session_cookie_secure {
            base.session_cookie_secure = secure;
        }
        base
    }
}
