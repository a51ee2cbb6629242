//! Template rendering.
//!
//! Wraps a Tera instance loaded once at startup. Every render starts from a
//! base context carrying the CDN URL and the design-system version so page
//! templates can link their stylesheets without each handler repeating it.

use tera::{Context, Tera};
use thiserror::Error;

use crate::config::Settings;

/// Glob the engine loads templates from, relative to the working directory.
pub const TEMPLATE_GLOB: &str = "templates/**/*.html";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template engine failed to initialise: {0}")]
    Init(#[source] tera::Error),
    #[error("failed to render '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },
}

/// Tera engine plus the base context shared by every page.
pub struct TemplateEngine {
    tera: Tera,
    base: Context,
}

impl TemplateEngine {
    /// Load all templates matching `glob` and fix the base context.
    pub fn load(
        glob: &str,
        settings: &Settings,
        design_system_version: &str,
    ) -> Result<Self, TemplateError> {
        let tera = Tera::new(glob).map_err(TemplateError::Init)?;

        let mut base = Context::new();
        base.insert("cdn_url", &settings.cdn_url);
        base.insert("design_system_version", design_system_version);

        Ok(Self { tera, base })
    }

    /// Render a template with the base context merged underneath `context`.
    pub fn render(&self, name: &str, context: Context) -> Result<String, TemplateError> {
        let mut merged = self.base.clone();
        merged.extend(context);
        self.tera
            .render(name, &merged)
            .map_err(|source| TemplateError::Render {
                name: name.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TemplateEngine {
        TemplateEngine::load(TEMPLATE_GLOB, &Settings::default(), "72.0.2")
            .expect("templates load")
    }

    #[test]
    fn base_context_reaches_the_page() {
        let mut context = Context::new();
        context.insert("page_title", "CI migration process");
        let html = engine().render("home.html", context).expect("render");

        assert!(html.contains("https://cdn.ons.gov.uk"));
        assert!(html.contains("72.0.2"));
    }

    #[test]
    fn unknown_template_is_a_render_error() {
        let error = engine()
            .render("no-such-page.html", Context::new())
            .unwrap_err();
        assert!(matches!(error, TemplateError::Render { .. }));
    }
}
