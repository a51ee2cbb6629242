//! Migration wizard pages and health probes.
//!
//! The wizard holds no server-side state between steps: Home leads to
//! StartMigration on POST, StartMigration leads to Migrating once the form
//! validates, and re-renders itself with field errors otherwise.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tera::Context;

use crate::forms::panel::{error_panel, field_error};
use crate::forms::validation_version::{
    ValidationVersionForm, ValidationVersionInput, VALIDATION_VERSION_FIELD,
};
use crate::http::server::AppState;

/// Landing page.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let mut context = Context::new();
    context.insert("page_title", "CI migration process");
    state.render("home.html", context)
}

/// Start the wizard from the landing page.
pub async fn home_submit() -> Redirect {
    Redirect::to("/start-migration")
}

/// First wizard step with an untouched form.
pub async fn start_migration(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_start_migration(&state, &ValidationVersionForm::empty())
}

/// Validate the submitted version and move to the migrating step, or
/// re-render the form with its errors attached.
pub async fn start_migration_submit(
    State(state): State<AppState>,
    Form(input): Form<ValidationVersionInput>,
) -> Response {
    let form = ValidationVersionForm::validate(input);

    if form.is_valid() {
        tracing::info!(
            validation_version = form.validation_version,
            "Migration started"
        );
        return Redirect::to("/migrating").into_response();
    }

    render_start_migration(&state, &form).into_response()
}

/// Migration-in-progress page.
pub async fn migrating(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let mut context = Context::new();
    context.insert("page_title", "Migrating");
    state.render("migrating.html", context)
}

/// Health probe: empty body, 200, never logged as a received request.
pub async fn health() -> StatusCode {
    StatusCode::OK
}

fn render_start_migration(
    state: &AppState,
    form: &ValidationVersionForm,
) -> Result<Html<String>, StatusCode> {
    let mut context = Context::new();
    context.insert("page_title", "Start migration");
    context.insert("submitted", &form.submitted);
    context.insert(
        "panel_errors",
        &error_panel(&form.errors, &[VALIDATION_VERSION_FIELD]),
    );
    context.insert(
        "field_error",
        &field_error(VALIDATION_VERSION_FIELD, &form.errors),
    );
    state.render("start-migration.html", context)
}
