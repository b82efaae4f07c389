//! `GET /health`

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Liveness report.
#[derive(Debug, Serialize)]
pub struct Health {
    /// Always `healthy` when the process answers.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Configured notification backend.
    pub notify: &'static str,
    /// Whether leads are forwarded to the CRM.
    pub crm: bool,
}

/// Report that the service is up and how it is wired.
pub async fn check(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        service: "leadline",
        version: env!("CARGO_PKG_VERSION"),
        notify: state.config.notify.as_str(),
        crm: state.outbound.crm.is_some(),
    })
}
