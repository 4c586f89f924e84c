//! Prometheus metrics wiring
//!
//! The recorder is installed once per process; handlers render the scrape
//! payload from the handle held in application state.

use axum::extract::State;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use crate::AppState;

/// Installs the global Prometheus recorder and returns its render handle
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Prometheus scrape endpoint
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Prometheus exposition text", body = String)
    ),
    tag = "observability"
)]
pub async fn render_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}
