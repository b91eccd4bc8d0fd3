//! Health probe.

use axum::Json;
use axum::extract::State;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// Liveness plus whether a provider handle is installed.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        authenticated: state.sessions.is_authenticated().await,
    })
}
