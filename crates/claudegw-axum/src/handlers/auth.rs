//! Login handler.

use axum::Json;
use axum::extract::State;
use claudegw_core::SessionCredential;
use tracing::{info, warn};

use crate::dto::{LoginRequest, LoginResponse};
use crate::error::HttpError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Install a new provider handle built from the given session key.
///
/// The expiry is parsed and the handle constructed before anything is
/// swapped, so a failed login leaves the previous handle in place.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let credential = SessionCredential::parse(req.session_key, &req.expires).map_err(|e| {
        warn!(error = %e, "Rejected login with malformed expiry");
        HttpError::BadRequest(e.to_string())
    })?;
    let expires = credential.expires();

    let handle = state.factory.connect(credential)?;
    state.sessions.replace(handle).await;

    info!(%expires, "Authenticated with claude.ai");
    Ok(Json(LoginResponse::new(expires)))
}
