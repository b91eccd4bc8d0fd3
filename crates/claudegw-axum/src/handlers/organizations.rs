//! Organization handlers.

use axum::Json;
use claudegw_core::Organization;
use tracing::debug;

use crate::error::HttpError;
use crate::extract::Provider;

/// List organizations the session can chat in.
pub async fn list(Provider(provider): Provider) -> Result<Json<Vec<Organization>>, HttpError> {
    debug!("GET /organizations");
    Ok(Json(provider.get_organizations().await?))
}
