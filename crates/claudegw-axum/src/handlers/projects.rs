//! Project handlers.

use axum::Json;
use claudegw_core::Project;
use serde_json::Value;
use tracing::debug;

use crate::dto::{ProjectCreate, ProjectsQuery};
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, ApiQuery, Provider};

/// List projects in an organization.
pub async fn list(
    Provider(provider): Provider,
    ApiPath(org_id): ApiPath<String>,
    ApiQuery(query): ApiQuery<ProjectsQuery>,
) -> Result<Json<Vec<Project>>, HttpError> {
    debug!(%org_id, include_archived = query.include_archived, "GET projects");
    Ok(Json(
        provider
            .get_projects(&org_id, query.include_archived)
            .await?,
    ))
}

/// Create a project.
pub async fn create(
    Provider(provider): Provider,
    ApiPath(org_id): ApiPath<String>,
    ApiJson(req): ApiJson<ProjectCreate>,
) -> Result<Json<Value>, HttpError> {
    debug!(%org_id, name = %req.name, "POST projects");
    Ok(Json(
        provider
            .create_project(&org_id, &req.name, &req.description)
            .await?,
    ))
}
