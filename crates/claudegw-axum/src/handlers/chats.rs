//! Chat conversation handlers.

use axum::Json;
use serde_json::Value;
use tracing::debug;

use crate::dto::ChatCreate;
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, Provider};

/// Create a chat, optionally inside a project.
pub async fn create(
    Provider(provider): Provider,
    ApiPath(org_id): ApiPath<String>,
    ApiJson(req): ApiJson<ChatCreate>,
) -> Result<Json<Value>, HttpError> {
    debug!(%org_id, project = ?req.project_uuid, "POST chats");
    Ok(Json(
        provider
            .create_chat(&org_id, &req.chat_name, req.project_uuid.as_deref())
            .await?,
    ))
}

/// List chats in an organization.
pub async fn list(
    Provider(provider): Provider,
    ApiPath(org_id): ApiPath<String>,
) -> Result<Json<Value>, HttpError> {
    debug!(%org_id, "GET chats");
    Ok(Json(provider.get_chat_conversations(&org_id).await?))
}

/// Get a single chat with its messages.
pub async fn get(
    Provider(provider): Provider,
    ApiPath((org_id, chat_id)): ApiPath<(String, String)>,
) -> Result<Json<Value>, HttpError> {
    debug!(%org_id, %chat_id, "GET chat");
    Ok(Json(
        provider.get_chat_conversation(&org_id, &chat_id).await?,
    ))
}

/// Delete chats by id.
pub async fn delete(
    Provider(provider): Provider,
    ApiPath(org_id): ApiPath<String>,
    ApiJson(chat_ids): ApiJson<Vec<String>>,
) -> Result<Json<Value>, HttpError> {
    debug!(%org_id, count = chat_ids.len(), "DELETE chats");
    Ok(Json(provider.delete_chat(&org_id, &chat_ids).await?))
}
