//! Raw claude.ai API records and request bodies.
//!
//! Only the fields the adapter reshapes are modelled; everything else is
//! passed through as JSON.

use claudegw_core::{Organization, Project};
use serde::{Deserialize, Serialize};

/// Capability an organization needs for its chats to be usable.
pub(crate) const CHAT_CAPABILITY: &str = "chat";

/// Organization as returned by `GET /organizations`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiOrganization {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

impl ApiOrganization {
    pub fn supports_chat(&self) -> bool {
        self.capabilities.iter().any(|c| c == CHAT_CAPABILITY)
    }
}

impl From<ApiOrganization> for Organization {
    fn from(org: ApiOrganization) -> Self {
        Self {
            id: org.uuid,
            name: org.name,
        }
    }
}

/// Project as returned by `GET /organizations/{org}/projects`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiProject {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub archived_at: Option<String>,
}

impl From<ApiProject> for Project {
    fn from(project: ApiProject) -> Self {
        Self {
            id: project.uuid,
            name: project.name,
            archived_at: project.archived_at,
        }
    }
}

/// Body of `POST /organizations/{org}/projects`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateProjectBody<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub is_private: bool,
}

/// Body of `POST /organizations/{org}/chat_conversations`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateChatBody<'a> {
    pub uuid: String,
    pub name: &'a str,
    pub include_conversation_preferences: bool,
    pub project_uuid: Option<&'a str>,
}

/// Body of `POST .../chat_conversations/{chat}/completion`.
#[derive(Debug, Serialize)]
pub(crate) struct CompletionBody<'a> {
    pub prompt: &'a str,
    pub timezone: &'a str,
    pub attachments: Vec<serde_json::Value>,
    pub files: Vec<serde_json::Value>,
}

/// Body of `POST .../chat_conversations/delete_many`.
#[derive(Debug, Serialize)]
pub(crate) struct DeleteChatsBody<'a> {
    pub conversation_uuids: &'a [String],
}

/// Pull a human-readable message out of an error body.
///
/// claude.ai answers with `{"error": {"message": ...}}`; some edge proxies
/// answer with `{"error": "..."}` or `{"detail": "..."}`.
pub(crate) fn error_message(body: &serde_json::Value) -> Option<String> {
    let error = body.get("error").or_else(|| body.get("detail"))?;
    match error {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Object(map) => map
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

/// Pull the error text out of a completion stream event.
///
/// Only an `error` key marks an event as failed. When the error object has
/// no `message`, its `type` is used instead.
pub(crate) fn stream_error_message(event: &serde_json::Value) -> Option<String> {
    match event.get("error")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Object(map) => Some(
            map.get("message")
                .or_else(|| map.get("type"))
                .and_then(serde_json::Value::as_str)
                .unwrap_or("Unknown stream error")
                .to_string(),
        ),
        _ => None,
    }
}
