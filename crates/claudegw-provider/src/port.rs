//! Port trait implementation for `ClaudeAiClient`.
//!
//! This module implements the core-owned `ProviderPort` trait, converting
//! internal errors to `ProviderError` exactly once at the boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use claudegw_core::{
    EventStream, Organization, Project, ProviderError, ProviderPort, ProviderResult,
};
use serde_json::Value;

use crate::client::ClaudeAiClient;
use crate::error::ClaudeAiError;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ClaudeAiError` to core `ProviderError`.
pub(crate) fn map_error(err: ClaudeAiError) -> ProviderError {
    match err {
        ClaudeAiError::Api { status, message } => ProviderError::Api { status, message },
        ClaudeAiError::SessionExpired => ProviderError::SessionExpired,
        ClaudeAiError::InvalidBaseUrl(url) => {
            ProviderError::Configuration(format!("invalid base URL {url}"))
        }
        ClaudeAiError::Network(e) if e.is_decode() => ProviderError::InvalidResponse(e.to_string()),
        ClaudeAiError::Network(e) => ProviderError::Network(e.to_string()),
        ClaudeAiError::JsonParse(e) => ProviderError::InvalidResponse(e.to_string()),
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl ProviderPort for ClaudeAiClient {
    async fn get_organizations(&self) -> ProviderResult<Vec<Organization>> {
        self.organizations().await.map_err(map_error)
    }

    async fn get_projects(
        &self,
        org_id: &str,
        include_archived: bool,
    ) -> ProviderResult<Vec<Project>> {
        self.projects(org_id, include_archived)
            .await
            .map_err(map_error)
    }

    async fn create_project(
        &self,
        org_id: &str,
        name: &str,
        description: &str,
    ) -> ProviderResult<Value> {
        self.post_project(org_id, name, description)
            .await
            .map_err(map_error)
    }

    async fn create_chat(
        &self,
        org_id: &str,
        chat_name: &str,
        project_uuid: Option<&str>,
    ) -> ProviderResult<Value> {
        self.post_chat(org_id, chat_name, project_uuid)
            .await
            .map_err(map_error)
    }

    async fn get_chat_conversations(&self, org_id: &str) -> ProviderResult<Value> {
        self.chat_conversations(org_id).await.map_err(map_error)
    }

    async fn get_chat_conversation(&self, org_id: &str, chat_id: &str) -> ProviderResult<Value> {
        self.chat_conversation(org_id, chat_id)
            .await
            .map_err(map_error)
    }

    async fn send_message(
        &self,
        org_id: &str,
        chat_id: &str,
        prompt: &str,
        timezone: &str,
    ) -> ProviderResult<EventStream> {
        self.stream_completion(org_id, chat_id, prompt, timezone)
            .await
            .map_err(map_error)
    }

    async fn delete_chat(&self, org_id: &str, chat_ids: &[String]) -> ProviderResult<Value> {
        self.delete_chats(org_id, chat_ids).await.map_err(map_error)
    }

    fn session_expires(&self) -> DateTime<Utc> {
        self.credential().expires()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_api_error_keeps_status_and_message() {
        let mapped = map_error(ClaudeAiError::Api {
            status: 429,
            message: "Too many requests".to_string(),
        });
        assert_eq!(
            mapped,
            ProviderError::Api {
                status: 429,
                message: "Too many requests".to_string()
            }
        );
    }

    #[test]
    fn test_map_session_expired() {
        assert_eq!(
            map_error(ClaudeAiError::SessionExpired),
            ProviderError::SessionExpired
        );
    }

    #[test]
    fn test_map_json_error_is_invalid_response() {
        let json_err = serde_json::from_str::<Value>("{").unwrap_err();
        assert!(matches!(
            map_error(ClaudeAiError::JsonParse(json_err)),
            ProviderError::InvalidResponse(_)
        ));
    }
}
