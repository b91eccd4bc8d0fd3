//! Provider port for the conversational-AI web API.
//!
//! A provider handle wraps one session credential and exposes the
//! organization, project and chat operations the gateway forwards.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::stream::BoxStream;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{Organization, Project};
use crate::session::SessionCredential;

/// Result type alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Live sequence of events emitted by the provider while it generates a reply.
///
/// The stream ends when the provider's sequence ends. An `Err` item is
/// terminal: nothing follows it.
pub type EventStream = BoxStream<'static, ProviderResult<Value>>;

/// Errors reported by a provider handle.
///
/// The display text is what callers of the gateway see, so variants carry
/// the provider's own message wherever one exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Api {
        /// HTTP status returned by the provider.
        status: u16,
        /// Message extracted from the provider's error body.
        message: String,
    },

    /// The stored session credential is past its expiry.
    #[error("Session key has expired, please log in again")]
    SessionExpired,

    /// The provider could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider returned something that could not be understood.
    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),

    /// The provider reported an error inside an event stream.
    #[error("{0}")]
    Stream(String),

    /// The handle could not be constructed from its configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ProviderError {
    /// Returns the provider HTTP status behind this error, if there was one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Port for an authenticated provider session.
///
/// Implementations perform exactly one provider call per method and never
/// retry. Results other than organizations and projects are returned
/// verbatim because the gateway does not interpret them.
#[async_trait]
pub trait ProviderPort: Send + Sync + fmt::Debug {
    /// List the organizations visible to this session.
    async fn get_organizations(&self) -> ProviderResult<Vec<Organization>>;

    /// List the projects of an organization.
    ///
    /// Archived projects are only included when `include_archived` is set.
    async fn get_projects(
        &self,
        org_id: &str,
        include_archived: bool,
    ) -> ProviderResult<Vec<Project>>;

    /// Create a project and return the provider's project object.
    async fn create_project(
        &self,
        org_id: &str,
        name: &str,
        description: &str,
    ) -> ProviderResult<Value>;

    /// Create a chat, optionally inside a project, and return the chat object.
    async fn create_chat(
        &self,
        org_id: &str,
        chat_name: &str,
        project_uuid: Option<&str>,
    ) -> ProviderResult<Value>;

    /// List chat summaries of an organization.
    async fn get_chat_conversations(&self, org_id: &str) -> ProviderResult<Value>;

    /// Fetch a single chat with its messages.
    async fn get_chat_conversation(&self, org_id: &str, chat_id: &str) -> ProviderResult<Value>;

    /// Send a prompt to a chat.
    ///
    /// Failures detected before the provider starts streaming are returned
    /// as `Err`; later failures arrive as the final item of the stream.
    async fn send_message(
        &self,
        org_id: &str,
        chat_id: &str,
        prompt: &str,
        timezone: &str,
    ) -> ProviderResult<EventStream>;

    /// Delete chats and return the provider's confirmation.
    async fn delete_chat(&self, org_id: &str, chat_ids: &[String]) -> ProviderResult<Value>;

    /// Expiry of the credential this handle was built from.
    fn session_expires(&self) -> DateTime<Utc>;
}

/// Factory that turns a session credential into a provider handle.
///
/// Login goes through this seam so the gateway never names a concrete
/// provider type.
pub trait ProviderFactory: Send + Sync + fmt::Debug {
    /// Build a new handle scoped to the factory's base URL.
    fn connect(&self, credential: SessionCredential) -> ProviderResult<Arc<dyn ProviderPort>>;
}
