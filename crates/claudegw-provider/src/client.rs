//! claude.ai client bound to one session credential.

use std::time::Duration;

use claudegw_core::{EventStream, Organization, Project, SessionCredential};
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ClaudeAiConfig;
use crate::error::{ClaudeAiError, ClaudeAiResult};
use crate::models::{
    ApiOrganization, ApiProject, CompletionBody, CreateChatBody, CreateProjectBody,
    DeleteChatsBody, error_message,
};
use crate::sse::decode_events;

/// Client for the claude.ai web API.
///
/// Each client is scoped to one base URL and one session credential. A new
/// login builds a new client rather than mutating an existing one.
#[derive(Debug)]
pub struct ClaudeAiClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    credential: SessionCredential,
}

impl ClaudeAiClient {
    /// Create a client for `credential` using `config`.
    pub fn new(config: &ClaudeAiConfig, credential: SessionCredential) -> ClaudeAiResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClaudeAiError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClaudeAiError::InvalidBaseUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url,
            timeout: config.timeout,
            credential,
        })
    }

    /// The credential this client authenticates with.
    pub const fn credential(&self) -> &SessionCredential {
        &self.credential
    }

    /// Build an endpoint URL by appending path segments to the base URL.
    ///
    /// Segments are percent-encoded, so caller-supplied IDs cannot escape
    /// their position in the path.
    fn endpoint(&self, segments: &[&str]) -> ClaudeAiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClaudeAiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Start an authenticated request, refusing expired credentials.
    fn request(&self, method: Method, url: Url) -> ClaudeAiResult<RequestBuilder> {
        if self.credential.is_expired() {
            return Err(ClaudeAiError::SessionExpired);
        }
        debug!(%method, path = %url.path(), "claude.ai request");
        Ok(self
            .http
            .request(method, url)
            .header(
                COOKIE,
                format!("sessionKey={}", self.credential.session_key()),
            ))
    }

    /// Send a JSON request and decode the JSON response.
    ///
    /// An empty success body decodes as `null`.
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClaudeAiResult<T> {
        let response = builder
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await?;
        let response = check_status(response).await?;
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn organizations(&self) -> ClaudeAiResult<Vec<Organization>> {
        let url = self.endpoint(&["organizations"])?;
        let orgs: Vec<ApiOrganization> = self.send_json(self.request(Method::GET, url)?).await?;
        Ok(orgs
            .into_iter()
            .filter(ApiOrganization::supports_chat)
            .map(Organization::from)
            .collect())
    }

    pub(crate) async fn projects(
        &self,
        org_id: &str,
        include_archived: bool,
    ) -> ClaudeAiResult<Vec<Project>> {
        let mut url = self.endpoint(&["organizations", org_id, "projects"])?;
        url.query_pairs_mut()
            .append_pair("include_archived", if include_archived { "true" } else { "false" });

        let projects: Vec<ApiProject> = self.send_json(self.request(Method::GET, url)?).await?;
        Ok(projects
            .into_iter()
            .map(Project::from)
            .filter(|p| include_archived || !p.is_archived())
            .collect())
    }

    pub(crate) async fn post_project(
        &self,
        org_id: &str,
        name: &str,
        description: &str,
    ) -> ClaudeAiResult<Value> {
        let url = self.endpoint(&["organizations", org_id, "projects"])?;
        let body = CreateProjectBody {
            name,
            description,
            is_private: true,
        };
        self.send_json(self.request(Method::POST, url)?.json(&body))
            .await
    }

    pub(crate) async fn post_chat(
        &self,
        org_id: &str,
        chat_name: &str,
        project_uuid: Option<&str>,
    ) -> ClaudeAiResult<Value> {
        let url = self.endpoint(&["organizations", org_id, "chat_conversations"])?;
        let body = CreateChatBody {
            uuid: uuid::Uuid::new_v4().to_string(),
            name: chat_name,
            include_conversation_preferences: true,
            project_uuid,
        };
        self.send_json(self.request(Method::POST, url)?.json(&body))
            .await
    }

    pub(crate) async fn chat_conversations(&self, org_id: &str) -> ClaudeAiResult<Value> {
        let url = self.endpoint(&["organizations", org_id, "chat_conversations"])?;
        self.send_json(self.request(Method::GET, url)?).await
    }

    pub(crate) async fn chat_conversation(
        &self,
        org_id: &str,
        chat_id: &str,
    ) -> ClaudeAiResult<Value> {
        let mut url = self.endpoint(&["organizations", org_id, "chat_conversations", chat_id])?;
        url.query_pairs_mut().append_pair("rendering_mode", "raw");
        self.send_json(self.request(Method::GET, url)?).await
    }

    pub(crate) async fn stream_completion(
        &self,
        org_id: &str,
        chat_id: &str,
        prompt: &str,
        timezone: &str,
    ) -> ClaudeAiResult<EventStream> {
        let url = self.endpoint(&[
            "organizations",
            org_id,
            "chat_conversations",
            chat_id,
            "completion",
        ])?;
        let body = CompletionBody {
            prompt,
            timezone,
            attachments: Vec::new(),
            files: Vec::new(),
        };

        // No request timeout here: the stream stays open while events flow.
        let response = self
            .request(Method::POST, url)?
            .header(ACCEPT, "text/event-stream")
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        Ok(decode_events(response.bytes_stream()))
    }

    pub(crate) async fn delete_chats(
        &self,
        org_id: &str,
        chat_ids: &[String],
    ) -> ClaudeAiResult<Value> {
        let url = self.endpoint(&[
            "organizations",
            org_id,
            "chat_conversations",
            "delete_many",
        ])?;
        let body = DeleteChatsBody {
            conversation_uuids: chat_ids,
        };
        self.send_json(self.request(Method::POST, url)?.json(&body))
            .await
    }
}

/// Turn a non-success response into [`ClaudeAiError::Api`].
async fn check_status(response: Response) -> ClaudeAiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|body| error_message(&body))
        .unwrap_or_else(|| {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                format!("HTTP {status}")
            } else {
                trimmed.to_string()
            }
        });

    Err(ClaudeAiError::Api {
        status: status.as_u16(),
        message,
    })
}
