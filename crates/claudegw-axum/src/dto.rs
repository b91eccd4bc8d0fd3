//! Request and response bodies for the gateway routes.
//!
//! Optional fields carry their defaults here so handlers always forward a
//! fully populated call to the provider.

use chrono::{DateTime, Utc};
use claudegw_core::DEFAULT_TIMEZONE;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

/// Message returned by a successful login.
pub const LOGIN_MESSAGE: &str = "Successfully authenticated with claude.ai";

/// `POST /auth/login` body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub session_key: String,
    /// Cookie-style date, e.g. `Wed, 21 Oct 2026 07:28:00 GMT`.
    pub expires: String,
}

/// `POST /auth/login` response.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub expires: DateTime<Utc>,
}

impl LoginResponse {
    pub fn new(expires: DateTime<Utc>) -> Self {
        Self {
            message: LOGIN_MESSAGE.to_string(),
            expires,
        }
    }
}

/// Query for `GET /organizations/{org_id}/projects`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ProjectsQuery {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub include_archived: bool,
}

/// Accept the boolean spellings HTML forms and Python clients send.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(de::Error::invalid_value(
            Unexpected::Str(&raw),
            &"a boolean (true/false, 1/0, yes/no, on/off)",
        )),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCreate {
    #[serde(default)]
    pub chat_name: String,
    #[serde(default)]
    pub project_uuid: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub prompt: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

/// `GET /health` response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub authenticated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_create_defaults_description() {
        let body: ProjectCreate = serde_json::from_value(json!({"name": "Demo"})).unwrap();
        assert_eq!(body.name, "Demo");
        assert_eq!(body.description, "");
    }

    #[test]
    fn test_projects_query_lenient_bool() {
        for (raw, expected) in [
            ("true", true),
            ("True", true),
            ("1", true),
            ("YES", true),
            ("on", true),
            ("false", false),
            ("False", false),
            ("0", false),
            ("no", false),
            ("Off", false),
        ] {
            let query: ProjectsQuery =
                serde_json::from_value(json!({ "include_archived": raw })).unwrap();
            assert_eq!(query.include_archived, expected, "{raw}");
        }

        let query: ProjectsQuery = serde_json::from_value(json!({})).unwrap();
        assert!(!query.include_archived);

        let invalid = json!({"include_archived": "maybe"});
        assert!(serde_json::from_value::<ProjectsQuery>(invalid).is_err());
    }

    #[test]
    fn test_chat_create_accepts_empty_object() {
        let body: ChatCreate = serde_json::from_value(json!({})).unwrap();
        assert_eq!(body.chat_name, "");
        assert!(body.project_uuid.is_none());
    }

    #[test]
    fn test_chat_message_defaults_timezone() {
        let body: ChatMessage = serde_json::from_value(json!({"prompt": "hi"})).unwrap();
        assert_eq!(body.timezone, "UTC");

        let body: ChatMessage =
            serde_json::from_value(json!({"prompt": "hi", "timezone": "Asia/Tokyo"})).unwrap();
        assert_eq!(body.timezone, "Asia/Tokyo");
    }

    #[test]
    fn test_chat_message_requires_prompt() {
        assert!(serde_json::from_value::<ChatMessage>(json!({})).is_err());
    }

    #[test]
    fn test_login_response_serializes_rfc3339() {
        let expires = DateTime::parse_from_rfc3339("2026-10-21T07:28:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let value = serde_json::to_value(LoginResponse::new(expires)).unwrap();
        assert_eq!(value["message"], LOGIN_MESSAGE);
        assert_eq!(value["expires"], "2026-10-21T07:28:00Z");
    }
}
