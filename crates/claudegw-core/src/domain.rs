//! Pass-through records returned by the provider.
//!
//! The provider defines the shape of these records; the gateway only adds
//! optional-field defaults. Chats and message events are kept as raw
//! `serde_json::Value` because nothing here inspects them.

use serde::{Deserialize, Serialize};

/// Timezone forwarded with a prompt when the caller does not supply one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// An organization the authenticated account belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

/// A project within an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Archive timestamp as reported by the provider, if archived.
    #[serde(default)]
    pub archived_at: Option<String>,
}

impl Project {
    /// Whether the provider reported this project as archived.
    pub const fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_archived_at_defaults_to_none() {
        let project: Project = serde_json::from_str(r#"{"id":"p1","name":"Demo"}"#).unwrap();
        assert_eq!(project.archived_at, None);
        assert!(!project.is_archived());
    }

    #[test]
    fn test_project_serializes_null_archived_at() {
        let project = Project {
            id: "p1".to_string(),
            name: "Demo".to_string(),
            archived_at: None,
        };
        let json = serde_json::to_value(&project).unwrap();
        assert!(json["archived_at"].is_null());
    }
}
