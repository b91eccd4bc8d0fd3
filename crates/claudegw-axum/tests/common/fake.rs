//! In-memory provider that records every call it receives.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use claudegw_core::{
    EventStream, Organization, Project, ProviderError, ProviderFactory, ProviderPort,
    ProviderResult, SessionCredential,
};
use futures_util::StreamExt;
use futures_util::stream;
use serde_json::{Value, json};

/// One recorded provider call: operation name and its arguments.
pub type Call = (&'static str, Value);

#[derive(Debug, Default)]
pub struct FakeProvider {
    calls: Mutex<Vec<Call>>,
    fail_with: Option<ProviderError>,
    events: Vec<ProviderResult<Value>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails with `err`.
    pub fn failing(err: ProviderError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }

    /// `send_message` yields these items.
    pub fn with_events(events: Vec<ProviderResult<Value>>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &'static str, args: Value) -> ProviderResult<()> {
        self.calls.lock().unwrap().push((name, args));
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProviderPort for FakeProvider {
    async fn get_organizations(&self) -> ProviderResult<Vec<Organization>> {
        self.record("get_organizations", Value::Null)?;
        Ok(vec![Organization {
            id: "org1".to_string(),
            name: "Personal".to_string(),
        }])
    }

    async fn get_projects(
        &self,
        org_id: &str,
        include_archived: bool,
    ) -> ProviderResult<Vec<Project>> {
        self.record(
            "get_projects",
            json!({"org_id": org_id, "include_archived": include_archived}),
        )?;
        Ok(vec![Project {
            id: "p1".to_string(),
            name: "Demo".to_string(),
            archived_at: None,
        }])
    }

    async fn create_project(
        &self,
        org_id: &str,
        name: &str,
        description: &str,
    ) -> ProviderResult<Value> {
        self.record(
            "create_project",
            json!({"org_id": org_id, "name": name, "description": description}),
        )?;
        Ok(json!({"uuid": "p-new", "name": name, "description": description}))
    }

    async fn create_chat(
        &self,
        org_id: &str,
        chat_name: &str,
        project_uuid: Option<&str>,
    ) -> ProviderResult<Value> {
        self.record(
            "create_chat",
            json!({"org_id": org_id, "chat_name": chat_name, "project_uuid": project_uuid}),
        )?;
        Ok(json!({"uuid": "c-new", "name": chat_name, "project_uuid": project_uuid}))
    }

    async fn get_chat_conversations(&self, org_id: &str) -> ProviderResult<Value> {
        self.record("get_chat_conversations", json!({"org_id": org_id}))?;
        Ok(json!([{"uuid": "c1", "name": "first"}]))
    }

    async fn get_chat_conversation(&self, org_id: &str, chat_id: &str) -> ProviderResult<Value> {
        self.record(
            "get_chat_conversation",
            json!({"org_id": org_id, "chat_id": chat_id}),
        )?;
        Ok(json!({"uuid": chat_id, "chat_messages": []}))
    }

    async fn send_message(
        &self,
        org_id: &str,
        chat_id: &str,
        prompt: &str,
        timezone: &str,
    ) -> ProviderResult<EventStream> {
        self.record(
            "send_message",
            json!({"org_id": org_id, "chat_id": chat_id, "prompt": prompt, "timezone": timezone}),
        )?;
        Ok(stream::iter(self.events.clone()).boxed())
    }

    async fn delete_chat(&self, org_id: &str, chat_ids: &[String]) -> ProviderResult<Value> {
        self.record("delete_chat", json!({"org_id": org_id, "chat_ids": chat_ids}))?;
        Ok(json!({"deleted": chat_ids}))
    }

    fn session_expires(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 21, 7, 28, 0).unwrap()
    }
}

/// Factory handing out one shared [`FakeProvider`].
#[derive(Debug)]
pub struct FakeFactory {
    provider: Arc<FakeProvider>,
    fail_with: Option<ProviderError>,
    connects: AtomicUsize,
    credentials: Mutex<Vec<SessionCredential>>,
}

impl FakeFactory {
    pub fn new(provider: FakeProvider) -> Self {
        Self {
            provider: Arc::new(provider),
            fail_with: None,
            connects: AtomicUsize::new(0),
            credentials: Mutex::new(Vec::new()),
        }
    }

    /// Every `connect` fails with `err`.
    pub fn failing(err: ProviderError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::new(FakeProvider::new())
        }
    }

    pub fn provider(&self) -> Arc<FakeProvider> {
        self.provider.clone()
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn credentials(&self) -> Vec<SessionCredential> {
        self.credentials.lock().unwrap().clone()
    }
}

impl ProviderFactory for FakeFactory {
    fn connect(&self, credential: SessionCredential) -> ProviderResult<Arc<dyn ProviderPort>> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.credentials.lock().unwrap().push(credential);
        Ok(self.provider.clone())
    }
}
