//! Shared fixtures for gateway integration tests.

#![allow(dead_code)]

pub mod fake;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use claudegw_axum::{AxumContext, CorsConfig, create_router};
use claudegw_core::SessionStore;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use fake::{FakeFactory, FakeProvider};

/// Expiry used by the happy-path login.
pub const EXPIRES: &str = "Wed, 21 Oct 2026 07:28:00 GMT";

/// A router wired to a fake provider, plus handles to inspect it.
pub struct TestApp {
    pub router: Router,
    pub provider: Arc<FakeProvider>,
    pub factory: Arc<FakeFactory>,
    pub sessions: Arc<SessionStore>,
}

impl TestApp {
    pub fn new(provider: FakeProvider) -> Self {
        Self::with_factory(FakeFactory::new(provider))
    }

    pub fn with_factory(factory: FakeFactory) -> Self {
        let factory = Arc::new(factory);
        let provider = factory.provider();
        let ctx = AxumContext::new(factory.clone());
        let sessions = ctx.sessions.clone();

        Self {
            router: create_router(ctx, &CorsConfig::AllowAll),
            provider,
            factory,
            sessions,
        }
    }

    /// Send a request and return the status and raw body.
    pub async fn send_raw(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// Send a request and return the status and JSON body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = self.send_raw(request).await;
        let json = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("expected JSON body, got {body:?}: {e}"));
        (status, json)
    }

    pub async fn login(&self) {
        let (status, body) = self
            .send(json_request(
                Method::POST,
                "/auth/login",
                &serde_json::json!({"session_key": "sk-ant-test", "expires": EXPIRES}),
            ))
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
    }
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
