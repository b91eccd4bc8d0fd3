//! Bootstrap and composition root for the gateway.
//!
//! Builds the provider factory from configuration, creates the empty
//! session store, and runs the HTTP server until cancelled.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use claudegw_core::{ProviderFactory, SessionStore};
use claudegw_provider::{ClaudeAiConfig, ClaudeAiFactory, DEFAULT_API_URL};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// CORS configuration for the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// Build from a list of origins; an empty list allows all.
    pub fn from_origins(origins: Vec<String>) -> Self {
        if origins.is_empty() {
            Self::AllowAll
        } else {
            Self::AllowOrigins(origins)
        }
    }
}

/// Server configuration for the gateway.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Base URL of the claude.ai web API.
    pub api_url: String,
    /// Timeout for non-streaming provider calls.
    pub timeout: Duration,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ServerConfig {
    /// Create config with the stock defaults.
    pub fn with_defaults() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            cors: CorsConfig::default(),
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Address string the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the gateway.
///
/// Holds the session store (the current provider handle, if any) and the
/// factory used to build a new handle at login.
#[derive(Debug)]
pub struct AxumContext {
    /// Current provider handle.
    pub sessions: Arc<SessionStore>,
    /// Builds provider handles from session credentials.
    pub factory: Arc<dyn ProviderFactory>,
}

impl AxumContext {
    /// Create an unauthenticated context around `factory`.
    pub fn new(factory: Arc<dyn ProviderFactory>) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new()),
            factory,
        }
    }
}

/// Bootstrap the gateway from configuration.
pub fn bootstrap(config: &ServerConfig) -> AxumContext {
    let provider_config = ClaudeAiConfig::new()
        .with_base_url(config.api_url.clone())
        .with_timeout(config.timeout);
    info!(api_url = %provider_config.base_url(), "Using claude.ai API");

    AxumContext::new(Arc::new(ClaudeAiFactory::new(provider_config)))
}

/// Serve the gateway on an already-bound listener until `cancel` fires.
pub async fn serve(
    listener: TcpListener,
    ctx: AxumContext,
    cors: &CorsConfig,
    cancel: CancellationToken,
) -> Result<()> {
    let addr: SocketAddr = listener.local_addr()?;
    let app = crate::routes::create_router(ctx, cors);

    info!("claudegw listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await?;

    info!("claudegw shut down");
    Ok(())
}

/// Bootstrap, bind and serve.
pub async fn start_server(config: ServerConfig, cancel: CancellationToken) -> Result<()> {
    let ctx = bootstrap(&config);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    serve(listener, ctx, &config.cors, cancel).await
}
