//! Public configuration for the claude.ai client.

use std::time::Duration;

/// Base URL of the claude.ai web API.
pub const DEFAULT_API_URL: &str = "https://api.claude.ai/api";

/// Configuration for [`ClaudeAiClient`](crate::ClaudeAiClient).
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use claudegw_provider::ClaudeAiConfig;
/// use std::time::Duration;
///
/// let config = ClaudeAiConfig::new()
///     .with_base_url("http://127.0.0.1:9000/api")
///     .with_timeout(Duration::from_secs(60));
/// assert_eq!(config.base_url(), "http://127.0.0.1:9000/api");
/// ```
#[derive(Debug, Clone)]
pub struct ClaudeAiConfig {
    /// Base URL every endpoint path is appended to
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Timeout for non-streaming requests
    pub(crate) timeout: Duration,
}

impl Default for ClaudeAiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: concat!("claudegw/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClaudeAiConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the web API.
    ///
    /// Defaults to [`DEFAULT_API_URL`].
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Applies to every call except message streaming, which stays open for
    /// as long as the provider keeps emitting events. Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
