//! Factory building a fresh client per login.

use std::sync::Arc;

use claudegw_core::{ProviderFactory, ProviderPort, ProviderResult, SessionCredential};
use tracing::info;

use crate::client::ClaudeAiClient;
use crate::config::ClaudeAiConfig;
use crate::port::map_error;

/// Builds [`ClaudeAiClient`] handles scoped to one base URL.
#[derive(Debug, Clone, Default)]
pub struct ClaudeAiFactory {
    config: ClaudeAiConfig,
}

impl ClaudeAiFactory {
    /// Create a factory that builds clients from `config`.
    #[must_use]
    pub const fn new(config: ClaudeAiConfig) -> Self {
        Self { config }
    }

    /// The configuration new clients are built from.
    pub const fn config(&self) -> &ClaudeAiConfig {
        &self.config
    }
}

impl ProviderFactory for ClaudeAiFactory {
    fn connect(&self, credential: SessionCredential) -> ProviderResult<Arc<dyn ProviderPort>> {
        let expires = credential.expires();
        let client = ClaudeAiClient::new(&self.config, credential).map_err(map_error)?;
        info!(base_url = %self.config.base_url(), %expires, "Built claude.ai client");
        Ok(Arc::new(client))
    }
}
