//! claude.ai web API adapter for the claudegw provider port.
//!
//! [`ClaudeAiClient`] authenticates with a browser session key and exposes
//! the organization, project and chat operations through
//! [`claudegw_core::ProviderPort`]. [`ClaudeAiFactory`] is what the gateway
//! uses at login to build a fresh client.

#![deny(unsafe_code)]

mod client;
mod config;
mod error;
mod factory;
mod models;
mod port;
mod sse;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::ClaudeAiClient;

// Configuration
pub use config::{ClaudeAiConfig, DEFAULT_API_URL};

// Factory used by the gateway's login
pub use factory::ClaudeAiFactory;
