//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the gateway expects from the provider
//! adapter. They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `axum` types in any signature
//! - One method per provider capability, no composite operations
//! - Errors are reported as [`ProviderError`] and never retried here

pub mod provider;

pub use provider::{EventStream, ProviderError, ProviderFactory, ProviderPort, ProviderResult};
