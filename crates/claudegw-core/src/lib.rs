//! Core domain types and ports for the claudegw gateway.
//!
//! This crate owns everything the gateway needs to reason about a
//! claude.ai session without knowing how the provider is reached:
//!
//! - [`domain`] - pass-through records and request defaults
//! - [`session`] - session credentials, expiry parsing and the handle store
//! - [`ports`] - the provider traits implemented by adapters
//!
//! No HTTP client or server types appear in any signature here.

#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod session;

// Re-export commonly used types for convenience
pub use domain::{DEFAULT_TIMEZONE, Organization, Project};
pub use ports::{EventStream, ProviderError, ProviderFactory, ProviderPort, ProviderResult};
pub use session::{
    EXPIRY_FORMAT, ExpiryParseError, NotAuthenticated, SessionCredential, SessionStore,
    parse_expiry,
};
