//! Axum HTTP gateway in front of the claude.ai web API.
//!
//! Every route maps one-to-one onto a [`claudegw_core::ProviderPort`]
//! method. The gateway's own logic is limited to login, the
//! authenticated/unauthenticated check, request defaults, error mapping and
//! relaying the message event stream.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod sse;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, serve, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
