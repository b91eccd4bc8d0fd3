//! HTTP handlers, one module per resource.
//!
//! Every handler except login and health takes the [`Provider`] extractor
//! first, so a missing login is rejected before the body is parsed or the
//! provider is called.
//!
//! [`Provider`]: crate::extract::Provider

pub mod auth;
pub mod chats;
pub mod health;
pub mod messages;
pub mod organizations;
pub mod projects;
