//! Session credentials and the store holding the current provider handle.

mod credential;
mod store;

pub use credential::{EXPIRY_FORMAT, ExpiryParseError, SessionCredential, parse_expiry};
pub use store::{NotAuthenticated, SessionStore};
