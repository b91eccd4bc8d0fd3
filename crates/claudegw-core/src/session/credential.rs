//! Provider-issued session credential and cookie-style expiry parsing.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// Human-readable expiry format accepted at login, as used in cookie dates.
///
/// Example: `Wed, 21 Oct 2026 07:28:00 GMT`.
pub const EXPIRY_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %Z";

/// Format of the date and time between the weekday and the zone token.
const EXPIRY_STAMP_FORMAT: &str = "%d %b %Y %H:%M:%S";

const WEEKDAY_NAMES: &[&str] = &[
    "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun", "Monday", "Tuesday", "Wednesday",
    "Thursday", "Friday", "Saturday", "Sunday",
];

/// Zone names the expiry format can express without ambiguity.
const UTC_ZONE_NAMES: &[&str] = &["GMT", "UTC"];

/// Error returned when an expiry string does not match [`EXPIRY_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("time data '{input}' does not match format '{format}': {reason}")]
pub struct ExpiryParseError {
    /// The rejected input.
    pub input: String,
    /// The expected format.
    pub format: &'static str,
    /// What was wrong with the input.
    pub reason: String,
}

impl ExpiryParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            format: EXPIRY_FORMAT,
            reason: reason.into(),
        }
    }
}

/// Parse a cookie-style expiry string such as `Wed, 21 Oct 2026 07:28:00 GMT`.
///
/// The zone token must be `GMT` or `UTC` in any case. The weekday must be a
/// weekday name but is not checked against the date.
pub fn parse_expiry(input: &str) -> Result<DateTime<Utc>, ExpiryParseError> {
    let trimmed = input.trim();
    let (stamp, zone) = trimmed
        .rsplit_once(' ')
        .ok_or_else(|| ExpiryParseError::new(input, "missing timezone"))?;

    if !UTC_ZONE_NAMES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(zone))
    {
        return Err(ExpiryParseError::new(
            input,
            format!("unsupported timezone '{zone}'"),
        ));
    }

    let (weekday, date_time) = stamp
        .split_once(',')
        .ok_or_else(|| ExpiryParseError::new(input, "missing weekday"))?;
    if !WEEKDAY_NAMES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(weekday.trim()))
    {
        return Err(ExpiryParseError::new(
            input,
            format!("unknown weekday '{}'", weekday.trim()),
        ));
    }

    let naive = NaiveDateTime::parse_from_str(date_time.trim(), EXPIRY_STAMP_FORMAT)
        .map_err(|e| ExpiryParseError::new(input, e.to_string()))?;

    Ok(naive.and_utc())
}

/// A provider session key together with its expiry.
///
/// The key is a secret and never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredential {
    session_key: String,
    expires: DateTime<Utc>,
}

impl SessionCredential {
    /// Create a credential from an already parsed expiry.
    pub fn new(session_key: impl Into<String>, expires: DateTime<Utc>) -> Self {
        Self {
            session_key: session_key.into(),
            expires,
        }
    }

    /// Create a credential from a cookie-style expiry string.
    pub fn parse(session_key: impl Into<String>, expires: &str) -> Result<Self, ExpiryParseError> {
        Ok(Self::new(session_key, parse_expiry(expires)?))
    }

    /// The secret session key.
    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    /// When the provider stops accepting this key.
    pub const fn expires(&self) -> DateTime<Utc> {
        self.expires
    }

    /// Whether the credential is expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }

    /// Whether the credential is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCredential")
            .field("session_key", &"<redacted>")
            .field("expires", &self.expires)
            .finish()
    }
}
