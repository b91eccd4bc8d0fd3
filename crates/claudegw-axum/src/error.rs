//! Axum-specific error types and mappings.
//!
//! This module provides the gateway's error type and the single place where
//! core errors are translated to HTTP status codes and response bodies.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use claudegw_core::{NotAuthenticated, ProviderError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// No provider handle is present.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request (invalid input or provider-reported failure).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Body was well-formed JSON but did not match the expected shape.
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),
}

impl HttpError {
    /// The status code this error is reported with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn into_message(self) -> String {
        match self {
            Self::Unauthorized(msg) | Self::BadRequest(msg) | Self::UnprocessableEntity(msg) => {
                msg
            }
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.into_message(),
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<ProviderError> for HttpError {
    fn from(err: ProviderError) -> Self {
        // Every provider failure is a client error carrying the provider's text.
        tracing::warn!(status = ?err.status(), error = %err, "Provider call failed");
        Self::BadRequest(err.to_string())
    }
}

impl From<NotAuthenticated> for HttpError {
    fn from(err: NotAuthenticated) -> Self {
        Self::Unauthorized(err.to_string())
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        if rejection.status() == StatusCode::UNPROCESSABLE_ENTITY {
            Self::UnprocessableEntity(message)
        } else {
            Self::BadRequest(message)
        }
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
