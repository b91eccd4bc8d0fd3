//! Request extractors.
//!
//! [`Provider`] runs from request parts, so handlers that list it before a
//! body extractor reject unauthenticated calls before the body is read.
//! [`ApiJson`], [`ApiQuery`] and [`ApiPath`] wrap the stock extractors so
//! rejections use the same JSON error body as every other failure.

use std::sync::Arc;

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use claudegw_core::ProviderPort;
use serde::de::DeserializeOwned;

use crate::error::HttpError;
use crate::state::AppState;

/// The current provider handle, or a 401 when nobody has logged in.
#[derive(Debug, Clone)]
pub struct Provider(pub Arc<dyn ProviderPort>);

impl FromRequestParts<AppState> for Provider {
    type Rejection = HttpError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let handle = state.sessions.require().await?;
        Ok(Self(handle))
    }
}

/// JSON body extractor with gateway error bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Query string extractor with gateway error bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Path parameter extractor with gateway error bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
