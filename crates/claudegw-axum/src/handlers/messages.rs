//! Message streaming handler.

use std::convert::Infallible;

use axum::response::sse::{Event, Sse};
use futures_util::stream::Stream;
use tracing::debug;

use crate::dto::ChatMessage;
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, Provider};
use crate::sse::relay_events;

/// Send a message and stream the provider's events back as SSE.
///
/// A failure before the first event is a 400; failures after that are sent
/// as an `error` event on the open stream.
pub async fn send(
    Provider(provider): Provider,
    ApiPath((org_id, chat_id)): ApiPath<(String, String)>,
    ApiJson(req): ApiJson<ChatMessage>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>> + Send + 'static>, HttpError> {
    debug!(%org_id, %chat_id, timezone = %req.timezone, "POST messages");
    let events = provider
        .send_message(&org_id, &chat_id, &req.prompt, &req.timezone)
        .await?;
    Ok(relay_events(events))
}
