//! Relay of provider message events to an SSE response.
//!
//! A spawned producer pulls events from the provider stream and pushes them
//! into a bounded channel that backs the response body. When the client goes
//! away the receiver is dropped, the producer sees the channel close and
//! drops the upstream stream with it.

use std::convert::Infallible;
use std::time::Duration;

use axum::response::sse::{Event, KeepAlive, Sse};
use claudegw_core::{EventStream, ProviderError};
use futures_util::stream::{Stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, warn};

/// Events buffered between the producer and the response body.
const RELAY_CAPACITY: usize = 32;

/// Build an SSE response that forwards every event of `events` in order.
///
/// Each provider event becomes one `data: <json>` event. A provider error
/// mid-stream is sent as a single `event: error` and ends the response.
/// Includes a keep-alive ping every 30 seconds to prevent proxy timeouts.
pub fn relay_events(
    events: EventStream,
) -> Sse<impl Stream<Item = Result<Event, Infallible>> + Send + 'static> {
    let (tx, rx) = mpsc::channel(RELAY_CAPACITY);
    tokio::spawn(produce(events, tx));

    Sse::new(ReceiverStream::new(rx).map(Ok)).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(30))
            .text("ping"),
    )
}

async fn produce(mut events: EventStream, tx: mpsc::Sender<Event>) {
    let mut relayed = 0usize;

    loop {
        let next = tokio::select! {
            () = tx.closed() => {
                debug!(relayed, "Client disconnected, stopping event relay");
                return;
            }
            next = events.next() => next,
        };

        let Some(item) = next else {
            debug!(relayed, "Provider stream complete");
            return;
        };

        let (event, last) = match item {
            Ok(value) => (Event::default().data(value.to_string()), false),
            Err(err) => {
                warn!(relayed, error = %err, "Provider stream failed");
                (error_event(&err), true)
            }
        };

        if tx.send(event).await.is_err() {
            debug!(relayed, "Client disconnected, stopping event relay");
            return;
        }
        relayed += 1;

        if last {
            return;
        }
    }
}

fn error_event(err: &ProviderError) -> Event {
    // SSE data lines cannot carry raw line breaks.
    let message = err.to_string().replace(['\r', '\n'], " ");
    Event::default().event("error").data(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use claudegw_core::ProviderResult;
    use futures_util::stream;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tokio::sync::oneshot;

    async fn body_text(events: EventStream) -> String {
        let response = relay_events(events).into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn data_lines(body: &str) -> Vec<&str> {
        body.lines()
            .filter_map(|line| line.strip_prefix("data: "))
            .collect()
    }

    #[tokio::test]
    async fn test_events_relayed_in_order() {
        let items: Vec<ProviderResult<Value>> =
            (0..5).map(|i| Ok(json!({ "index": i }))).collect();
        let body = body_text(stream::iter(items).boxed()).await;

        let data = data_lines(&body);
        assert_eq!(data.len(), 5);
        for (i, line) in data.iter().enumerate() {
            let value: Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["index"], i);
        }
    }

    #[tokio::test]
    async fn test_error_ends_stream_with_error_event() {
        let items: Vec<ProviderResult<Value>> = vec![
            Ok(json!({"completion": "a"})),
            Err(ProviderError::Stream("Overloaded".to_string())),
            Ok(json!({"completion": "never sent"})),
        ];
        let body = body_text(stream::iter(items).boxed()).await;

        assert!(body.contains("event: error\ndata: Overloaded\n"));
        assert!(!body.contains("never sent"));
        assert_eq!(data_lines(&body).len(), 2);
    }

    #[tokio::test]
    async fn test_empty_stream_yields_empty_body() {
        let body = body_text(stream::empty().boxed()).await;
        assert!(data_lines(&body).is_empty());
    }

    #[tokio::test]
    async fn test_dropping_response_stops_producer() {
        let (dropped_tx, dropped_rx) = oneshot::channel::<()>();
        let events = stream::pending::<ProviderResult<Value>>()
            .map(move |item| {
                let _held = &dropped_tx;
                item
            })
            .boxed();

        let sse = relay_events(events);
        drop(sse);

        // The sender is dropped together with the upstream stream.
        let outcome = tokio::time::timeout(Duration::from_secs(2), dropped_rx).await;
        assert!(outcome.is_ok(), "producer kept the upstream stream alive");
    }
}
