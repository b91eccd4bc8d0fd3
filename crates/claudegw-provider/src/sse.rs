//! SSE decoder for the completion stream.
//!
//! claude.ai streams Server-Sent Events whose `data:` payloads are JSON
//! objects. This module turns the raw byte stream into a stream of those
//! objects, one item per event, in emission order.

use bytes::{Bytes, BytesMut};
use claudegw_core::{EventStream, ProviderError};
use futures_util::stream::BoxStream;
use futures_util::{Stream, StreamExt};
use tracing::warn;

use crate::models::stream_error_message;

/// State threaded through the `unfold` stream.
struct DecoderState {
    stream: BoxStream<'static, Result<Bytes, reqwest::Error>>,
    buf: BytesMut,
    done: bool,
}

/// What a single SSE line contributes to the output.
#[derive(Debug, PartialEq)]
enum Line {
    /// Blank line, comment, or a field other than `data`.
    Skip,
    /// `data: [DONE]` sentinel.
    Done,
    /// A decoded event.
    Event(serde_json::Value),
    /// An event reporting a provider error.
    Error(String),
}

/// Decode an SSE byte stream into provider events.
///
/// The output ends after the upstream ends, after a `[DONE]` sentinel, or
/// after the first error item.
pub(crate) fn decode_events<S>(byte_stream: S) -> EventStream
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
{
    let state = DecoderState {
        stream: byte_stream.boxed(),
        buf: BytesMut::new(),
        done: false,
    };

    futures_util::stream::unfold(state, |mut st| async move {
        if st.done {
            return None;
        }

        loop {
            if let Some(line_end) = find_newline(&st.buf) {
                let line = st.buf.split_to(line_end);
                match classify_line(&String::from_utf8_lossy(&line)) {
                    Line::Skip => continue,
                    Line::Done => return None,
                    Line::Event(event) => return Some((Ok(event), st)),
                    Line::Error(message) => {
                        st.done = true;
                        return Some((Err(ProviderError::Stream(message)), st));
                    }
                }
            }

            match st.stream.next().await {
                Some(Ok(chunk)) => st.buf.extend_from_slice(&chunk),
                Some(Err(e)) => {
                    warn!("Upstream stream error: {e}");
                    st.done = true;
                    return Some((Err(ProviderError::Network(e.to_string())), st));
                }
                None => {
                    // Flush a final line that arrived without a newline.
                    if st.buf.is_empty() {
                        return None;
                    }
                    st.buf.extend_from_slice(b"\n");
                }
            }
        }
    })
    .boxed()
}

fn classify_line(raw: &str) -> Line {
    let line = raw.trim_end_matches(['\r', '\n']);
    if line.is_empty() || line.starts_with(':') {
        return Line::Skip;
    }

    let Some(data) = line.strip_prefix("data:") else {
        return Line::Skip;
    };
    let data = data.trim_start();

    if data == "[DONE]" {
        return Line::Done;
    }

    match serde_json::from_str::<serde_json::Value>(data) {
        Ok(event) => match stream_error_message(&event) {
            Some(message) => Line::Error(message),
            None => Line::Event(event),
        },
        Err(e) => {
            warn!("Skipping undecodable SSE data line: {e}");
            Line::Skip
        }
    }
}

/// Find the next newline in the buffer, returning the position after it.
fn find_newline(buf: &BytesMut) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n').map(|pos| pos + 1)
}
