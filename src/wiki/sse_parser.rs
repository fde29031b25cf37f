//! Server-Sent Events (SSE) parser for OpenAI-compatible streaming responses.
//!
//! Groq streams chat completions as `data: {json}` lines terminated by
//! `data: [DONE]`.

use bytes::Bytes;
use futures_util::Stream;
use serde::Deserialize;

use crate::error::{Result, WikiError};

/// Response structure for streaming chat completions.
#[derive(Debug, Deserialize)]
struct StreamResponse {
    #[serde(default)]
    choices: Vec<StreamChoice>,
    #[serde(default)]
    error: Option<StreamError>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamError {
    message: String,
}

/// What a single SSE line means to the consumer.
#[derive(Debug, PartialEq, Eq)]
enum SseEvent {
    Content(String),
    Error(String),
    Done,
    Skip,
}

/// Converts a raw SSE byte stream into a stream of text fragments.
///
/// The returned stream is one-shot: it ends at `data: [DONE]`, at the end of
/// the body, or right after yielding its first error.
pub fn sse_to_text_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<String>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        // Raw bytes: a multi-byte character may straddle two chunks.
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(WikiError::transport(format!("Stream error: {e}")));
                    return;
                }
            };

            buffer.extend_from_slice(&chunk);

            while let Some(line_end) = buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=line_end).collect();
                let line = String::from_utf8_lossy(&line);

                match parse_sse_line(line.trim()) {
                    SseEvent::Content(content) => yield Ok(content),
                    SseEvent::Error(message) => {
                        yield Err(WikiError::transport(format!("API error: {message}")));
                        return;
                    }
                    SseEvent::Done => return,
                    SseEvent::Skip => {}
                }
            }
        }

        // A final event without a trailing newline.
        let line = String::from_utf8_lossy(&buffer);
        match parse_sse_line(line.trim()) {
            SseEvent::Content(content) => yield Ok(content),
            SseEvent::Error(message) => {
                yield Err(WikiError::transport(format!("API error: {message}")));
            }
            SseEvent::Done | SseEvent::Skip => {}
        }
    }
}

/// Parses a single trimmed SSE line.
///
/// Non-data lines, comments, unparsable payloads and empty deltas are
/// `Skip`; empty fragments never end the stream.
fn parse_sse_line(line: &str) -> SseEvent {
    let Some(payload) = line.strip_prefix("data:") else {
        return SseEvent::Skip;
    };
    let payload = payload.trim_start();

    if payload == "[DONE]" {
        return SseEvent::Done;
    }

    let Ok(response) = serde_json::from_str::<StreamResponse>(payload) else {
        return SseEvent::Skip;
    };

    if let Some(error) = response.error {
        return SseEvent::Error(error.message);
    }

    let content: String = response
        .choices
        .into_iter()
        .filter_map(|c| c.delta.content)
        .collect();

    if content.is_empty() {
        SseEvent::Skip
    } else {
        SseEvent::Content(content)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use futures_util::{StreamExt, stream};

    fn content(s: &str) -> SseEvent {
        SseEvent::Content(s.to_string())
    }

    async fn collect(chunks: Vec<&'static str>) -> Vec<Result<String>> {
        let byte_stream = stream::iter(
            chunks
                .into_iter()
                .map(|c| Ok::<_, reqwest::Error>(Bytes::from_static(c.as_bytes()))),
        );
        sse_to_text_stream(byte_stream).collect().await
    }

    #[test]
    fn test_parse_sse_line_with_content() {
        let line = r#"data: {"choices":[{"delta":{"content":"Hello"}}]}"#;
        assert_eq!(parse_sse_line(line), content("Hello"));
    }

    #[test]
    fn test_parse_sse_line_without_space_after_colon() {
        let line = r#"data:{"choices":[{"delta":{"content":"Hi"}}]}"#;
        assert_eq!(parse_sse_line(line), content("Hi"));
    }

    #[test]
    fn test_parse_sse_line_with_empty_content() {
        let line = r#"data: {"choices":[{"delta":{"content":""}}]}"#;
        assert_eq!(parse_sse_line(line), SseEvent::Skip);
    }

    #[test]
    fn test_parse_sse_line_role_only_delta() {
        let line = r#"data: {"choices":[{"delta":{"role":"assistant"}}]}"#;
        assert_eq!(parse_sse_line(line), SseEvent::Skip);
    }

    #[test]
    fn test_parse_sse_line_multiple_choices() {
        let line =
            r#"data: {"choices":[{"delta":{"content":"Hello"}},{"delta":{"content":" World"}}]}"#;
        assert_eq!(parse_sse_line(line), content("Hello World"));
    }

    #[test]
    fn test_parse_sse_line_no_data_prefix() {
        let line = r#"{"choices":[{"delta":{"content":"Hello"}}]}"#;
        assert_eq!(parse_sse_line(line), SseEvent::Skip);
    }

    #[test]
    fn test_parse_sse_line_invalid_json() {
        assert_eq!(parse_sse_line("data: not json"), SseEvent::Skip);
    }

    #[test]
    fn test_parse_sse_line_done_marker() {
        assert_eq!(parse_sse_line("data: [DONE]"), SseEvent::Done);
    }

    #[test]
    fn test_parse_sse_line_comment_and_blank() {
        assert_eq!(parse_sse_line(": keep-alive"), SseEvent::Skip);
        assert_eq!(parse_sse_line(""), SseEvent::Skip);
    }

    #[test]
    fn test_parse_sse_line_error_payload() {
        let line = r#"data: {"error":{"message":"rate limit reached","type":"tokens"}}"#;
        assert_eq!(
            parse_sse_line(line),
            SseEvent::Error("rate limit reached".to_string())
        );
    }

    #[tokio::test]
    async fn test_stream_preserves_order_and_stops_at_done() {
        let items = collect(vec![
            "data: {\"choices\":[{\"delta\":{\"content\":\"# Title\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"\\n\\nBody\"}}]}\n\n",
            "data: [DONE]\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"ignored\"}}]}\n\n",
        ])
        .await;

        let fragments: Vec<String> = items.into_iter().map(std::result::Result::unwrap).collect();
        assert_eq!(fragments, vec!["# Title", "\n\nBody"]);
    }

    #[tokio::test]
    async fn test_stream_reassembles_split_lines() {
        let items = collect(vec![
            "data: {\"choices\":[{\"delta\":{\"con",
            "tent\":\"こんに",
            "ちは\"}}]}\n",
            "data: [DONE]\n",
        ])
        .await;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].as_ref().unwrap(), "こんにちは");
    }

    #[tokio::test]
    async fn test_stream_reassembles_split_multibyte_char() {
        let line = "data: {\"choices\":[{\"delta\":{\"content\":\"é\"}}]}\n";
        let bytes = line.as_bytes();
        let split = line.find('é').unwrap() + 1;
        let (head, tail) = bytes.split_at(split);

        let byte_stream = stream::iter(vec![
            Ok::<_, reqwest::Error>(Bytes::copy_from_slice(head)),
            Ok(Bytes::copy_from_slice(tail)),
        ]);
        let items: Vec<Result<String>> = sse_to_text_stream(byte_stream).collect().await;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].as_ref().unwrap(), "é");
    }

    #[tokio::test]
    async fn test_stream_without_done_ends_with_body() {
        let items = collect(vec![
            "data: {\"choices\":[{\"delta\":{\"content\":\"a\"}}]}\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"b\"}}]}",
        ])
        .await;

        let fragments: Vec<String> = items.into_iter().map(std::result::Result::unwrap).collect();
        assert_eq!(fragments, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_stream_error_payload_ends_stream() {
        let items = collect(vec![
            "data: {\"choices\":[{\"delta\":{\"content\":\"partial\"}}]}\n",
            "data: {\"error\":{\"message\":\"overloaded\"}}\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"never\"}}]}\n",
        ])
        .await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap(), "partial");
        assert!(matches!(items[1], Err(WikiError::Transport { .. })));
    }
}
