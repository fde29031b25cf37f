use futures_util::Stream;
use reqwest::Client;
use serde::Serialize;
use std::borrow::Cow;
use std::pin::Pin;

use super::prompt::Prompt;
use super::sse_parser::sse_to_text_stream;
use crate::error::{Result, WikiError};

pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// A finite, one-shot stream of generated text fragments.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub prompt: Prompt,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatRequest {
    /// Creates a request with the default sampling settings.
    pub fn new(model: impl Into<String>, prompt: Prompt) -> Self {
        Self {
            model: model.into(),
            prompt,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

impl<'a> From<&'a ChatRequest> for ChatCompletionRequest<'a> {
    fn from(request: &'a ChatRequest) -> Self {
        Self {
            model: &request.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(&request.prompt.system),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(&request.prompt.user),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: true,
        }
    }
}

/// Client for an OpenAI-compatible chat-completion endpoint.
pub struct ChatClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }

    /// Sends `request` and returns the generated text as it arrives.
    ///
    /// Connection failures and non-success statuses are reported before any
    /// fragment is produced.
    pub async fn stream_completion(&self, request: &ChatRequest) -> Result<FragmentStream> {
        let url = self.completions_url();
        let body = ChatCompletionRequest::from(request);

        tracing::debug!(%url, model = %request.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                WikiError::transport(format!("Failed to connect to API endpoint {url}: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WikiError::transport(format!(
                "API request failed with status {status}: {body}"
            )));
        }

        Ok(Box::pin(sse_to_text_stream(response.bytes_stream())))
    }
}
