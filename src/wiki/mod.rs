mod client;
mod prompt;
mod sse_parser;

pub use client::{
    ChatClient, ChatRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, FragmentStream,
};
pub use prompt::{Prompt, SYSTEM_PROMPT_TEMPLATE, TIMESTAMP_FORMAT, build_prompt};
