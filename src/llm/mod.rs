pub mod openai;
pub mod prompt_builder;
mod prompts;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A single role-tagged message in the chat transcript.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage { role: "system".into(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage { role: "user".into(), content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage { role: "assistant".into(), content: content.into() }
    }
}

/// One chat-completion request. Every supported endpoint speaks this shape.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Token counters reported by the provider; each is independently optional.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

/// Outcome of one completion call, before normalization.
#[derive(Debug)]
pub struct ChatCompletion {
    /// First choice's message content; `None` when the API returned nothing usable.
    pub content: Option<String>,
    pub usage: Option<TokenUsage>,
}

/// Trait for talking to a chat-completion backend (real or dummy).
pub trait ChatBackend: Send + Sync + std::fmt::Debug {
    /// Issue exactly one completion request and return the first choice.
    fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion>;
}

/// No-op backend for `--no-model` runs; answers with a canned message.
#[derive(Debug)]
pub struct DummyClient;

impl ChatBackend for DummyClient {
    fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion> {
        Ok(ChatCompletion {
            content: Some(format!(
                "chore: dummy commit message (LLM disabled)\n\nmodel: {}\nprompt messages: {}",
                request.model,
                request.messages.len()
            )),
            usage: None,
        })
    }
}
