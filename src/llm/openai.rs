use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{ChatBackend, ChatCompletion, ChatRequest, TokenUsage};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Minimal response structs for the OpenAI-compatible Chat Completions API.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<TokenUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

/// Blocking client for any OpenAI-compatible endpoint.
#[derive(Debug)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// `base_url` of `None` means the OpenAI provider default. A supplied
    /// base must already carry its version segment where the provider
    /// expects one (e.g. `http://localhost:11434/v1`).
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(90))
            .build()
            .expect("failed to build HTTP client");

        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        OpenAiClient {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl ChatBackend for OpenAiClient {
    fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion> {
        let url = self.chat_url();

        log::info!("Calling {} with model {:?}", url, request.model);

        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .context("failed to send chat completion request")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            return Err(anyhow!(
                "chat completion API error: HTTP {} - {}",
                status.as_u16(),
                text
            ));
        }

        let chat_resp: ChatResponse = resp
            .json()
            .context("failed to parse chat completion response")?;

        let content = chat_resp
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        Ok(ChatCompletion {
            content,
            usage: chat_resp.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_joins_without_doubled_slashes() {
        let client = OpenAiClient::new("sk-test".into(), Some("http://localhost:11434/v1/".into()));
        assert_eq!(client.chat_url(), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn missing_base_url_falls_back_to_openai() {
        let client = OpenAiClient::new("sk-test".into(), None);
        assert_eq!(client.chat_url(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn response_with_null_content_deserializes() {
        let raw = r#"{"choices":[{"message":{"content":null}}],"usage":null}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }

    #[test]
    fn usage_counters_are_independently_optional() {
        let raw = r#"{"choices":[{"message":{"content":"feat: x"}}],"usage":{"prompt_tokens":12}}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let usage = parsed.usage.unwrap();
        assert_eq!(usage.prompt_tokens, Some(12));
        assert_eq!(usage.completion_tokens, None);
        assert_eq!(usage.total_tokens, None);
    }
}
