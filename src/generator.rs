use anyhow::{anyhow, Result};

use crate::config::Config;
use crate::llm::{prompt_builder, ChatBackend, ChatRequest};
use crate::text::align_message;

/// Last-resort model id when the snapshot carries none at all. Distinct
/// from the configuration-schema fallback, which is applied earlier.
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_MAX_TOKENS: u32 = 196;

pub const NO_MESSAGE_GENERATED: &str = "No commit message were generated. Try again.";

/// Turns one diff into a Conventional Commits message with exactly one
/// chat-completion call against the bound backend.
pub struct CommitMessageGenerator {
    config: Config,
    backend: Box<dyn ChatBackend>,
}

impl CommitMessageGenerator {
    /// Bind a configuration snapshot and a backend. The snapshot is not
    /// re-read afterwards; callers construct a fresh generator per
    /// operation.
    pub fn new(config: Config, backend: Box<dyn ChatBackend>) -> Self {
        CommitMessageGenerator { config, backend }
    }

    /// Generate the commit message for `diff`, then align it with the
    /// optional per-line delimiter. Fails when the API yields no usable
    /// content; no retry is attempted.
    pub fn generate(&self, diff: &str, delimiter: Option<&str>) -> Result<String> {
        let language = self.config.language;
        let messages = prompt_builder::build_messages(diff, language);

        let model = if self.config.model.trim().is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            self.config.model.clone()
        };

        let request = ChatRequest {
            model,
            messages,
            temperature: self.config.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: self.config.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        };

        let completion = self.backend.complete(&request)?;

        log::info!("endpoint: {}", self.config.custom_endpoint);
        log::info!("model: {}", request.model);
        log::info!("language: {}", language.as_str());
        if let Some(usage) = &completion.usage {
            if let Some(n) = usage.prompt_tokens {
                log::info!("prompt tokens: {n}");
            }
            if let Some(n) = usage.completion_tokens {
                log::info!("completion tokens: {n}");
            }
            if let Some(n) = usage.total_tokens {
                log::info!("total tokens: {n}");
            }
        }

        let content = completion
            .content
            .filter(|content| !content.is_empty())
            .ok_or_else(|| anyhow!(NO_MESSAGE_GENERATED))?;

        Ok(align_message(&content, delimiter))
    }
}
