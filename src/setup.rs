use anyhow::{anyhow, Result};
use log::debug;

use crate::config::Config;
use crate::endpoint;
use crate::llm::openai::OpenAiClient;
use crate::llm::{ChatBackend, DummyClient};
use crate::validation::is_valid_api_key;

/// Build the chat backend from the configuration snapshot.
///
/// Resolves the endpoint, substitutes the placeholder credential for
/// keyless local endpoints, and rejects keys that break the endpoint's
/// prefix contract before any request is sent.
pub fn build_backend(cfg: &Config, no_model: bool) -> Result<Box<dyn ChatBackend>> {
    if no_model {
        debug!("Using DummyClient (no model calls).");
        return Ok(Box::new(DummyClient));
    }

    let spec = endpoint::resolve(&cfg.custom_endpoint);

    let mut api_key = cfg.api_key.clone().unwrap_or_default();
    if api_key.trim().is_empty() {
        if let Some(placeholder) = spec.default_api_key {
            api_key = placeholder.to_string();
        }
    }

    if !is_valid_api_key(&api_key, &spec) {
        return Err(if spec.required_key_prefix.is_empty() {
            anyhow!("an API key is required for endpoint '{}'", cfg.custom_endpoint)
        } else {
            anyhow!(
                "API key for endpoint '{}' must start with '{}'",
                cfg.custom_endpoint,
                spec.required_key_prefix
            )
        });
    }

    debug!(
        "Using OpenAiClient for endpoint '{}' ({})",
        cfg.custom_endpoint,
        spec.kind.as_str()
    );

    Ok(Box::new(OpenAiClient::new(api_key, spec.base_url)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApproveMethod, Generator, Language};

    fn snapshot(endpoint: &str, api_key: Option<&str>) -> Config {
        Config {
            delimiter: None,
            generator: Generator::Default,
            approve_method: ApproveMethod::QuickPick,
            api_key: api_key.map(str::to_string),
            custom_endpoint: endpoint.into(),
            model: "gpt-4.1".into(),
            temperature: None,
            max_tokens: None,
            language: Language::English,
        }
    }

    #[test]
    fn no_model_short_circuits_to_the_dummy_client() {
        assert!(build_backend(&snapshot("openai", None), true).is_ok());
    }

    #[test]
    fn missing_key_is_rejected_with_the_expected_prefix() {
        let err = build_backend(&snapshot("openai", None), false).unwrap_err();
        assert!(err.to_string().contains("sk-"));

        let err = build_backend(&snapshot("perplexity", Some("sk-wrong")), false).unwrap_err();
        assert!(err.to_string().contains("pplx-"));
    }

    #[test]
    fn ollama_works_without_any_key() {
        assert!(build_backend(&snapshot("ollama", None), false).is_ok());
    }

    #[test]
    fn http_gateways_need_some_key_but_no_prefix() {
        let err = build_backend(&snapshot("http://gw.local/v1", None), false).unwrap_err();
        assert!(err.to_string().contains("API key is required"));

        assert!(build_backend(&snapshot("http://gw.local/v1", Some("token")), false).is_ok());
    }
}
