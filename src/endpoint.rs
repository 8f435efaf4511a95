/// Which provider or gateway a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    OpenAi,
    Perplexity,
    Ollama,
    OllamaCloud,
    HttpUrl,
}

impl EndpointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointKind::OpenAi => "openai",
            EndpointKind::Perplexity => "perplexity",
            EndpointKind::Ollama => "ollama",
            EndpointKind::OllamaCloud => "ollama-cloud",
            EndpointKind::HttpUrl => "http-url",
        }
    }
}

/// Which model names an endpoint accepts.
///
/// Hosted commercial providers expose a closed catalog; self-hosted and
/// gateway endpoints accept whatever the caller runs, with a short list
/// kept around purely as suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelCatalog {
    Fixed(&'static [&'static str]),
    Open { suggestions: &'static [&'static str] },
}

/// Connection parameters and acceptance rules derived from a raw
/// endpoint identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSpec {
    pub kind: EndpointKind,
    /// Absent means the provider default (api.openai.com/v1).
    pub base_url: Option<String>,
    /// Placeholder credential substituted when the user supplied none.
    pub default_api_key: Option<&'static str>,
    /// Empty means no prefix check.
    pub required_key_prefix: &'static str,
    pub models: ModelCatalog,
}

pub const OPENAI_MODELS: &[&str] = &[
    "gpt-4.1",
    "gpt-4.1-mini",
    "gpt-4.1-nano",
    "gpt-4o",
    "gpt-4o-2024-11-20",
    "gpt-4o-2024-08-06",
    "gpt-4o-2024-05-13",
    "gpt-4o-mini",
    "gpt-4o-mini-2024-07-18",
    "o3-mini",
];

pub const PERPLEXITY_MODELS: &[&str] = &[
    "llama-3-sonar-small-32k-chat",
    "llama-3-sonar-small-32k-online",
    "llama-3-sonar-large-32k-chat",
    "llama-3-sonar-large-32k-online",
    "llama-3-8b-instruct",
    "llama-3-70b-instruct",
    "mixtral-8x7b-instruct",
];

pub const OLLAMA_SUGGESTIONS: &[&str] = &["codellama:7b", "qwen2.5:latest", "qwen2.5:7b"];

const OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";
const OLLAMA_CLOUD_BASE_URL: &str = "https://api.ollama.com/v1";
const PERPLEXITY_BASE_URL: &str = "https://api.perplexity.ai";

/// Resolve a raw endpoint identifier into an `EndpointSpec`.
///
/// Matching happens on the lower-cased, trimmed input and never fails:
/// anything that is not a known name and does not start with `http` is
/// treated as OpenAI. The `http` check must stay ahead of that fallback so
/// arbitrary OpenAI-compatible gateways work without being enumerated here.
pub fn resolve(custom_endpoint: &str) -> EndpointSpec {
    let endpoint = custom_endpoint.trim().to_lowercase();

    match endpoint.as_str() {
        "perplexity" => EndpointSpec {
            kind: EndpointKind::Perplexity,
            base_url: Some(PERPLEXITY_BASE_URL.to_string()),
            default_api_key: None,
            required_key_prefix: "pplx-",
            models: ModelCatalog::Fixed(PERPLEXITY_MODELS),
        },
        "ollama" => EndpointSpec {
            kind: EndpointKind::Ollama,
            base_url: Some(OLLAMA_BASE_URL.to_string()),
            default_api_key: Some("ollama"),
            required_key_prefix: "",
            models: ModelCatalog::Open {
                suggestions: OLLAMA_SUGGESTIONS,
            },
        },
        "ollama-cloud" => EndpointSpec {
            kind: EndpointKind::OllamaCloud,
            base_url: Some(OLLAMA_CLOUD_BASE_URL.to_string()),
            default_api_key: None,
            required_key_prefix: "ollama_",
            models: ModelCatalog::Open {
                suggestions: OLLAMA_SUGGESTIONS,
            },
        },
        _ if endpoint.starts_with("http") => EndpointSpec {
            kind: EndpointKind::HttpUrl,
            base_url: Some(endpoint),
            default_api_key: None,
            required_key_prefix: "",
            models: ModelCatalog::Open {
                suggestions: OLLAMA_SUGGESTIONS,
            },
        },
        _ => EndpointSpec {
            kind: EndpointKind::OpenAi,
            base_url: None,
            default_api_key: None,
            required_key_prefix: "sk-",
            models: ModelCatalog::Fixed(OPENAI_MODELS),
        },
    }
}
