use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::cli_args::Cli;
use crate::endpoint;
use crate::validation::is_valid_model;

/// Fallback model id when a persisted model is invalid for its endpoint.
pub const DEFAULT_MODEL: &str = "gpt-4.1";
pub const DEFAULT_ENDPOINT: &str = "openai";

/// Which message generator backs the tool. A single variant today; kept as
/// an enum so persisted values are validated like every other setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Default,
}

impl Generator {
    pub fn as_str(&self) -> &'static str {
        "default-generator"
    }

    fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "default-generator" => Some(Generator::Default),
            _ => None,
        }
    }
}

/// How the generated message is handed back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproveMethod {
    /// Print a preview to stdout.
    QuickPick,
    /// Write .git/COMMIT_EDITMSG so the next `git commit` opens pre-filled.
    MessageFile,
}

impl ApproveMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApproveMethod::QuickPick => "quick-pick",
            ApproveMethod::MessageFile => "message-file",
        }
    }

    fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "quick-pick" => Some(ApproveMethod::QuickPick),
            "message-file" => Some(ApproveMethod::MessageFile),
            _ => None,
        }
    }
}

/// Output language for the generated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Korean,
    Japanese,
    Chinese,
    Spanish,
    Arabic,
    Portuguese,
    Russian,
    French,
    German,
    Italian,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Korean => "Korean",
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese",
            Language::Spanish => "Spanish",
            Language::Arabic => "Arabic",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
        }
    }

    fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "English" => Some(Language::English),
            "Korean" => Some(Language::Korean),
            "Japanese" => Some(Language::Japanese),
            "Chinese" => Some(Language::Chinese),
            "Spanish" => Some(Language::Spanish),
            "Arabic" => Some(Language::Arabic),
            "Portuguese" => Some(Language::Portuguese),
            "Russian" => Some(Language::Russian),
            "French" => Some(Language::French),
            "German" => Some(Language::German),
            "Italian" => Some(Language::Italian),
            _ => None,
        }
    }
}

/// A parsed setting plus whether an invalid raw value was silently replaced.
///
/// `defaulted` is false both for valid user values and for absent ones;
/// it is true only when something was configured and rejected. Invalid
/// settings never produce errors, only this flag and a debug log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    pub defaulted: bool,
}

fn parse_with_default<T>(
    raw: Option<&str>,
    parse: impl FnOnce(&str) -> Option<T>,
    default: T,
) -> Parsed<T> {
    match raw {
        None => Parsed { value: default, defaulted: false },
        Some(raw) => match parse(raw) {
            Some(value) => Parsed { value, defaulted: false },
            None => Parsed { value: default, defaulted: true },
        },
    }
}

/// A custom_endpoint value is kept verbatim when it is a known provider
/// name or an http(s) URL; anything else falls back to "openai".
fn parse_endpoint(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    let known = matches!(
        normalized.as_str(),
        "openai" | "perplexity" | "ollama" | "ollama-cloud"
    );

    if known || normalized.starts_with("http") {
        Some(raw.to_string())
    } else {
        None
    }
}

/// Final resolved configuration snapshot, immutable per read.
#[derive(Debug, Clone)]
pub struct Config {
    pub delimiter: Option<String>,
    pub generator: Generator,
    pub approve_method: ApproveMethod,
    pub api_key: Option<String>,
    pub custom_endpoint: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub language: Language,
}

impl Config {
    /// Build the final snapshot from CLI flags, environment, TOML file,
    /// and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--endpoint`, ...; `--model` and
    ///      `--api-key` also pick up COMMITGEN_MODEL / OPENAI_API_KEY)
    ///   2. TOML `~/.config/commitgen.toml`
    ///   3. Hardcoded defaults
    ///
    /// Invalid enum-valued or model settings silently revert to their
    /// defaults; the fallback is logged at debug level, never an error.
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();
        merge(cli, file_cfg)
    }
}

fn merge(cli: &Cli, file_cfg: FileConfig) -> Config {
    let delimiter = cli
        .delimiter
        .clone()
        .or(file_cfg.appearance.delimiter)
        .filter(|d| !d.is_empty());

    let generator = parse_with_default(
        file_cfg.general.generator.as_deref(),
        Generator::from_raw,
        Generator::Default,
    );
    if generator.defaulted {
        debug!(
            "invalid general.generator in config, using '{}'",
            Generator::Default.as_str()
        );
    }

    let approve_method = parse_with_default(
        file_cfg.general.message_approve_method.as_deref(),
        ApproveMethod::from_raw,
        ApproveMethod::QuickPick,
    );
    if approve_method.defaulted {
        debug!(
            "invalid general.message_approve_method in config, using '{}'",
            ApproveMethod::QuickPick.as_str()
        );
    }

    let endpoint_raw = cli.endpoint.clone().or(file_cfg.openai.custom_endpoint);
    let custom_endpoint = parse_with_default(
        endpoint_raw.as_deref(),
        parse_endpoint,
        DEFAULT_ENDPOINT.to_string(),
    );
    if custom_endpoint.defaulted {
        debug!(
            "unrecognized openai.custom_endpoint {:?}, using '{DEFAULT_ENDPOINT}'",
            endpoint_raw
        );
    }

    // Model acceptance depends on the endpoint that was just settled.
    let spec = endpoint::resolve(&custom_endpoint.value);
    let model_raw = cli.model.clone().or(file_cfg.openai.gpt_version);
    let model = parse_with_default(
        model_raw.as_deref(),
        |raw| is_valid_model(raw, &spec).then(|| raw.to_string()),
        DEFAULT_MODEL.to_string(),
    );
    if model.defaulted {
        debug!(
            "model {:?} is not valid for endpoint '{}', using '{DEFAULT_MODEL}'",
            model_raw, custom_endpoint.value
        );
    }

    let language = parse_with_default(
        cli.language
            .as_deref()
            .or(file_cfg.openai.language.as_deref()),
        Language::from_raw,
        Language::English,
    );
    if language.defaulted {
        debug!("unrecognized openai.language, using 'English'");
    }

    Config {
        delimiter,
        generator: generator.value,
        approve_method: approve_method.value,
        api_key: cli.api_key.clone().or(file_cfg.openai.api_key),
        custom_endpoint: custom_endpoint.value,
        model: model.value,
        temperature: file_cfg.openai.temperature,
        max_tokens: file_cfg.openai.max_tokens,
        language: language.value,
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    appearance: AppearanceSection,
    #[serde(default)]
    general: GeneralSection,
    #[serde(default)]
    openai: OpenAiSection,
}

#[derive(Debug, Default, Deserialize)]
struct AppearanceSection {
    delimiter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GeneralSection {
    generator: Option<String>,
    message_approve_method: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenAiSection {
    api_key: Option<String>,
    custom_endpoint: Option<String>,
    gpt_version: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    language: Option<String>,
}

/// Return `~/.config/commitgen.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("commitgen.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Built literally rather than via Cli::parse_from so the env-backed
    // args (--model, --api-key) cannot pick up real environment values.
    fn bare_cli() -> Cli {
        Cli {
            delimiter: None,
            endpoint: None,
            model: None,
            no_model: false,
            api_key: None,
            language: None,
            apply: false,
            verbose: 0,
        }
    }

    #[test]
    fn parse_with_default_distinguishes_absent_from_invalid() {
        let absent = parse_with_default(None, Generator::from_raw, Generator::Default);
        assert_eq!(absent.value, Generator::Default);
        assert!(!absent.defaulted);

        let valid = parse_with_default(
            Some("default-generator"),
            Generator::from_raw,
            Generator::Default,
        );
        assert!(!valid.defaulted);

        let invalid = parse_with_default(Some("ChatGPT-5"), Generator::from_raw, Generator::Default);
        assert_eq!(invalid.value, Generator::Default);
        assert!(invalid.defaulted);
    }

    #[test]
    fn endpoint_union_accepts_known_names_and_urls() {
        assert_eq!(parse_endpoint("openai").as_deref(), Some("openai"));
        assert_eq!(parse_endpoint("ollama-cloud").as_deref(), Some("ollama-cloud"));
        assert_eq!(
            parse_endpoint("https://gw.example/v1").as_deref(),
            Some("https://gw.example/v1")
        );
        assert_eq!(parse_endpoint("gemini"), None);
    }

    #[test]
    fn invalid_enum_settings_fall_back_silently() {
        let file_cfg = FileConfig {
            general: GeneralSection {
                generator: Some("something-else".into()),
                message_approve_method: Some("carrier-pigeon".into()),
            },
            ..Default::default()
        };

        let cfg = merge(&bare_cli(), file_cfg);
        assert_eq!(cfg.generator, Generator::Default);
        assert_eq!(cfg.approve_method, ApproveMethod::QuickPick);
    }

    #[test]
    fn invalid_model_falls_back_to_default_model() {
        let file_cfg = FileConfig {
            openai: OpenAiSection {
                custom_endpoint: Some("openai".into()),
                gpt_version: Some("not-a-model".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let cfg = merge(&bare_cli(), file_cfg);
        assert_eq!(cfg.model, DEFAULT_MODEL);
    }

    #[test]
    fn open_endpoints_keep_arbitrary_models() {
        let file_cfg = FileConfig {
            openai: OpenAiSection {
                custom_endpoint: Some("ollama".into()),
                gpt_version: Some("qwen2.5:14b".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let cfg = merge(&bare_cli(), file_cfg);
        assert_eq!(cfg.model, "qwen2.5:14b");
    }

    #[test]
    fn cli_flags_win_over_file_values() {
        let cli = Cli {
            delimiter: Some("*".into()),
            endpoint: Some("perplexity".into()),
            model: Some("llama-3-8b-instruct".into()),
            language: Some("Korean".into()),
            ..bare_cli()
        };
        let file_cfg = FileConfig {
            appearance: AppearanceSection { delimiter: Some("-".into()) },
            openai: OpenAiSection {
                custom_endpoint: Some("openai".into()),
                gpt_version: Some("gpt-4o".into()),
                language: Some("German".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let cfg = merge(&cli, file_cfg);
        assert_eq!(cfg.custom_endpoint, "perplexity");
        assert_eq!(cfg.model, "llama-3-8b-instruct");
        assert_eq!(cfg.language, Language::Korean);
        assert_eq!(cfg.delimiter.as_deref(), Some("*"));
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let file_cfg = FileConfig {
            openai: OpenAiSection {
                language: Some("Klingon".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let cfg = merge(&bare_cli(), file_cfg);
        assert_eq!(cfg.language, Language::English);
    }

    #[test]
    fn defaults_when_nothing_is_configured() {
        let cfg = merge(&bare_cli(), FileConfig::default());
        assert_eq!(cfg.custom_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.language, Language::English);
        assert_eq!(cfg.delimiter, None);
        assert_eq!(cfg.temperature, None);
        assert_eq!(cfg.max_tokens, None);
    }
}
