use clap::{ArgGroup, Parser};

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "commitgen",
    version,
    about = "Turn your staged diff into a Conventional Commits message"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// Prefix every line of the generated message with this delimiter
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Endpoint: openai, perplexity, ollama, ollama-cloud, or an http(s) URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Model name to use (e.g. gpt-4o-mini)
    #[arg(long, env = "COMMITGEN_MODEL")]
    pub model: Option<String>,

    /// Disable model calls; return a dummy message instead
    #[arg(long)]
    pub no_model: bool,

    /// API key (otherwise uses OPENAI_API_KEY env var or the config file)
    #[arg(long, env = "OPENAI_API_KEY")]
    pub api_key: Option<String>,

    /// Language of the generated message (e.g. English, Korean, Japanese)
    #[arg(long)]
    pub language: Option<String>,

    /// Write the generated message into .git/COMMIT_EDITMSG (no commit is created)
    #[arg(long)]
    pub apply: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
