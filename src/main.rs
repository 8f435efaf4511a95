mod cli_args;
mod config;
mod endpoint;
mod generator;
mod git;
mod llm;
mod logging;
mod setup;
mod text;
mod validation;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use cli_args::Cli;
use config::{ApproveMethod, Config};
use generator::CommitMessageGenerator;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let cfg = Config::from_sources(&cli);

    let diff = git::staged_diff()?;
    if diff.trim().is_empty() {
        println!("No staged changes found.");
        return Ok(());
    }

    let backend = setup::build_backend(&cfg, cli.no_model)?;
    let generator = CommitMessageGenerator::new(cfg.clone(), backend);

    let spinner = wait_spinner();
    let result = generator.generate(&diff, cfg.delimiter.as_deref());
    spinner.finish_and_clear();
    let message = result?;

    let approve_method = if cli.apply {
        ApproveMethod::MessageFile
    } else {
        cfg.approve_method
    };

    match approve_method {
        ApproveMethod::MessageFile => {
            let path = git::write_commit_editmsg(&message)?;
            println!(
                "Commit message written to {}; run `git commit` to review it.",
                path.display()
            );
        }
        ApproveMethod::QuickPick => {
            println!();
            println!("----- Commit Message Preview -----");
            println!("{message}");
            println!("----------------------------------");
        }
    }

    Ok(())
}

fn wait_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static spinner template"),
    );
    spinner.set_message("Generating commit message...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
