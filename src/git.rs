use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;
use std::process::Command as GitCommand;

/// Run a git command and capture stdout as String.
pub fn git_output(args: &[&str]) -> Result<String> {
    let output = GitCommand::new("git")
        .args(args)
        .output()
        .with_context(|| format!("failed to run git {:?}", args))?;

    if !output.status.success() {
        return Err(anyhow!(
            "git {:?} exited with status {:?}",
            args,
            output.status.code()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Get the full staged diff.
pub fn staged_diff() -> Result<String> {
    git_output(&["diff", "--cached"])
}

/// Get the path to the Git directory (e.g. .git)
fn git_dir() -> Result<PathBuf> {
    let dir = git_output(&["rev-parse", "--git-dir"])?.trim().to_string();
    Ok(PathBuf::from(dir))
}

/// Write the commit message into .git/COMMIT_EDITMSG so the next
/// `git commit` will use it as the default message in the editor.
pub fn write_commit_editmsg(message: &str) -> Result<PathBuf> {
    let path = git_dir()?.join("COMMIT_EDITMSG");
    fs::write(&path, message)
        .with_context(|| format!("failed to write commit message to {:?}", path))?;
    Ok(path)
}
