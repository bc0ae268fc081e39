use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::{Command, Output};

/// check whether `path` is inside a git working tree
///
/// git exiting with an error (eg. "not a git repository") is reported as
/// `false`, only failing to run git at all is an error
pub fn is_work_tree(path: &Path) -> Result<bool> {
    let output = run_git(path, &["rev-parse", "--is-inside-work-tree"])?;
    Ok(output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "true")
}

/// check whether the index differs from HEAD
pub fn has_staged_changes(path: &Path) -> Result<bool> {
    let output = run_git(path, &["diff", "--staged", "--quiet"])?;

    // --quiet implies --exit-code: 1 means differences, 0 means none
    match output.status.code() {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        _ => bail!(
            "failed to check for staged changes: {}",
            stderr_or_status(&output)
        ),
    }
}

/// get the unified diff of staged changes as plain text
pub fn staged_diff(path: &Path) -> Result<String> {
    let output = run_git(path, &["diff", "--staged", "--no-color", "--no-ext-diff"])?;
    if !output.status.success() {
        bail!("failed to read staged diff: {}", stderr_or_status(&output));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn run_git(path: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .with_context(|| format!("failed to run git {}", args.join(" ")))
}

fn stderr_or_status(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        format!("git exited with {}", output.status)
    } else {
        stderr
    }
}
