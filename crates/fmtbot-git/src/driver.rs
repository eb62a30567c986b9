use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tokio::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of the staged-diff probe. Both variants are success outcomes; the
/// probe's non-zero exit must never reach the generic error path.
pub enum StagedDiff {
    Clean,
    Changed,
}

#[derive(Debug, Clone)]
/// Runs `git` subcommands inside one working directory, treated as an
/// exclusively-owned scratch resource for the duration of a run.
pub struct GitDriver {
    workdir: PathBuf,
}

impl GitDriver {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub async fn fetch(&self, remote: &str, refspec: &str) -> Result<()> {
        self.run_checked(&["fetch", remote, refspec]).await
    }

    pub async fn checkout(&self, refspec: &str) -> Result<()> {
        self.run_checked(&["checkout", refspec]).await
    }

    pub async fn configure_identity(&self, user_name: &str, user_email: &str) -> Result<()> {
        self.run_checked(&["config", "user.name", user_name]).await?;
        self.run_checked(&["config", "user.email", user_email]).await
    }

    /// Stages the given paths. An empty set is a no-op so a run with nothing
    /// to format still reaches the diff probe.
    pub async fn stage(&self, paths: &[String]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.run_checked(&args).await
    }

    /// Probes whether the index differs from HEAD. Exit 0 decodes to `Clean`,
    /// exit 1 to `Changed`; any other exit is a real failure.
    pub async fn diff_cached(&self) -> Result<StagedDiff> {
        let args = ["diff", "--cached", "--quiet"];
        let output = self.run(&args).await?;
        match output.status.code() {
            Some(0) => Ok(StagedDiff::Clean),
            Some(1) => Ok(StagedDiff::Changed),
            _ => bail!(
                "git {} exited with {}: {}",
                args.join(" "),
                describe_exit(output.status.code()),
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        }
    }

    pub async fn commit(&self, message: &str) -> Result<()> {
        self.run_checked(&["commit", "-m", message]).await
    }

    pub async fn push(&self) -> Result<()> {
        self.run_checked(&["push"]).await
    }

    async fn run(&self, args: &[&str]) -> Result<std::process::Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .await
            .with_context(|| {
                format!(
                    "failed to spawn git {} in {}",
                    args.first().copied().unwrap_or_default(),
                    self.workdir.display()
                )
            })
    }

    async fn run_checked(&self, args: &[&str]) -> Result<()> {
        let output = self.run(args).await?;
        if !output.status.success() {
            bail!(
                "git {} exited with {}: {}",
                args.join(" "),
                describe_exit(output.status.code()),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
