// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::Diff;
use crate::error::{Error, Result};

/// The version-control operations the commit workflow needs.
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Unstaged working-tree changes
    async fn diff(&self) -> Result<Diff>;

    /// Stage everything, then commit with `message`
    async fn stage_and_commit(&self, message: &str) -> Result<()>;

    /// Push the current branch to its configured remote
    async fn push(&self) -> Result<()>;
}

/// Shells out to the system `git`, inheriting the user's config, hooks,
/// SSH agent and credential helpers.
pub struct GitService {
    work_dir: PathBuf,
}

impl GitService {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    /// Run in the process's current directory
    pub fn current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        debug!(command = %command, dir = %self.work_dir.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .await
            .map_err(|e| Error::ExternalCommand {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            // `git commit` with nothing to commit reports on stdout
            let message = match (stderr.trim(), stdout.trim()) {
                ("", "") => format!("exited with {}", output.status),
                ("", out) => out.to_string(),
                (err, _) => err.to_string(),
            };
            return Err(Error::ExternalCommand { command, message });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl VersionControl for GitService {
    async fn diff(&self) -> Result<Diff> {
        let out = self.run(&["diff", "--no-ext-diff", "--no-color"]).await?;
        debug!(bytes = out.len(), "diff fetched");
        Ok(Diff::new(out))
    }

    async fn stage_and_commit(&self, message: &str) -> Result<()> {
        self.run(&["add", "."]).await?;
        self.run(&["commit", "-m", message]).await?;
        Ok(())
    }

    async fn push(&self) -> Result<()> {
        self.run(&["push"]).await?;
        Ok(())
    }
}
