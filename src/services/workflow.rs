// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

//! The `start` command: diff, generate, choose, commit, then maybe push.
//!
//! Every step waits for the previous one. A failure in diff, generation or
//! commit ends the run with `Err`; a failed push is reported and the run
//! still ends in [`RunOutcome::PushFailed`].

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::domain::RunOutcome;
use crate::error::Result;
use crate::services::git::VersionControl;
use crate::services::llm::MessageGenerator;
use crate::services::prompter::Prompter;

pub struct CommitWorkflow<'a, V: ?Sized, G: ?Sized, P: ?Sized> {
    git: &'a V,
    generator: &'a G,
    prompter: &'a P,
}

impl<'a, V, G, P> CommitWorkflow<'a, V, G, P>
where
    V: VersionControl + ?Sized,
    G: MessageGenerator + ?Sized,
    P: Prompter + ?Sized,
{
    pub fn new(git: &'a V, generator: &'a G, prompter: &'a P) -> Self {
        Self {
            git,
            generator,
            prompter,
        }
    }

    pub async fn run(&self, auto: bool) -> Result<RunOutcome> {
        let diff = self.git.diff().await?;
        debug!(bytes = diff.len(), "state: diff fetched");

        if diff.is_blank() {
            eprintln!("{} No changes to commit.", style("info:").cyan());
            debug!("state: no changes");
            return Ok(RunOutcome::NoChanges);
        }

        let spinner = spinner(&format!("Generating with {}...", self.generator.name()));
        let generated = self.generator.generate(&diff).await;
        spinner.finish_and_clear();
        let candidates = generated?;
        debug!(count = candidates.as_slice().len(), "state: messages generated");

        let message = if auto {
            let first = candidates.first().to_string();
            eprintln!(
                "{} Auto-selected commit message: {}",
                style("→").cyan(),
                style(format!("\"{first}\"")).green()
            );
            first
        } else {
            self.prompter.choose_message(&candidates)?
        };
        debug!(auto, "state: message chosen");

        self.git.stage_and_commit(&message).await?;
        eprintln!(
            "{} Committed with message: {}",
            style("✓").green().bold(),
            style(format!("\"{message}\"")).green()
        );
        debug!("state: committed");

        if !self.prompter.confirm_push()? {
            debug!("state: push skipped");
            return Ok(RunOutcome::PushSkipped);
        }

        match self.git.push().await {
            Ok(()) => {
                eprintln!("{} Changes pushed successfully!", style("✓").green().bold());
                debug!("state: pushed");
                Ok(RunOutcome::Pushed)
            }
            Err(e) => {
                debug!(error = %e, "state: push failed");
                eprintln!("{} Error pushing changes: {e}", style("✗").red().bold());
                Ok(RunOutcome::PushFailed(e.to_string()))
            }
        }
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(s) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(s);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
