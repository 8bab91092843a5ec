// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use console::style;
use tracing::debug;

use crate::cli::{Cli, Commands, SetTarget};
use crate::config::Config;
use crate::domain::RunOutcome;
use crate::error::{Error, Result};
use crate::services::{
    credentials::CredentialStore,
    git::GitService,
    llm,
    prompter::{Prompter, TerminalPrompter},
    workflow::CommitWorkflow,
};

pub struct App {
    cli: Cli,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Set {
                target: SetTarget::Token,
            } => self.set_token(),
            Commands::Start { auto } => self.start(*auto).await.map(|_| ()),
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => self.show_config(),
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "commit-ai", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    async fn start(&self, auto: bool) -> Result<RunOutcome> {
        let config = Config::load()?;
        debug!(
            model = %config.model,
            base_url = %config.openai_base_url,
            key_set = config.api_key.is_some(),
            "config loaded"
        );

        let git = GitService::current_dir()?;
        let generator = llm::create_generator(&config);
        let prompter = TerminalPrompter;

        let outcome = CommitWorkflow::new(&git, &generator, &prompter)
            .run(auto)
            .await?;
        debug!(?outcome, committed = outcome.committed(), "run finished");
        Ok(outcome)
    }

    // ─── Credential Commands ───

    fn set_token(&self) -> Result<()> {
        let path = Config::credential_path()
            .ok_or_else(|| Error::Config("Cannot determine config directory".into()))?;
        let store = CredentialStore::new(path);

        let token = TerminalPrompter.collect_credential()?;
        store.save(&token)?;

        eprintln!(
            "{} OpenAI API token set successfully! ({})",
            style("✓").green().bold(),
            style(store.path().display()).dim()
        );
        Ok(())
    }

    fn show_config(&self) -> Result<()> {
        let config = Config::load()?;
        let shown = |p: Option<std::path::PathBuf>| {
            p.map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unavailable)".into())
        };

        println!("Model: {}", config.model);
        println!("Base URL: {}", config.openai_base_url);
        match config.timeout_secs {
            Some(secs) => println!("Timeout: {secs}s"),
            None => println!("Timeout: none"),
        }
        println!("Candidates: {}", config.candidate_count);
        println!(
            "API key: {}",
            if config.api_key.is_some() { "set" } else { "not set" }
        );
        println!("Config file: {}", shown(Config::config_path()));
        println!("Credential file: {}", shown(Config::credential_path()));
        Ok(())
    }
}
