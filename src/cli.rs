// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "commit-ai")]
#[command(version)]
#[command(about = "Draft commit messages with an LLM, then commit and push", long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Store a setting
    Set {
        #[command(subcommand)]
        target: SetTarget,
    },
    /// Start the commit process
    Start {
        /// Auto-select commit message without asking
        #[arg(long)]
        auto: bool,
    },
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetTarget {
    /// Set OpenAI API token
    Token,
}
