// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

pub mod openai;

use crate::config::Config;
use crate::domain::{CandidateMessageList, Diff};
use crate::error::Result;

#[async_trait]
pub trait MessageGenerator: Send + Sync {
    /// One remote request per call, no retry
    async fn generate(&self, diff: &Diff) -> Result<CandidateMessageList>;

    fn name(&self) -> &str;
}

pub fn create_generator(config: &Config) -> openai::OpenAiGenerator {
    openai::OpenAiGenerator::new(config)
}

/// Prompt sent as the single user message.
pub fn build_prompt(diff: &Diff, count: usize) -> String {
    format!(
        "Generate an array of {} git commit messages for the following changes:\n{}",
        count_word(count),
        diff.as_str()
    )
}

fn count_word(n: usize) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS
        .get(n)
        .map(|w| (*w).to_string())
        .unwrap_or_else(|| n.to_string())
}
