// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use dialoguer::{Confirm, Password, Select};
use secrecy::SecretString;

use crate::domain::{CandidateMessageList, Credential};
use crate::error::Result;

pub const EMPTY_TOKEN_MESSAGE: &str = "Token cannot be empty";
pub const UNSUPPORTED_TOKEN_MESSAGE: &str =
    "Token cannot contain whitespace, quotes, '$', '\\' or '#'";

/// Terminal decisions the workflow waits on. None of them preselect an answer.
pub trait Prompter: Send + Sync {
    fn confirm_push(&self) -> Result<bool>;

    /// Returns the chosen candidate verbatim
    fn choose_message(&self, candidates: &CandidateMessageList) -> Result<String>;

    /// Masked input, re-prompts until [`validate_token`] accepts it
    fn collect_credential(&self) -> Result<Credential>;
}

/// Accepts tokens the credential file stores verbatim; dialoguer re-prompts on `Err`.
///
/// The file is read back with dotenv rules, which expand `$VAR`, end an
/// unquoted value at ` #` and reject bare spaces, quotes and backslashes.
pub fn validate_token(input: &str) -> std::result::Result<(), &'static str> {
    if input.is_empty() {
        return Err(EMPTY_TOKEN_MESSAGE);
    }
    if input
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '$' | '\\' | '#'))
    {
        return Err(UNSUPPORTED_TOKEN_MESSAGE);
    }
    Ok(())
}

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm_push(&self) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt("Do you want to push the changes?")
            .interact()?)
    }

    fn choose_message(&self, candidates: &CandidateMessageList) -> Result<String> {
        let selection = Select::new()
            .with_prompt("Select a commit message")
            .items(candidates.as_slice())
            .interact()?;

        // `interact` only returns indices of the items it was given
        Ok(candidates.as_slice()[selection].clone())
    }

    fn collect_credential(&self) -> Result<Credential> {
        let token = Password::new()
            .with_prompt("Enter your OpenAI API token")
            .validate_with(|input: &String| validate_token(input))
            .interact()?;

        Ok(SecretString::from(token))
    }
}
