// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("`{command}` failed: {message}")]
    #[diagnostic(
        code(commit_ai::git::command),
        help("Make sure git is installed and you are inside a repository")
    )]
    ExternalCommand { command: String, message: String },

    #[error("No API key configured")]
    #[diagnostic(
        code(commit_ai::generate::missing_key),
        help("Store one with: commit-ai set token (or export OPENAI_API_KEY)")
    )]
    MissingApiKey,

    #[error("Message generation failed: {0}")]
    #[diagnostic(code(commit_ai::generate::failed))]
    Generation(String),

    #[error("Response did not match the expected shape: {0}")]
    #[diagnostic(
        code(commit_ai::generate::schema),
        help("The model must return a JSON object with a `messages` array of strings")
    )]
    SchemaViolation(String),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Configuration error: {0}")]
    #[diagnostic(code(commit_ai::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl Error {
    /// True for failures of the remote generation step.
    pub fn is_generation(&self) -> bool {
        matches!(
            self,
            Error::MissingApiKey | Error::Generation(_) | Error::SchemaViolation(_)
        )
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                Error::Cancelled
            }
            other => Error::Dialog(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
