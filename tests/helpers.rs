// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use secrecy::SecretString;

use commit_ai::domain::{CandidateMessageList, Credential, Diff};
use commit_ai::error::{Error, Result};
use commit_ai::services::git::VersionControl;
use commit_ai::services::llm::MessageGenerator;
use commit_ai::services::prompter::{Prompter, validate_token};

/// Ordered log of every call the fakes received
#[derive(Default)]
#[allow(dead_code)]
pub struct CallLog(Mutex<Vec<String>>);

#[allow(dead_code)]
impl CallLog {
    pub fn push(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }
}

fn command_error(command: &str) -> Error {
    Error::ExternalCommand {
        command: command.into(),
        message: "scripted failure".into(),
    }
}

/// Version control whose results are fixed up front
#[allow(dead_code)]
pub struct FakeGit<'a> {
    pub log: &'a CallLog,
    pub diff: Option<String>,
    pub commit_ok: bool,
    pub push_ok: bool,
}

#[allow(dead_code)]
impl<'a> FakeGit<'a> {
    pub fn with_diff(log: &'a CallLog, diff: &str) -> Self {
        Self {
            log,
            diff: Some(diff.to_string()),
            commit_ok: true,
            push_ok: true,
        }
    }
}

#[async_trait]
impl<'a> VersionControl for FakeGit<'a> {
    async fn diff(&self) -> Result<Diff> {
        self.log.push("git diff");
        self.diff
            .clone()
            .map(Diff::new)
            .ok_or_else(|| command_error("git diff"))
    }

    async fn stage_and_commit(&self, message: &str) -> Result<()> {
        self.log.push(format!("git commit {message}"));
        if self.commit_ok {
            Ok(())
        } else {
            Err(command_error("git commit"))
        }
    }

    async fn push(&self) -> Result<()> {
        self.log.push("git push");
        if self.push_ok {
            Ok(())
        } else {
            Err(command_error("git push"))
        }
    }
}

/// Generator returning a scripted list (validated like the real one)
#[allow(dead_code)]
pub struct FakeGenerator<'a> {
    pub log: &'a CallLog,
    pub messages: Option<Vec<String>>,
}

#[allow(dead_code)]
impl<'a> FakeGenerator<'a> {
    pub fn returning(log: &'a CallLog, messages: &[&str]) -> Self {
        Self {
            log,
            messages: Some(messages.iter().map(|m| m.to_string()).collect()),
        }
    }

    pub fn failing(log: &'a CallLog) -> Self {
        Self {
            log,
            messages: None,
        }
    }
}

#[async_trait]
impl<'a> MessageGenerator for FakeGenerator<'a> {
    async fn generate(&self, diff: &Diff) -> Result<CandidateMessageList> {
        self.log.push(format!("generate {}", diff.as_str()));
        match &self.messages {
            Some(messages) => CandidateMessageList::validate(messages.clone(), 3),
            None => Err(Error::Generation("scripted failure".into())),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}

/// Prompter answering from queues; panics when asked something unscripted
#[allow(dead_code)]
pub struct FakePrompter<'a> {
    pub log: &'a CallLog,
    pub push_answer: bool,
    pub choice: usize,
    pub token_inputs: Mutex<VecDeque<String>>,
}

#[allow(dead_code)]
impl<'a> FakePrompter<'a> {
    pub fn new(log: &'a CallLog) -> Self {
        Self {
            log,
            push_answer: true,
            choice: 0,
            token_inputs: Mutex::new(VecDeque::new()),
        }
    }

    pub fn with_tokens(log: &'a CallLog, inputs: &[&str]) -> Self {
        let prompter = Self::new(log);
        *prompter.token_inputs.lock().unwrap() = inputs.iter().map(|s| s.to_string()).collect();
        prompter
    }
}

impl Prompter for FakePrompter<'_> {
    fn confirm_push(&self) -> Result<bool> {
        self.log.push("confirm push");
        Ok(self.push_answer)
    }

    fn choose_message(&self, candidates: &CandidateMessageList) -> Result<String> {
        self.log.push("choose message");
        Ok(candidates.as_slice()[self.choice].clone())
    }

    /// Mirrors the terminal loop: keep reading until validation passes
    fn collect_credential(&self) -> Result<Credential> {
        loop {
            self.log.push("credential prompt");
            let input = self
                .token_inputs
                .lock()
                .unwrap()
                .pop_front()
                .expect("ran out of scripted token inputs");
            if validate_token(&input).is_ok() {
                return Ok(SecretString::from(input));
            }
        }
    }
}
