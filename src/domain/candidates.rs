// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use crate::error::{Error, Result};

/// Ordered commit message candidates, the generator's preferred choice first.
///
/// Only constructed through [`CandidateMessageList::validate`], so a held
/// value always has exactly the arity it was validated against (never zero).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMessageList(Vec<String>);

impl CandidateMessageList {
    pub fn validate(messages: Vec<String>, arity: usize) -> Result<Self> {
        if arity == 0 {
            return Err(Error::SchemaViolation("arity must be at least 1".into()));
        }

        if messages.len() != arity {
            return Err(Error::SchemaViolation(format!(
                "expected {arity} messages, got {}",
                messages.len()
            )));
        }

        if let Some(i) = messages.iter().position(|m| m.trim().is_empty()) {
            return Err(Error::SchemaViolation(format!(
                "message {} is empty",
                i + 1
            )));
        }

        Ok(Self(messages))
    }

    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}
