// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

/// How a successful `start` run ended. Failures travel as `Err(Error)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The diff was blank, nothing else ran
    NoChanges,
    Pushed,
    PushSkipped,
    /// Commit landed but `git push` failed
    PushFailed(String),
}

impl RunOutcome {
    pub fn committed(&self) -> bool {
        !matches!(self, RunOutcome::NoChanges)
    }
}
