// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod credentials;
pub mod git;
pub mod llm;
pub mod prompter;
pub mod workflow;
