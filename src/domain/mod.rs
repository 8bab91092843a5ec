// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod candidates;
mod credential;
mod diff;
mod outcome;

pub use candidates::*;
pub use credential::*;
pub use diff::*;
pub use outcome::*;
