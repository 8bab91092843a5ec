// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use secrecy::SecretString;

/// API key for the text-generation service. `Debug` never prints the value.
pub type Credential = SecretString;

/// Variable name written to and read from the credential file
pub const CREDENTIAL_KEY: &str = "OPENAI_API_KEY";
