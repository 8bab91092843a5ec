// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::config::restrict_permissions;
use crate::domain::{CREDENTIAL_KEY, Credential};
use crate::error::{Error, Result};
use crate::services::prompter::validate_token;

/// Plain-text `OPENAI_API_KEY=<secret>` file.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites whatever was stored before. Tokens that would not read
    /// back unchanged are refused before the file is touched.
    pub fn save(&self, credential: &Credential) -> Result<()> {
        validate_token(credential.expose_secret())
            .map_err(|reason| Error::Config(format!("cannot store token: {reason}")))?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        fs::write(
            &self.path,
            format!("{CREDENTIAL_KEY}={}", credential.expose_secret()),
        )?;
        restrict_permissions(&self.path)?;

        debug!(path = %self.path.display(), "credential saved");
        Ok(())
    }

    /// Read the stored key without touching the process environment.
    pub fn load(&self) -> Result<Option<Credential>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let entries = dotenvy::from_path_iter(&self.path).map_err(|e| {
            Error::Config(format!(
                "cannot read credential file {}: {e}",
                self.path.display()
            ))
        })?;

        for entry in entries {
            let (key, value) = entry.map_err(|e| {
                Error::Config(format!(
                    "malformed credential file {}: {e}",
                    self.path.display()
                ))
            })?;
            if key == CREDENTIAL_KEY && !value.trim().is_empty() {
                return Ok(Some(SecretString::from(value)));
            }
        }

        Ok(None)
    }
}
