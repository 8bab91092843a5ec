// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::services::credentials::CredentialStore;

pub const DEFAULT_MODEL: &str = "chatgpt-4o-latest";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL for OpenAI-compatible APIs (default: https://api.openai.com/v1)
    #[serde(default = "default_base_url")]
    pub openai_base_url: String,

    /// Request timeout in seconds. Unset means wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Number of candidates the response schema asks for
    #[serde(default = "default_candidate_count")]
    pub candidate_count: usize,
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_candidate_count() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            openai_base_url: default_base_url(),
            timeout_secs: None,
            candidate_count: default_candidate_count(),
        }
    }
}

impl Config {
    /// Load with priority: ENV > user config > credential file > defaults
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path().as_deref(), Self::credential_path().as_deref())
    }

    /// Same as [`Config::load`] with explicit file locations.
    pub fn load_from(config_file: Option<&Path>, credential_file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Stored credential (`commit-ai set token`)
        if let Some(path) = credential_file {
            if let Some(key) = CredentialStore::new(path).load()? {
                figment = figment.merge(Serialized::default(
                    "api_key",
                    key.expose_secret().to_string(),
                ));
            }
        }

        if let Some(path) = config_file {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // COMMIT_AI_MODEL, COMMIT_AI_API_KEY, COMMIT_AI_OPENAI_BASE_URL, ...
        figment = figment.merge(Env::prefixed("COMMIT_AI_"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        if config.api_key.is_none() {
            config.api_key = std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty());
        }

        config.openai_base_url = config.openai_base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "commit-ai").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Fixed location of the `OPENAI_API_KEY=...` file
    pub fn credential_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(".env"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::Config("model cannot be empty".into()));
        }

        let url = url::Url::parse(&self.openai_base_url).map_err(|e| {
            Error::Config(format!(
                "openai_base_url '{}' is not a valid URL: {e}",
                self.openai_base_url
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "openai_base_url must start with http:// or https://, got '{}'",
                self.openai_base_url
            )));
        }

        if let Some(secs) = self.timeout_secs {
            if !(1..=3600).contains(&secs) {
                return Err(Error::Config(format!(
                    "timeout_secs must be 1–3600, got {secs}"
                )));
            }
        }

        if !(1..=10).contains(&self.candidate_count) {
            return Err(Error::Config(format!(
                "candidate_count must be 1–10, got {}",
                self.candidate_count
            )));
        }

        Ok(())
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(path) = Self::config_path() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };
        Self::write_default(&path)?;
        Ok(path)
    }

    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = r#"# commit-ai configuration

# Chat model used to draft commit messages
model = "chatgpt-4o-latest"

# Base URL for the OpenAI-compatible API
openai_base_url = "https://api.openai.com/v1"

# Request timeout in seconds (unset: wait indefinitely)
# timeout_secs = 120

# The API key normally lives in the credential file written by
# `commit-ai set token`. Setting it here takes precedence.
# api_key = "sk-..."
"#;

        fs::write(path, content)?;
        restrict_permissions(path)?;
        Ok(())
    }
}

/// Set owner-only permissions (0600)
pub(crate) fn restrict_permissions(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
