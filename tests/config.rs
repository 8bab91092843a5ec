// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::fs;

use figment::Jail;
use tempfile::TempDir;

use commit_ai::config::{Config, DEFAULT_BASE_URL, DEFAULT_MODEL};
use commit_ai::error::Error;

// ─── Default values ──────────────────────────────────────────────────────────

#[test]
fn default_config_values() {
    let config = Config::default();
    assert_eq!(config.model, "chatgpt-4o-latest");
    assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
    assert!(config.api_key.is_none());
    assert!(config.timeout_secs.is_none());
    assert_eq!(config.candidate_count, 3);
    assert!(config.validate().is_ok());
}

// ─── TOML deserialization ────────────────────────────────────────────────────

#[test]
fn load_from_valid_toml() {
    let toml_str = r#"
model = "gpt-4o-mini"
openai_base_url = "http://localhost:8080/v1"
timeout_secs = 30
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.model, "gpt-4o-mini");
    assert_eq!(config.openai_base_url, "http://localhost:8080/v1");
    assert_eq!(config.timeout_secs, Some(30));
    assert_eq!(config.candidate_count, 3);
}

#[test]
fn empty_toml_uses_all_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.openai_base_url, DEFAULT_BASE_URL);
    assert!(config.timeout_secs.is_none());
}

#[test]
fn invalid_toml_returns_error() {
    let result: std::result::Result<Config, _> = toml::from_str("model = [invalid");
    assert!(result.is_err(), "invalid TOML should return an error");
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[test]
fn rejects_non_http_base_url() {
    let config = Config {
        openai_base_url: "ftp://example.com".into(),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn rejects_unparseable_base_url() {
    let config = Config {
        openai_base_url: "not a url".into(),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn rejects_zero_timeout() {
    let config = Config {
        timeout_secs: Some(0),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn rejects_zero_candidates() {
    let config = Config {
        candidate_count: 0,
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

// ─── Layering ────────────────────────────────────────────────────────────────
//
// Every test that reads the environment runs inside `figment::Jail`, which
// serialises access to process env and restores it afterwards.

fn load_in(jail: &Jail, config: Option<&str>, credential: Option<&str>) -> Config {
    let config_file = jail.directory().join("config.toml");
    let credential_file = jail.directory().join(".env");
    if let Some(contents) = config {
        fs::write(&config_file, contents).unwrap();
    }
    if let Some(contents) = credential {
        fs::write(&credential_file, contents).unwrap();
    }
    Config::load_from(Some(config_file.as_path()), Some(credential_file.as_path())).unwrap()
}

#[test]
fn credential_file_supplies_api_key() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let config = load_in(jail, None, Some("OPENAI_API_KEY=sk-from-file"));
        assert_eq!(config.api_key.as_deref(), Some("sk-from-file"));
        Ok(())
    });
}

#[test]
fn config_file_overrides_credential_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        let config = load_in(
            jail,
            Some("api_key = \"sk-from-toml\"\nopenai_base_url = \"http://localhost:9/v1/\"\n"),
            Some("OPENAI_API_KEY=sk-from-file"),
        );
        assert_eq!(config.api_key.as_deref(), Some("sk-from-toml"));
        assert_eq!(config.openai_base_url, "http://localhost:9/v1");
        Ok(())
    });
}

#[test]
fn ambient_openai_key_is_the_fallback() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("OPENAI_API_KEY", "sk-ambient");
        let config = load_in(jail, None, None);
        assert_eq!(config.api_key.as_deref(), Some("sk-ambient"));
        Ok(())
    });
}

#[test]
fn credential_file_beats_ambient_openai_key() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("OPENAI_API_KEY", "sk-ambient");
        let config = load_in(jail, None, Some("OPENAI_API_KEY=sk-from-file"));
        assert_eq!(config.api_key.as_deref(), Some("sk-from-file"));
        Ok(())
    });
}

#[test]
fn prefixed_env_key_beats_every_other_source() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("OPENAI_API_KEY", "sk-ambient");
        jail.set_env("COMMIT_AI_API_KEY", "sk-prefixed");
        let config = load_in(
            jail,
            Some("api_key = \"sk-from-toml\"\n"),
            Some("OPENAI_API_KEY=sk-from-file"),
        );
        assert_eq!(config.api_key.as_deref(), Some("sk-prefixed"));
        Ok(())
    });
}

#[test]
fn prefixed_env_overrides_model() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("COMMIT_AI_MODEL", "gpt-4o-mini");
        let config = load_in(jail, Some("model = \"from-toml\"\n"), None);
        assert_eq!(config.model, "gpt-4o-mini");
        Ok(())
    });
}

#[test]
fn written_default_file_parses() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    Config::write_default(&path).unwrap();

    let config: Config = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(config.model, DEFAULT_MODEL);
    assert!(config.api_key.is_none());
}
