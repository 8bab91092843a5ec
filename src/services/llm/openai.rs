// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::config::Config;
use crate::domain::{CandidateMessageList, Diff};
use crate::error::{Error, Result};

use super::{MessageGenerator, build_prompt};

/// Name of the structured-output schema sent with every request
pub const SCHEMA_NAME: &str = "prompt-response";

pub struct OpenAiGenerator {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<SecretString>,
    candidate_count: usize,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    response_format: Value,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

/// Payload the schema constrains the model to
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PromptResponse {
    messages: Vec<String>,
}

impl OpenAiGenerator {
    pub fn new(config: &Config) -> Self {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().unwrap_or_default();

        Self {
            client,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone().map(SecretString::from),
            candidate_count: config.candidate_count,
        }
    }

    /// `response_format` asking for `{"messages": [string, ...]}`
    pub fn response_format() -> Value {
        json!({
            "type": "json_schema",
            "json_schema": {
                "name": SCHEMA_NAME,
                "strict": true,
                "schema": {
                    "type": "object",
                    "properties": {
                        "messages": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["messages"],
                    "additionalProperties": false
                }
            }
        })
    }

    fn provider_error(message: impl Into<String>) -> Error {
        Error::Generation(message.into())
    }
}

/// Validate completion content against the schema and the expected arity.
pub fn parse_candidates(content: &str, arity: usize) -> Result<CandidateMessageList> {
    let parsed: PromptResponse = serde_json::from_str(content.trim())
        .map_err(|e| Error::SchemaViolation(format!("{e}")))?;
    CandidateMessageList::validate(parsed.messages, arity)
}

#[async_trait]
impl MessageGenerator for OpenAiGenerator {
    async fn generate(&self, diff: &Diff) -> Result<CandidateMessageList> {
        let Some(api_key) = &self.api_key else {
            return Err(Error::MissingApiKey);
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %self.model, diff_bytes = diff.len(), "requesting candidates");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose_secret())
            .json(&ChatRequest {
                model: &self.model,
                messages: vec![Message {
                    role: "user".into(),
                    content: build_prompt(diff, self.candidate_count),
                }],
                response_format: Self::response_format(),
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Self::provider_error("request timed out")
                } else {
                    Self::provider_error(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Self::provider_error(format!("HTTP {status}: {}", body.trim())));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| Self::provider_error(format!("invalid response body: {e}")))?;

        let Some(choice) = body.choices.into_iter().next() else {
            return Err(Error::SchemaViolation("response contained no choices".into()));
        };

        if let Some(refusal) = choice.message.refusal.filter(|r| !r.trim().is_empty()) {
            return Err(Self::provider_error(format!("model refused: {refusal}")));
        }

        let content = choice
            .message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| Error::SchemaViolation("completion content was empty".into()))?;

        debug!(content_len = content.len(), "parsing structured response");
        parse_candidates(&content, self.candidate_count)
    }

    fn name(&self) -> &str {
        "openai"
    }
}
