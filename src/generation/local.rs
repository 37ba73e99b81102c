//! Generator backed by an OpenAI-compatible chat completions endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;

use super::{GenerationError, TextGenerator};
use crate::config::GenerationConfig;

const SYSTEM_PROMPT: &str = "You are a thoughtful life-vision coach. Be concrete, warm, and brief.";

#[derive(Clone, Debug)]
pub struct LocalGenerator {
    endpoint: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    timeout_ms: u64,
    client: Client,
}

impl LocalGenerator {
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            endpoint: chat_endpoint(&config.endpoint),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout_ms: config.timeout_ms,
            client: build_client(config.timeout_ms),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt}
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature
        })
    }
}

/// Append the chat completions path unless it is already present.
pub fn chat_endpoint(base: &str) -> String {
    if base.ends_with("/v1/chat/completions") {
        base.to_string()
    } else {
        format!("{}/v1/chat/completions", base.trim_end_matches('/'))
    }
}

/// First choice's message content, trimmed.
pub fn extract_content(response: &Value) -> Result<String, GenerationError> {
    response["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.trim().to_string())
        .ok_or_else(|| GenerationError::Parse("response has no choices[0].message.content".into()))
}

#[async_trait]
impl TextGenerator for LocalGenerator {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        tracing::debug!(endpoint = %self.endpoint, prompt_len = prompt.len(), "generate");

        let res = self
            .client
            .post(&self.endpoint)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    GenerationError::Request(e.to_string())
                }
            })?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GenerationError::Status { status, body });
        }

        let response_json: Value = res
            .json()
            .await
            .map_err(|e| GenerationError::Parse(e.to_string()))?;

        extract_content(&response_json)
    }
}

fn build_client(timeout_ms: u64) -> Client {
    match Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(
                "Failed to build HTTP client with {}ms timeout, using defaults: {}",
                timeout_ms,
                e
            );
            Client::new()
        }
    }
}
