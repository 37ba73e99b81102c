//! Text generation capability used by the report layer.
//!
//! The analysis core never calls into this module.

pub mod local;
pub mod mock;
pub mod prompts;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::GenerationConfig;

pub use local::LocalGenerator;
pub use mock::MockGenerator;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generator timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    #[error("request error: {0}")]
    Request(String),
    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Build the generator selected by configuration.
pub fn create_generator(config: &GenerationConfig) -> Arc<dyn TextGenerator> {
    match config.provider.as_str() {
        "local" => {
            tracing::info!(
                endpoint = %config.endpoint,
                model = %config.model,
                "Using local text generator"
            );
            Arc::new(LocalGenerator::from_config(config))
        }
        "mock" => Arc::new(MockGenerator::with_delay(config.mock_delay_ms)),
        other => {
            tracing::warn!("Unknown generator provider '{}', using mock", other);
            Arc::new(MockGenerator::with_delay(config.mock_delay_ms))
        }
    }
}

/// Split a reply into list items: one per non-empty line, with bullet and
/// numbering markers removed.
pub fn parse_lines(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(|line| {
            let line = line.trim();
            let line = line
                .trim_start_matches(['-', '*', '•'])
                .trim_start();
            let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
            if digits > 0 && line[digits..].starts_with(['.', ')']) {
                line[digits + 1..].trim_start()
            } else {
                line
            }
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
