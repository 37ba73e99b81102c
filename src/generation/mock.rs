//! Deterministic offline generator with canned replies.

use async_trait::async_trait;
use std::time::Duration;

use super::{GenerationError, TextGenerator};

pub const FOLLOW_UP_REPLY: &str = "What specific aspects of that experience were most meaningful to you?\nHow does this connect to your broader life goals?";

pub const INSIGHTS_REPLY: &str = r#"{"themes":["growth","autonomy","connection"],"insights":["Strong desire for meaningful work","Values work-life integration"],"priorities":["time","mental"]}"#;

pub const RECOMMENDATIONS_REPLY: &str = "Create a weekly time audit to identify energy drains\nSchedule 2 deep conversations with important people in your life\nIdentify one skill or area of knowledge to develop this quarter";

pub const VISION_REPLY: &str = "My ideal life is one where I have meaningful control over my time and energy, surrounded by people who inspire and support my growth. I pursue work that feels like play, contributing to something larger than myself while maintaining space for rest, creativity, and deep connections. Financial resources enable freedom rather than drive my decisions, and my physical health supports the energy needed for all I wish to accomplish.";

pub const DEFAULT_REPLY: &str = "Mock response";

#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    delay: Duration,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Reply chosen by the first matching marker in the prompt.
    pub fn reply_for(prompt: &str) -> &'static str {
        if prompt.contains("follow-up") {
            FOLLOW_UP_REPLY
        } else if prompt.contains("insights") {
            INSIGHTS_REPLY
        } else if prompt.contains("recommendations") {
            RECOMMENDATIONS_REPLY
        } else if prompt.contains("vision statement") {
            VISION_REPLY
        } else {
            DEFAULT_REPLY
        }
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(Self::reply_for(prompt).to_string())
    }
}
