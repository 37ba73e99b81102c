use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, VisionGuideError};

pub const DEFAULT_HISTORY_LIMIT: usize = 10;
const MAX_HISTORY_LIMIT: usize = 100;

/// Main configuration structure loaded from vision_guide.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub generation: GenerationConfig,
    pub logging: LoggingConfig,
}

/// Where sessions are kept and how much history survives
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Defaults to `<platform data dir>/vision-guide`
    pub data_dir: Option<PathBuf>,
    pub history_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl StorageConfig {
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("vision-guide")
        })
    }
}

/// Text generation provider settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// "mock" or "local"
    pub provider: String,
    pub endpoint: String,
    pub model: String,
    pub timeout_ms: u64,
    pub max_tokens: u32,
    pub temperature: f32,
    pub mock_delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            endpoint: "http://127.0.0.1:8111".to_string(),
            model: "local-model".to_string(),
            timeout_ms: 60_000,
            max_tokens: 1000,
            temperature: 0.7,
            mock_delay_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing-subscriber EnvFilter directive
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "vision_guide=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses VISION_GUIDE_CONFIG environment variable or defaults to "vision_guide.toml"
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let config_path = std::env::var("VISION_GUIDE_CONFIG")
            .unwrap_or_else(|_| "vision_guide.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate();
        Ok(config)
    }

    /// Apply VISION_* environment variables on top of file values (env-first)
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(dir) = std::env::var("VISION_DATA_DIR") {
            self.storage.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(limit) = env_parse::<usize>("VISION_HISTORY_LIMIT")? {
            self.storage.history_limit = limit;
        }
        if let Ok(provider) = std::env::var("VISION_GENERATOR") {
            self.generation.provider = provider.trim().to_lowercase();
        }
        if let Ok(endpoint) = std::env::var("VISION_GEN_ENDPOINT") {
            self.generation.endpoint = endpoint;
        }
        if let Ok(model) = std::env::var("VISION_GEN_MODEL") {
            self.generation.model = model;
        }
        if let Some(timeout) = env_parse::<u64>("VISION_GEN_TIMEOUT_MS")? {
            self.generation.timeout_ms = timeout;
        }
        if let Some(max_tokens) = env_parse::<u32>("VISION_GEN_MAX_TOKENS")? {
            self.generation.max_tokens = max_tokens;
        }
        if let Some(temperature) = env_parse::<f32>("VISION_GEN_TEMPERATURE")? {
            self.generation.temperature = temperature;
        }
        if let Some(delay) = env_parse::<u64>("VISION_MOCK_DELAY_MS")? {
            self.generation.mock_delay_ms = delay;
        }
        if let Ok(filter) = std::env::var("VISION_LOG") {
            self.logging.filter = filter;
        }
        Ok(())
    }

    /// Clamp out-of-range values, warning about each adjustment
    pub fn validate(&mut self) {
        if self.storage.history_limit == 0 {
            tracing::warn!("history_limit 0 is not allowed, using 1");
            self.storage.history_limit = 1;
        } else if self.storage.history_limit > MAX_HISTORY_LIMIT {
            tracing::warn!(
                "history_limit {} exceeds max {}, clamping",
                self.storage.history_limit,
                MAX_HISTORY_LIMIT
            );
            self.storage.history_limit = MAX_HISTORY_LIMIT;
        }

        if !self.generation.temperature.is_finite() {
            tracing::warn!(
                "temperature {} is not a number, using default",
                self.generation.temperature
            );
            self.generation.temperature = GenerationConfig::default().temperature;
        } else if !(0.0..=2.0).contains(&self.generation.temperature) {
            tracing::warn!(
                "temperature {} outside 0.0..=2.0, clamping",
                self.generation.temperature
            );
            self.generation.temperature = self.generation.temperature.clamp(0.0, 2.0);
        }

        if self.generation.timeout_ms == 0 {
            self.generation.timeout_ms = GenerationConfig::default().timeout_ms;
        }

        if !matches!(self.generation.provider.as_str(), "mock" | "local") {
            tracing::warn!(
                "Unknown generator provider '{}', falling back to mock",
                self.generation.provider
            );
            self.generation.provider = "mock".to_string();
        }

        if self.generation.provider == "local"
            && !self.generation.endpoint.starts_with("http://")
            && !self.generation.endpoint.starts_with("https://")
        {
            tracing::warn!(
                "Generation endpoint '{}' doesn't start with http:// or https://",
                self.generation.endpoint
            );
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| VisionGuideError::Config {
                message: format!("{} has invalid value '{}'", key, raw),
            }),
        Err(_) => Ok(None),
    }
}
