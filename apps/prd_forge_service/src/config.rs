use std::{env, time::Duration};

use anyhow::{Context, Result};
use prd_llm::gemini::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Dev,
    Prod,
}

/// Process-wide settings, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub environment: Environment,
    pub port: u16,
    pub llm_timeout: Duration,
    /// `None` when `GOOGLE_API_KEY` is absent; generation is disabled then.
    pub gemini: Option<GeminiConfig>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENVIRONMENT").as_deref() {
            None | Some("dev") => Environment::Dev,
            Some(_) => Environment::Prod,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number, got {:?}", value))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("LLM_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .with_context(|| format!("LLM_TIMEOUT_SECS must be a number, got {:?}", value))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            anyhow::bail!("LLM_TIMEOUT_SECS must be greater than zero");
        }

        let gemini = lookup("GOOGLE_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .map(|key| {
                GeminiConfig::new(key)
                    .with_model(lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()))
                    .with_base_url(
                        lookup("GEMINI_API_BASE_URL")
                            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                    )
            });

        Ok(Self {
            environment,
            port,
            llm_timeout: Duration::from_secs(timeout_secs),
            gemini,
        })
    }

    /// The HTTP layer must outlive the model call so a slow model surfaces as
    /// an upstream failure, not a 408.
    pub fn request_timeout(&self) -> Duration {
        self.llm_timeout + Duration::from_secs(5)
    }
}
