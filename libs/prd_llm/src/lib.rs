use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

pub mod gemini;

#[derive(Debug, Clone)]
pub enum LLMProvider {
    Gemini(gemini::GeminiConfig),
}

#[derive(Debug, Error)]
pub enum LLMError {
    #[error("API key not configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API returned error status: {status}, body: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// A text-generation backend. `Ok(None)` means the call succeeded but the
/// model produced nothing usable.
#[async_trait]
pub trait LLMService {
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>, LLMError>;
}

pub struct LLMClientConfig {
    pub timeout: Duration,
}

impl Default for LLMClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
        }
    }
}

pub struct LLMClient {
    service: Box<dyn LLMService + Send + Sync>,
    config: LLMClientConfig,
}

impl LLMClient {
    pub fn new(provider: LLMProvider, config: Option<LLMClientConfig>) -> Result<Self, LLMError> {
        let service: Box<dyn LLMService + Send + Sync> = match provider {
            LLMProvider::Gemini(gemini_config) => {
                Box::new(gemini::GeminiService::new(gemini_config)?)
            }
        };

        Ok(Self::with_service(service, config))
    }

    pub fn with_service(
        service: Box<dyn LLMService + Send + Sync>,
        config: Option<LLMClientConfig>,
    ) -> Self {
        Self {
            service,
            config: config.unwrap_or_default(),
        }
    }

    /// Issues exactly one call to the backend, bounded by the configured
    /// timeout. Failures are returned as-is; nothing is retried.
    pub async fn generate_text(&self, prompt: &str) -> Result<Option<String>, LLMError> {
        match timeout(self.config.timeout, self.service.generate_text(prompt)).await {
            Ok(result) => {
                if let Err(e) = &result {
                    tracing::error!("Text generation failed: {}", e);
                }
                result
            }
            Err(_) => {
                tracing::error!("Text generation timed out after {:?}", self.config.timeout);
                Err(LLMError::Timeout(self.config.timeout))
            }
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }
}
