use std::sync::Arc;

use prd_llm::{LLMClient, LLMClientConfig, LLMProvider};

use crate::{config::ServiceConfig, error::AppError, prd::prd_service::PrdService};

#[derive(Clone)]
pub struct AppService {
    /// `None` when the credential is missing; every trigger then fails with
    /// a configuration error.
    pub prd_service: Option<PrdService>,
}

impl AppService {
    pub fn new(config: &ServiceConfig) -> Self {
        let prd_service = match &config.gemini {
            Some(gemini) => {
                let client_config = LLMClientConfig {
                    timeout: config.llm_timeout,
                };
                match LLMClient::new(LLMProvider::Gemini(gemini.clone()), Some(client_config)) {
                    Ok(client) => Some(PrdService::new(client)),
                    Err(e) => {
                        tracing::error!("Unable to create Gemini client: {}", e);
                        None
                    }
                }
            }
            None => {
                tracing::error!("{}", AppError::Configuration);
                None
            }
        };

        Self { prd_service }
    }

    pub fn with_prd_service(prd_service: PrdService) -> Self {
        Self {
            prd_service: Some(prd_service),
        }
    }

    pub fn prd_service(&self) -> Result<&PrdService, AppError> {
        self.prd_service.as_ref().ok_or(AppError::Configuration)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            service: AppService::new(&config),
            config: Arc::new(config),
        }
    }

    pub fn with_service(config: ServiceConfig, service: AppService) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }

    pub fn generation_enabled(&self) -> bool {
        self.service.prd_service.is_some()
    }
}
