use axum::{http::StatusCode, response::IntoResponse, Json};
use prd_llm::LLMError;
use thiserror::Error;

/// Every variant is terminal for the trigger that produced it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("GOOGLE_API_KEY is not set; document generation is disabled")]
    Configuration,
    #[error("{0}")]
    Validation(String),
    #[error("Failed to generate PRD: {0}")]
    ExternalService(#[from] LLMError),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Configuration => "configuration_error",
            AppError::Validation(_) => "validation_error",
            AppError::ExternalService(_) => "external_service_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ExternalService(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status_code(),
            Json(serde_json::json!({
                "error": self.to_string(),
                "kind": self.kind(),
            })),
        )
            .into_response()
    }
}
