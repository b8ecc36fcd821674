use std::sync::Arc;
use std::time::Instant;

use prd_llm::LLMClient;
use uuid::Uuid;

use super::prd_prompt::PrdPrompt;
use super::prd_types::{GenerationRequest, GenerationResult};
use crate::error::AppError;

pub const FALLBACK_TEXT: &str = "No response received.";

#[derive(Clone)]
pub struct PrdService {
    llm_client: Arc<LLMClient>,
}

impl PrdService {
    pub fn new(llm_client: LLMClient) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
        }
    }

    /// One trigger, one model call. The request has already passed validation.
    pub async fn generate(
        &self,
        request_id: Uuid,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, AppError> {
        let prompt = PrdPrompt::get_prompt(request);
        let started = Instant::now();

        tracing::info!(
            %request_id,
            app_type = %request.app_type(),
            language = %request.language(),
            "Generating PRD"
        );

        let output = self.llm_client.generate_text(&prompt).await.map_err(|e| {
            tracing::error!(%request_id, elapsed = ?started.elapsed(), "PRD generation failed: {}", e);
            AppError::ExternalService(e)
        })?;

        let result = match output {
            Some(text) => GenerationResult {
                text,
                fallback: false,
            },
            None => {
                tracing::warn!(%request_id, "Model returned no content, using placeholder");
                GenerationResult {
                    text: FALLBACK_TEXT.to_string(),
                    fallback: true,
                }
            }
        };

        tracing::info!(
            %request_id,
            elapsed = ?started.elapsed(),
            chars = result.text.chars().count(),
            "PRD generated"
        );

        Ok(result)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::prd::prd_prompt::PRD_SECTIONS;
    use crate::prd::prd_types::{AppType, OutputLanguage};
    use async_trait::async_trait;
    use prd_llm::{LLMError, LLMService};
    use std::sync::Mutex;

    pub(crate) enum Reply {
        Text(&'static str),
        Empty,
        Fail,
    }

    /// Records prompts and answers with a canned reply.
    pub(crate) struct FakeLLM {
        pub reply: Reply,
        pub prompts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LLMService for FakeLLM {
        async fn generate_text(&self, prompt: &str) -> Result<Option<String>, LLMError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Reply::Text(text) => Ok(Some(text.to_string())),
                Reply::Empty => Ok(None),
                Reply::Fail => Err(LLMError::Status {
                    status: 401,
                    body: "invalid api key".to_string(),
                }),
            }
        }
    }

    pub(crate) fn fake_service(reply: Reply) -> (PrdService, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let client = LLMClient::with_service(
            Box::new(FakeLLM {
                reply,
                prompts: prompts.clone(),
            }),
            None,
        );
        (PrdService::new(client), prompts)
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new(
            "My App",
            "Plan meals for the week",
            AppType::WebApp,
            OutputLanguage::English,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_returns_model_text_and_sends_prompt_once() {
        let (service, prompts) = fake_service(Reply::Text("# My App PRD"));

        let result = service.generate(Uuid::new_v4(), &request()).await.unwrap();

        assert_eq!(result.text, "# My App PRD");
        assert!(!result.fallback);

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("My App"));
        assert!(PRD_SECTIONS.iter().all(|s| prompts[0].contains(s)));
    }

    #[tokio::test]
    async fn test_empty_output_uses_placeholder() {
        let (service, _) = fake_service(Reply::Empty);

        let result = service.generate(Uuid::new_v4(), &request()).await.unwrap();

        assert_eq!(result.text, FALLBACK_TEXT);
        assert!(result.fallback);
    }

    #[tokio::test]
    async fn test_failure_is_external_service_error() {
        let (service, prompts) = fake_service(Reply::Fail);

        let result = service.generate(Uuid::new_v4(), &request()).await;

        assert!(matches!(result, Err(AppError::ExternalService(_))));
        assert_eq!(prompts.lock().unwrap().len(), 1);
    }
}
