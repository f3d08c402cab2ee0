mod prompts;

use crate::domain::error::Result;
use crate::domain::test_case::TestCaseDefinition;
use crate::infrastructure::llm_clients::LLMClient;
use crate::infrastructure::response::extract_gherkin_code;
use std::sync::Arc;

use prompts::{build_user_prompt, SYSTEM_PROMPT};

pub struct GherkinUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
}

impl GherkinUseCase {
    pub fn new(llm_client: Arc<dyn LLMClient + Send + Sync>) -> Self {
        Self { llm_client }
    }

    /// Prompts the completion service for one test case and returns the
    /// extracted feature text. An empty string means nothing usable came back.
    pub async fn generate(&self, test_case: &TestCaseDefinition) -> Result<String> {
        let user_prompt = build_user_prompt(test_case);
        let output = self.llm_client.generate(SYSTEM_PROMPT, &user_prompt).await?;
        Ok(extract_gherkin_code(&output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingClient {
        reply: String,
        prompts: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl LLMClient for RecordingClient {
        async fn generate(&self, system: &str, user: &str) -> Result<String> {
            self.prompts
                .lock()
                .unwrap()
                .push((system.to_string(), user.to_string()));
            Ok(self.reply.clone())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl LLMClient for FailingClient {
        async fn generate(&self, _system: &str, _user: &str) -> Result<String> {
            Err(AppError::LLMError("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_generate_extracts_fenced_output() {
        let client = Arc::new(RecordingClient {
            reply: "Here you go:\n```gherkin\nFeature: Login\n```".to_string(),
            prompts: Mutex::new(Vec::new()),
        });
        let use_case = GherkinUseCase::new(client.clone());
        let test_case = TestCaseDefinition::from_json(r#"{"test_code": "TC001"}"#, "x").unwrap();

        let output = use_case.generate(&test_case).await.unwrap();

        assert_eq!(output, "Feature: Login");
        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].0, SYSTEM_PROMPT);
        assert!(prompts[0].1.contains("Test Code: TC001"));
    }

    #[tokio::test]
    async fn test_generate_propagates_client_error() {
        let use_case = GherkinUseCase::new(Arc::new(FailingClient));
        let test_case = TestCaseDefinition::from_json("{}", "x").unwrap();

        let result = use_case.generate(&test_case).await;

        assert!(matches!(result, Err(AppError::LLMError(_))));
    }
}
