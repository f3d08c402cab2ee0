pub mod azure_openai;

use crate::domain::error::Result;
use async_trait::async_trait;

pub use azure_openai::AzureOpenAIClient;

/// Returned when the service answers without any message content.
pub const EMPTY_COMPLETION_FALLBACK: &str = "Failed to generate Gherkin code";

#[async_trait]
pub trait LLMClient {
    async fn generate(&self, system: &str, user: &str) -> Result<String>;
}
