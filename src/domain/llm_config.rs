pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Connection settings for the Azure OpenAI chat-completion deployment.
#[derive(Debug, Clone)]
pub struct LLMConfig {
    pub api_key: String,
    pub endpoint: String,
    pub api_version: String,
    /// Deployment name; also sent as the request `model`.
    pub model: String,
    pub temperature: f32,
}

impl LLMConfig {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        api_version: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            api_version: api_version.into(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}
