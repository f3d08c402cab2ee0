use std::path::PathBuf;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Deserializer};

use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;

pub const CONFIG_FILE: &str = "gherkin.toml";
const LLM_ENV_PREFIX: &str = "AZURE_OPENAI_";
const APP_ENV_PREFIX: &str = "GHERKIN_";

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(default, deserialize_with = "lenient_string")]
    api_key: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    endpoint: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    api_version: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    api_model: Option<String>,
    base_dir: Option<PathBuf>,
}

// Env values such as `4` or `12345` arrive as numbers; keys and deployment
// names are still plain text.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Flag(bool),
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<ScalarValue> = Option::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        ScalarValue::Text(text) => text,
        ScalarValue::Unsigned(number) => number.to_string(),
        ScalarValue::Signed(number) => number.to_string(),
        ScalarValue::Float(number) => number.to_string(),
        ScalarValue::Flag(flag) => flag.to_string(),
    }))
}

/// Immutable runtime settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub llm: LLMConfig,
    pub base_dir: PathBuf,
}

pub struct ConfigService {
    figment: Figment,
}

impl ConfigService {
    /// `gherkin.toml` (optional) overridden by the environment.
    pub fn new() -> Self {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(LLM_ENV_PREFIX))
                .merge(Env::prefixed(APP_ENV_PREFIX)),
        )
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    /// Loads `.env` into the process environment first, if the file exists.
    pub fn load() -> Result<Settings> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!(error = %err, "Failed to load .env file");
            }
        }
        Self::new().settings()
    }

    pub fn settings(&self) -> Result<Settings> {
        let raw: RawSettings = self
            .figment
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        let mut missing = Vec::new();
        let api_key = required(raw.api_key, "AZURE_OPENAI_API_KEY", &mut missing);
        let endpoint = required(raw.endpoint, "AZURE_OPENAI_ENDPOINT", &mut missing);
        let api_version = required(raw.api_version, "AZURE_OPENAI_API_VERSION", &mut missing);
        let model = required(raw.api_model, "AZURE_OPENAI_API_MODEL", &mut missing);

        if !missing.is_empty() {
            return Err(AppError::ConfigError(format!(
                "Missing Azure OpenAI configuration: {}",
                missing.join(", ")
            )));
        }

        let base_dir = match raw.base_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => std::env::current_dir()?,
        };

        Ok(Settings {
            llm: LLMConfig::new(api_key, endpoint, api_version, model),
            base_dir,
        })
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

fn required(value: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(value) => value,
        None => {
            missing.push(name);
            String::new()
        }
    }
}
