use crate::domain::error::{AppError, Result};
use serde::Deserialize;
use std::path::Path;

/// One step of a multi-step compliance workflow.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiCall {
    /// Step label; numbers and strings are both accepted.
    #[serde(default)]
    pub step: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
}

impl ApiCall {
    /// Step label, falling back to the 1-based position in the workflow.
    pub fn step_label(&self, position: usize) -> String {
        match &self.step {
            Some(serde_json::Value::String(value)) => value.clone(),
            Some(serde_json::Value::Null) | None => position.to_string(),
            Some(value) => value.to_string(),
        }
    }

    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("API Call")
    }

    pub fn method_or_default(&self) -> &str {
        self.method.as_deref().unwrap_or("GET")
    }

    pub fn api_url_or_default(&self) -> &str {
        self.api_url.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Deserialize, Default)]
struct RawTestCase {
    #[serde(default)]
    test_description: Option<String>,
    #[serde(default)]
    test_code: Option<String>,
    #[serde(default)]
    api_calls: Option<Vec<ApiCall>>,
    #[serde(default)]
    response_schema: Option<serde_json::Value>,
}

/// A JSON test-case definition with every default already applied.
#[derive(Debug, Clone)]
pub struct TestCaseDefinition {
    pub test_description: String,
    /// `test_code` exactly as written in the file, if any.
    pub declared_test_code: Option<String>,
    /// Output file name stem: the declared code, or the input file stem.
    pub test_code: String,
    pub api_calls: Vec<ApiCall>,
    pub response_schema: serde_json::Value,
}

impl TestCaseDefinition {
    /// Parses a definition; `fallback_code` is used when `test_code` is absent or blank.
    pub fn from_json(source: &str, fallback_code: &str) -> Result<Self> {
        let raw: RawTestCase = serde_json::from_str(source)?;

        let test_code = raw
            .test_code
            .clone()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| fallback_code.to_string());
        validate_test_code(&test_code)?;

        let response_schema = match raw.response_schema {
            Some(serde_json::Value::Null) | None => serde_json::json!({}),
            Some(value) => value,
        };

        Ok(Self {
            test_description: raw.test_description.unwrap_or_default(),
            declared_test_code: raw.test_code,
            test_code,
            api_calls: raw.api_calls.unwrap_or_default(),
            response_schema,
        })
    }

    /// Reads and parses a definition file, defaulting `test_code` to the file stem.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_json(&source, &stem)
    }
}

// The test code becomes a file name inside gherkin/<platform>/.
fn validate_test_code(test_code: &str) -> Result<()> {
    if test_code.is_empty() {
        return Err(AppError::ValidationError("Test code is empty.".to_string()));
    }
    if test_code == "." || test_code == ".." || test_code.contains(['/', '\\']) {
        return Err(AppError::ValidationError(format!(
            "Test code '{}' is not a valid file name.",
            test_code
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_to_empty_object() {
        let test_case = TestCaseDefinition::from_json("{}", "TC042").unwrap();
        assert_eq!(test_case.test_code, "TC042");
        assert_eq!(test_case.declared_test_code, None);
        assert_eq!(test_case.test_description, "");
        assert!(test_case.api_calls.is_empty());
        assert_eq!(test_case.response_schema, serde_json::json!({}));
    }

    #[test]
    fn test_explicit_test_code_wins_over_stem() {
        let test_case =
            TestCaseDefinition::from_json(r#"{"test_code": "TC001"}"#, "file-stem").unwrap();
        assert_eq!(test_case.test_code, "TC001");
    }

    #[test]
    fn test_blank_test_code_falls_back_to_stem() {
        let test_case = TestCaseDefinition::from_json(r#"{"test_code": "  "}"#, "stem").unwrap();
        assert_eq!(test_case.test_code, "stem");
    }

    #[test]
    fn test_test_code_is_kept_verbatim() {
        let test_case = TestCaseDefinition::from_json(r#"{"test_code": " TC1 "}"#, "stem").unwrap();
        assert_eq!(test_case.test_code, " TC1 ");
        assert_eq!(test_case.declared_test_code.as_deref(), Some(" TC1 "));
    }

    #[test]
    fn test_api_call_defaults() {
        let test_case = TestCaseDefinition::from_json(r#"{"api_calls": [{}]}"#, "x").unwrap();
        let call = &test_case.api_calls[0];
        assert_eq!(call.step_label(1), "1");
        assert_eq!(call.name_or_default(), "API Call");
        assert_eq!(call.method_or_default(), "GET");
        assert_eq!(call.api_url_or_default(), "");
    }

    #[test]
    fn test_step_label_accepts_numbers_and_strings() {
        let test_case = TestCaseDefinition::from_json(
            r#"{"api_calls": [{"step": 3}, {"step": "2a"}]}"#,
            "x",
        )
        .unwrap();
        assert_eq!(test_case.api_calls[0].step_label(1), "3");
        assert_eq!(test_case.api_calls[1].step_label(2), "2a");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let test_case =
            TestCaseDefinition::from_json(r#"{"severity": "high", "test_code": "A"}"#, "x")
                .unwrap();
        assert_eq!(test_case.test_code, "A");
    }

    #[test]
    fn test_wrong_field_type_is_parse_error() {
        let result = TestCaseDefinition::from_json(r#"{"test_code": 5}"#, "x");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = TestCaseDefinition::from_json("{not json", "x");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_path_like_test_code_is_rejected() {
        let result = TestCaseDefinition::from_json(r#"{"test_code": "../escape"}"#, "x");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
