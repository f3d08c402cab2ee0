use once_cell::sync::Lazy;
use regex::Regex;

static CODE_BLOCK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:gherkin)?([\s\S]*?)```").unwrap());

static CERTAINLY_PREAMBLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*Certainly!.*?\n").unwrap());

static HERE_IS_PREAMBLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*Here is.*?\n").unwrap());

static BELOW_IS_PREAMBLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*Below is.*?\n").unwrap());

const FEATURE_MARKER: &str = "Feature:";

/// Extracts plain Gherkin text from a completion response.
///
/// First match wins: the first fenced code block, then everything from the
/// first `Feature:`, then the response with a known preamble line removed.
pub fn extract_gherkin_code(response: &str) -> String {
    if let Some(block) = CODE_BLOCK_PATTERN
        .captures(response)
        .and_then(|captures| captures.get(1))
    {
        return block.as_str().trim().to_string();
    }

    if let Some(index) = response.find(FEATURE_MARKER) {
        return response[index..].trim().to_string();
    }

    let mut cleaned = response.to_string();
    for pattern in [
        &CERTAINLY_PREAMBLE_PATTERN,
        &HERE_IS_PREAMBLE_PATTERN,
        &BELOW_IS_PREAMBLE_PATTERN,
    ] {
        cleaned = pattern.replace(&cleaned, "").to_string();
    }

    cleaned.trim().to_string()
}
