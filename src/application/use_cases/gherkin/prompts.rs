use crate::domain::test_case::TestCaseDefinition;

pub(crate) const SYSTEM_PROMPT: &str = "You are a helpful assistant that generates Gherkin code for API testing. Respond ONLY with the Gherkin code, no explanations, no markdown formatting, just the raw Gherkin code.";

const STEP_SEPARATOR: &str = "\n      ";

pub(crate) fn build_steps_summary(test_case: &TestCaseDefinition) -> String {
    test_case
        .api_calls
        .iter()
        .enumerate()
        .map(|(index, call)| {
            format!(
                "Step {}: {} ({} {})",
                call.step_label(index + 1),
                call.name_or_default(),
                call.method_or_default(),
                call.api_url_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join(STEP_SEPARATOR)
}

pub(crate) fn build_user_prompt(test_case: &TestCaseDefinition) -> String {
    let steps_summary = build_steps_summary(test_case);
    let response_schema = serde_json::to_string_pretty(&test_case.response_schema)
        .unwrap_or_else(|_| "{}".to_string());

    let mut body = String::new();
    body.push('\n');
    body.push_str(
        "      Generate Gherkin code for the following multi-step API compliance test:\n\n",
    );
    body.push_str(&format!(
        "      Test Description: {}\n",
        test_case.test_description
    ));
    body.push_str(&format!(
        "      Test Code: {}\n\n",
        test_case.declared_test_code.as_deref().unwrap_or("")
    ));
    body.push_str("      Multi-Step Workflow:\n");
    body.push_str(&format!("      {}\n\n", steps_summary));
    body.push_str(&format!(
        "      Expected Response Schema: {}\n\n",
        response_schema
    ));
    body.push_str("      IMPORTANT:\n");
    body.push_str("      - Respond ONLY with the raw Gherkin code.\n");
    body.push_str("      - No explanations, markdown formatting, or code blocks.\n");
    body.push_str("      - Start directly with 'Feature:'\n");
    body.push_str(
        "      - Include Scenario with Given, When, Then steps that describe this multi-step compliance test workflow\n",
    );
    body.push_str(
        "      - Focus on the business logic and compliance validation, not individual API details\n",
    );
    body.push_str("    ");

    body
}
