pub mod gherkin;
pub mod platform_walker;
