pub mod error;
pub mod llm_config;
pub mod platform;
pub mod test_case;
