pub mod use_cases;

pub use use_cases::gherkin::GherkinUseCase;
pub use use_cases::platform_walker::{PlatformReport, PlatformWalker};
