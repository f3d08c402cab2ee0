use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::application::{GherkinUseCase, PlatformReport, PlatformWalker};
use crate::domain::platform::Platform;
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::llm_clients::{AzureOpenAIClient, LLMClient};

const BANNER_WIDTH: usize = 70;

pub async fn run() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    info!("Starting Gherkin feature generation using Azure OpenAI...");

    let settings = match ConfigService::load() {
        Ok(settings) => settings,
        Err(err) => {
            error!(error = %err, "Missing Azure OpenAI configuration!");
            error!("Please copy .env.example to .env and fill in your credentials.");
            return ExitCode::FAILURE;
        }
    };
    info!(base_dir = %settings.base_dir.display(), "Base directory");

    let llm_client: Arc<dyn LLMClient + Send + Sync> =
        Arc::new(AzureOpenAIClient::new(settings.llm.clone()));
    info!("Azure OpenAI client initialized");

    let reports = generate_all(&settings.base_dir, llm_client).await;

    for report in &reports {
        info!(
            platform = %report.platform,
            discovered = report.discovered,
            written = report.written,
            failed = report.failed,
            skipped = report.skipped_missing_dir,
            "Platform summary"
        );
    }

    let written: usize = reports.iter().map(|report| report.written).sum();
    let failed: usize = reports.iter().map(|report| report.failed).sum();
    info!("{}", "=".repeat(BANNER_WIDTH));
    info!(written, failed, "Generation complete!");
    info!("{}", "=".repeat(BANNER_WIDTH));

    ExitCode::SUCCESS
}

/// Walks every platform in order, one file at a time.
pub(crate) async fn generate_all(
    base_dir: &Path,
    llm_client: Arc<dyn LLMClient + Send + Sync>,
) -> Vec<PlatformReport> {
    let walker = PlatformWalker::new(base_dir, GherkinUseCase::new(llm_client));

    let mut reports = Vec::with_capacity(Platform::ALL.len());
    for platform in Platform::ALL {
        info!(%platform, "Processing platform");
        reports.push(walker.process_platform(platform).await);
    }
    reports
}
