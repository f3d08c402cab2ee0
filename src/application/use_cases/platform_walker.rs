use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::application::use_cases::gherkin::GherkinUseCase;
use crate::domain::error::Result;
use crate::domain::platform::Platform;
use crate::domain::test_case::TestCaseDefinition;
use crate::infrastructure::storage::{
    ensure_gherkin_dir, gherkin_file_path, list_json_files, platform_input_dir, write_gherkin,
    GHERKIN_DIR,
};

/// Outcome counts for one platform directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformReport {
    pub platform: Platform,
    pub discovered: usize,
    pub written: usize,
    pub failed: usize,
    pub skipped_missing_dir: bool,
}

impl PlatformReport {
    fn new(platform: Platform) -> Self {
        Self {
            platform,
            discovered: 0,
            written: 0,
            failed: 0,
            skipped_missing_dir: false,
        }
    }
}

enum FileOutcome {
    Written(PathBuf),
    Empty(String),
}

pub struct PlatformWalker {
    base_dir: PathBuf,
    gherkin: GherkinUseCase,
}

impl PlatformWalker {
    pub fn new(base_dir: impl Into<PathBuf>, gherkin: GherkinUseCase) -> Self {
        Self {
            base_dir: base_dir.into(),
            gherkin,
        }
    }

    /// Generates a feature file for every JSON test case of `platform`.
    /// Per-file failures are logged and counted, never returned.
    pub async fn process_platform(&self, platform: Platform) -> PlatformReport {
        let mut report = PlatformReport::new(platform);

        let platform_path = platform_input_dir(&self.base_dir, platform);
        if !platform_path.exists() {
            info!(%platform, "Platform directory not found, skipping");
            report.skipped_missing_dir = true;
            return report;
        }

        let gherkin_dir = match ensure_gherkin_dir(&self.base_dir, platform) {
            Ok(dir) => dir,
            Err(err) => {
                error!(%platform, error = %err, "Failed to create gherkin output dir");
                return report;
            }
        };

        let json_files = match list_json_files(&platform_path) {
            Ok(files) => files,
            Err(err) => {
                error!(
                    %platform,
                    error = %err,
                    dir = %platform_path.display(),
                    "Failed to list JSON files"
                );
                return report;
            }
        };

        if json_files.is_empty() {
            info!(%platform, "No JSON files found");
            return report;
        }
        report.discovered = json_files.len();

        for json_file in &json_files {
            let file_name = display_name(json_file);
            match self.process_file(json_file, &gherkin_dir).await {
                Ok(FileOutcome::Written(path)) => {
                    report.written += 1;
                    info!(
                        file = %file_name,
                        "Created {}/{}/{}",
                        GHERKIN_DIR,
                        platform,
                        display_name(&path)
                    );
                }
                Ok(FileOutcome::Empty(test_code)) => {
                    report.failed += 1;
                    warn!(%platform, %test_code, "Failed to generate Gherkin");
                }
                Err(err) => {
                    report.failed += 1;
                    error!(%platform, file = %file_name, error = %err, "Error processing file");
                }
            }
        }

        info!(
            %platform,
            discovered = report.discovered,
            written = report.written,
            failed = report.failed,
            "Processed tests"
        );
        report
    }

    async fn process_file(&self, json_file: &Path, gherkin_dir: &Path) -> Result<FileOutcome> {
        let test_case = TestCaseDefinition::from_file(json_file)?;
        info!(test_code = %test_case.test_code, "Processing test case");

        let content = self.gherkin.generate(&test_case).await?;
        if content.is_empty() {
            return Ok(FileOutcome::Empty(test_case.test_code));
        }

        let gherkin_file = gherkin_file_path(gherkin_dir, &test_case.test_code);
        if write_gherkin(&gherkin_file, &content)? {
            info!(file = %gherkin_file.display(), "Overwrote existing feature file");
        }
        Ok(FileOutcome::Written(gherkin_file))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
