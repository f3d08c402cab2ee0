use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::platform::Platform;

pub const GHERKIN_DIR: &str = "gherkin";
pub const GHERKIN_EXTENSION: &str = "gherkin";

pub fn platform_input_dir(base_dir: &Path, platform: Platform) -> PathBuf {
    base_dir.join(platform.as_str())
}

pub fn ensure_gherkin_dir(base_dir: &Path, platform: Platform) -> std::io::Result<PathBuf> {
    let gherkin_dir = base_dir.join(GHERKIN_DIR).join(platform.as_str());
    ensure_dir(&gherkin_dir)?;
    Ok(gherkin_dir)
}

/// Regular `*.json` files in `dir`, sorted by file name.
pub fn list_json_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_json = path
            .extension()
            .map(|ext| ext == "json")
            .unwrap_or(false);
        if is_json && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn gherkin_file_path(gherkin_dir: &Path, test_code: &str) -> PathBuf {
    gherkin_dir.join(format!("{}.{}", test_code, GHERKIN_EXTENSION))
}

/// Writes (or overwrites) a feature file. Returns true when a file was replaced.
pub fn write_gherkin(path: &Path, content: &str) -> std::io::Result<bool> {
    let existed = path.exists();
    fs::write(path, content)?;
    Ok(existed)
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_gherkin_dir_is_idempotent() {
        let base = tempfile::tempdir().unwrap();
        let first = ensure_gherkin_dir(base.path(), Platform::Aws).unwrap();
        let second = ensure_gherkin_dir(base.path(), Platform::Aws).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, base.path().join("gherkin").join("aws"));
        assert!(first.is_dir());
    }

    #[test]
    fn test_list_json_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = list_json_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_write_gherkin_reports_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = gherkin_file_path(dir.path(), "TC001");
        assert_eq!(path.file_name().unwrap(), "TC001.gherkin");

        assert!(!write_gherkin(&path, "Feature: One").unwrap());
        assert!(write_gherkin(&path, "Feature: Two").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "Feature: Two");
    }
}
