use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

/// File name looked up in the working directory when no config path is given.
pub const CONFIG_FILE_NAME: &str = "kryon.toml";

/// Options passed through to the runtime's `run(app, options)` entry point.
///
/// `target` is opaque here: choosing a renderer from it is the runtime's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOptions {
    pub target: String,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Root that markdown file references are resolved against.
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,

    /// Pages to build, by name. Empty means every registered page.
    #[serde(default)]
    pub pages: Vec<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_target() -> String {
    "web".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            target: default_target(),
            output_dir: default_output_dir(),
            project_root: default_project_root(),
            pages: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl SiteSettings {
    /// Read settings from `path`. A missing file is `Ok(None)`; an unreadable
    /// or malformed one is an error.
    pub fn read(path: &Path) -> Result<Option<Self>, AppError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(toml::from_str(&contents)?))
    }

    /// Settings from `path`, or defaults when the file is missing or bad.
    ///
    /// The failure, if any, is returned alongside the defaults for the caller
    /// to report.
    pub fn load(path: &Path) -> (Self, Option<AppError>) {
        match Self::read(path) {
            Ok(settings) => (settings.unwrap_or_default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Save settings to disk
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            target: self.target.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = SiteSettings::default();
        assert_eq!(settings.target, "web");
        assert_eq!(settings.output_dir, PathBuf::from("dist"));
        assert_eq!(settings.project_root, PathBuf::from("."));
        assert!(settings.pages.is_empty());
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_partial_config() {
        let settings: SiteSettings = toml::from_str(r#"target = "desktop""#).unwrap();
        assert_eq!(settings.target, "desktop");
        assert_eq!(settings.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(SiteSettings::read(&path).unwrap().is_none());

        let (settings, failure) = SiteSettings::load(&path);
        assert_eq!(settings, SiteSettings::default());
        assert!(failure.is_none());
    }

    #[test]
    fn test_load_malformed_file_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "target = [").unwrap();

        assert!(matches!(SiteSettings::read(&path), Err(AppError::TomlDe(_))));

        let (settings, failure) = SiteSettings::load(&path);
        assert_eq!(settings, SiteSettings::default());
        assert!(matches!(failure, Some(AppError::TomlDe(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let settings = SiteSettings {
            target: "terminal".to_string(),
            pages: vec!["docs".to_string()],
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(SiteSettings::read(&path).unwrap(), Some(settings));
    }

    #[test]
    fn test_run_options_serialize_camel_case() {
        let options = SiteSettings::default().run_options();
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json, serde_json::json!({ "target": "web", "outputDir": "dist" }));
    }
}
