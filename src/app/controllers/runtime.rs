use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::app::domain::{AppConfig, RunOptions};
use crate::app::infrastructure::error::Result;
use crate::app::services::markdown::{is_markdown_file, missing_markdown_files};
use crate::app::services::tree::markdown_files;
use crate::app::services::text_ops::page_file_name;

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Index of the pages handed to a runtime in one build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub target: String,
    pub pages: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// The `run(app, options)` boundary to an external rendering runtime.
pub trait Runtime {
    /// Hand one page over.
    fn run(&self, page: &str, app: &AppConfig, options: &RunOptions) -> Result<()>;

    /// Called once after every page of a build has been handed over.
    fn finish(&self, _manifest: &Manifest, _options: &RunOptions) -> Result<()> {
        Ok(())
    }
}

/// Writes each page as pretty JSON to `<outputDir>/<page>.json`, plus a
/// `manifest.json`, for a renderer to pick up.
///
/// Markdown files are not read; references that do not resolve under the
/// project root are logged and left for the renderer to report.
#[derive(Debug, Clone)]
pub struct ExportRuntime {
    project_root: PathBuf,
}

impl ExportRuntime {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self { project_root: project_root.into() }
    }
}

impl Runtime for ExportRuntime {
    fn run(&self, page: &str, app: &AppConfig, options: &RunOptions) -> Result<()> {
        for file in markdown_files(app.root()) {
            if !is_markdown_file(file) {
                tracing::warn!("{}: {} is not a markdown file", page, file.display());
            }
        }
        for missing in missing_markdown_files(app.root(), &self.project_root) {
            tracing::warn!("{}: markdown file not found: {}", page, missing.display());
        }

        fs::create_dir_all(&options.output_dir)?;
        let path = options.output_dir.join(page_file_name(page));
        fs::write(&path, app.to_json_pretty()?)?;

        tracing::info!("Exported {} to {}", page, path.display());
        Ok(())
    }

    fn finish(&self, manifest: &Manifest, options: &RunOptions) -> Result<()> {
        fs::create_dir_all(&options.output_dir)?;
        let path = options.output_dir.join(MANIFEST_FILE_NAME);
        fs::write(&path, serde_json::to_string_pretty(manifest)?)?;

        tracing::debug!("Wrote manifest with {} pages", manifest.pages.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{MarkdownTheme, WindowConfig};
    use crate::app::services::compose::{column, markdown_file, text};

    fn sample_app() -> AppConfig {
        AppConfig::new(WindowConfig::new().title("Sample"), || {
            column()
                .child(text("hello"))
                .child(markdown_file("docs/missing.md", MarkdownTheme::Dark))
                .build()
        })
        .unwrap()
    }

    #[test]
    fn test_export_writes_page_json() {
        let dir = tempfile::tempdir().unwrap();
        let options = RunOptions {
            target: "web".to_string(),
            output_dir: dir.path().join("dist"),
        };
        let runtime = ExportRuntime::new(dir.path());
        let app = sample_app();

        runtime.run("sample", &app, &options).unwrap();

        let written = fs::read_to_string(dir.path().join("dist/sample.json")).unwrap();
        assert_eq!(AppConfig::from_json(&written).unwrap(), app);
    }

    #[test]
    fn test_finish_writes_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let options = RunOptions {
            target: "terminal".to_string(),
            output_dir: dir.path().to_path_buf(),
        };
        let manifest = Manifest {
            target: options.target.clone(),
            pages: vec![ManifestEntry {
                name: "sample".to_string(),
                file: "sample.json".to_string(),
                title: Some("Sample".to_string()),
            }],
        };

        ExportRuntime::new(dir.path()).finish(&manifest, &options).unwrap();

        let written = fs::read_to_string(dir.path().join(MANIFEST_FILE_NAME)).unwrap();
        let loaded: Manifest = serde_json::from_str(&written).unwrap();
        assert_eq!(loaded, manifest);
    }
}
