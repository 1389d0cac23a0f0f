use crate::app::domain::{AppConfig, RunOptions, SiteSettings};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::text_ops::page_file_name;

use super::runtime::{Manifest, ManifestEntry, Runtime};

/// A named page of the site and the function that composes it.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub name: &'static str,
    compose: fn() -> Result<AppConfig>,
}

impl Page {
    pub const fn new(name: &'static str, compose: fn() -> Result<AppConfig>) -> Self {
        Self { name, compose }
    }

    pub fn build(&self) -> Result<AppConfig> {
        (self.compose)()
    }
}

/// Builds the pages selected by the settings and hands them to a runtime.
pub struct SiteController {
    settings: SiteSettings,
    pages: &'static [Page],
}

impl SiteController {
    pub fn new(settings: SiteSettings) -> Self {
        Self::with_pages(settings, crate::ui::PAGES)
    }

    pub fn with_pages(settings: SiteSettings, pages: &'static [Page]) -> Self {
        Self { settings, pages }
    }

    /// Every registered page, in registry order.
    pub fn pages(&self) -> &'static [Page] {
        self.pages
    }

    pub fn find(&self, name: &str) -> Result<&'static Page> {
        self.pages
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| AppError::UnknownPage(name.to_string()))
    }

    /// Pages named in the settings, in the order given there; all pages when
    /// none are named.
    pub fn selected(&self) -> Result<Vec<&'static Page>> {
        if self.settings.pages.is_empty() {
            return Ok(self.pages.iter().collect());
        }
        self.settings.pages.iter().map(|name| self.find(name)).collect()
    }

    pub fn build(&self, name: &str) -> Result<AppConfig> {
        self.find(name)?.build()
    }

    /// Build every selected page and run it through `runtime`. Stops at the
    /// first page that fails to build or export.
    pub fn export(&self, runtime: &dyn Runtime, options: &RunOptions) -> Result<Manifest> {
        let pages = self.selected()?;
        tracing::info!(
            "Building {} page(s) for target '{}'",
            pages.len(),
            options.target
        );

        let mut entries = Vec::with_capacity(pages.len());
        for page in pages {
            tracing::debug!("Composing {}", page.name);
            let app = page.build()?;
            runtime.run(page.name, &app, options)?;
            entries.push(ManifestEntry {
                name: page.name.to_string(),
                file: page_file_name(page.name),
                title: app.title().map(str::to_string),
            });
        }

        let manifest = Manifest { target: options.target.clone(), pages: entries };
        runtime.finish(&manifest, options)?;
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::WindowConfig;
    use crate::app::services::compose::{column, text};
    use std::cell::RefCell;
    use std::path::PathBuf;

    fn alpha() -> Result<AppConfig> {
        AppConfig::new(WindowConfig::new().title("Alpha"), || {
            column().child(text("a")).build()
        })
    }

    fn beta() -> Result<AppConfig> {
        AppConfig::new(WindowConfig::new(), || column().build())
    }

    static TEST_PAGES: &[Page] = &[Page::new("alpha", alpha), Page::new("beta", beta)];

    #[derive(Default)]
    struct Recorder {
        runs: RefCell<Vec<String>>,
        finished: RefCell<Option<Manifest>>,
    }

    impl Runtime for Recorder {
        fn run(&self, page: &str, _app: &AppConfig, _options: &RunOptions) -> Result<()> {
            self.runs.borrow_mut().push(page.to_string());
            Ok(())
        }

        fn finish(&self, manifest: &Manifest, _options: &RunOptions) -> Result<()> {
            *self.finished.borrow_mut() = Some(manifest.clone());
            Ok(())
        }
    }

    fn options() -> RunOptions {
        RunOptions { target: "web".to_string(), output_dir: PathBuf::from("dist") }
    }

    #[test]
    fn test_selected_defaults_to_all_pages() {
        let site = SiteController::with_pages(SiteSettings::default(), TEST_PAGES);
        let names: Vec<_> = site.selected().unwrap().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_selected_keeps_configured_order() {
        let settings = SiteSettings {
            pages: vec!["beta".to_string(), "alpha".to_string()],
            ..Default::default()
        };
        let site = SiteController::with_pages(settings, TEST_PAGES);
        let names: Vec<_> = site.selected().unwrap().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["beta", "alpha"]);
    }

    #[test]
    fn test_unknown_page() {
        let settings = SiteSettings { pages: vec!["blog".to_string()], ..Default::default() };
        let site = SiteController::with_pages(settings, TEST_PAGES);
        assert!(matches!(site.selected(), Err(AppError::UnknownPage(name)) if name == "blog"));
        assert!(matches!(site.build("blog"), Err(AppError::UnknownPage(_))));
    }

    #[test]
    fn test_export_runs_every_page_then_finishes() {
        let site = SiteController::with_pages(SiteSettings::default(), TEST_PAGES);
        let recorder = Recorder::default();

        let manifest = site.export(&recorder, &options()).unwrap();

        assert_eq!(*recorder.runs.borrow(), vec!["alpha", "beta"]);
        assert_eq!(recorder.finished.borrow().as_ref(), Some(&manifest));
        assert_eq!(manifest.target, "web");
        assert_eq!(manifest.pages[0].file, "alpha.json");
        assert_eq!(manifest.pages[0].title.as_deref(), Some("Alpha"));
        assert_eq!(manifest.pages[1].title, None);
    }

    #[test]
    fn test_registered_site_pages_build() {
        let site = SiteController::new(SiteSettings::default());
        for page in site.pages() {
            let app = page.build().unwrap();
            assert!(app.title().is_some(), "{} has no title", page.name);
        }
    }
}
