use std::path::{Path, PathBuf};

use crate::app::domain::Node;

use super::tree::markdown_files;

/// Resolve a markdown file reference against the project root.
/// Absolute references are returned unchanged.
pub fn resolve_markdown_path(project_root: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        project_root.join(file)
    }
}

/// Check if a file path points to a markdown file.
pub fn is_markdown_file(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => {
            let lower = ext.to_lowercase();
            lower == "md" || lower == "markdown" || lower == "mdown"
        }
        None => false,
    }
}

/// Markdown files referenced by the tree that do not exist under `project_root`.
pub fn missing_markdown_files(root: &Node, project_root: &Path) -> Vec<PathBuf> {
    markdown_files(root)
        .into_iter()
        .map(|file| resolve_markdown_path(project_root, file))
        .filter(|path| !path.is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::MarkdownTheme;
    use crate::app::services::compose::{column, markdown_file};
    use std::fs;

    #[test]
    fn test_resolve_relative_and_absolute() {
        let root = Path::new("/srv/site");
        assert_eq!(
            resolve_markdown_path(root, Path::new("docs/a.md")),
            PathBuf::from("/srv/site/docs/a.md")
        );
        assert_eq!(
            resolve_markdown_path(root, Path::new("/tmp/b.md")),
            PathBuf::from("/tmp/b.md")
        );
    }

    #[test]
    fn test_is_markdown_file() {
        assert!(is_markdown_file(Path::new("README.md")));
        assert!(is_markdown_file(Path::new("notes.MARKDOWN")));
        assert!(is_markdown_file(Path::new("a/b.mdown")));
        assert!(!is_markdown_file(Path::new("main.rs")));
        assert!(!is_markdown_file(Path::new("Makefile")));
    }

    #[test]
    fn test_missing_markdown_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/present.md"), "# Here").unwrap();

        let tree = column()
            .child(markdown_file("docs/present.md", MarkdownTheme::Dark))
            .child(markdown_file("docs/absent.md", MarkdownTheme::Dark))
            .build();

        let missing = missing_markdown_files(&tree, dir.path());
        assert_eq!(missing, vec![dir.path().join("docs/absent.md")]);
    }
}
