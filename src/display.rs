//! Output ports that put rendered markup in front of the user.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::render;

/// Destination for rendered preview markup.
///
/// Rendering only produces strings; whatever finally shows them — a page
/// opened in a browser, a pipe into another tool — implements this.
pub trait DisplayPort {
    /// Present `markup` inside the container with the given id.
    fn show_markup(&mut self, container: &str, markup: &str) -> Result<()>;
}

/// Writes the preview as a standalone modal-styled page.
pub struct HtmlFileDisplay {
    path: PathBuf,
}

impl HtmlFileDisplay {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Where the page is written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplayPort for HtmlFileDisplay {
    fn show_markup(&mut self, container: &str, markup: &str) -> Result<()> {
        let page = render::render_page(container, markup);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        std::fs::write(&self.path, page)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        info!(path = %self.path.display(), "preview_written");
        Ok(())
    }
}

/// Prints the bare fragment to stdout for piping.
pub struct StdoutDisplay;

impl DisplayPort for StdoutDisplay {
    fn show_markup(&mut self, _container: &str, markup: &str) -> Result<()> {
        print!("{}", markup);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_display_writes_page_with_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.html");
        let mut display = HtmlFileDisplay::new(path.clone());

        display
            .show_markup("previewContent", "<div>фрагмент</div>\n")
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("id=\"previewContent\""));
        assert!(written.contains("<div>фрагмент</div>"));
    }

    #[test]
    fn test_file_display_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("preview.html");
        let mut display = HtmlFileDisplay::new(path.clone());

        display.show_markup("c", "<div></div>\n").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_display_overwrites_previous_preview() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.html");
        let mut display = HtmlFileDisplay::new(path.clone());

        display.show_markup("c", "<div>первый</div>\n").unwrap();
        display.show_markup("c", "<div>второй</div>\n").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("второй"));
        assert!(!written.contains("первый"));
    }
}
