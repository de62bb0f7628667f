// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub project: ProjectPaths,
    pub preview: PreviewOptions,
}

impl AppOptions {
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            project: ProjectPaths::new(root),
            preview: PreviewOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Trips,
    Editor,
    Featured,
    Photos,
    Publish,
}

/// Every file the manager touches, derived from one project root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self { root: PathBuf::from(".") }
    }
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk up from `start` to the first directory holding the trips file.
    /// Falls back to `start` itself when nothing matches.
    pub fn discover(start: &Path) -> Self {
        let mut current = start.to_path_buf();
        loop {
            if current.join(TRIPS_DATA_FILE).is_file() {
                return Self::new(current);
            }
            // Running from the admin/ folder next to the site is common
            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                return Self::new(start);
            }
        }
    }

    pub fn root(&self) -> &Path { &self.root }
    pub fn trips_file(&self) -> PathBuf { self.root.join(TRIPS_DATA_FILE) }
    pub fn featured_file(&self) -> PathBuf { self.root.join(FEATURED_TRIPS_FILE) }
    pub fn images_dir(&self) -> PathBuf { self.root.join(IMAGES_DIR) }

    pub fn backup_file(&self) -> PathBuf {
        crate::store::backup_path(&self.trips_file())
    }

    pub fn html_files(&self) -> Vec<PathBuf> {
        HTML_FILES.iter().map(|f| self.root.join(f)).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewOptions {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            host: s!(PREVIEW_HOST),
            port: PREVIEW_PORT,
            open_browser: true,
        }
    }
}
