// src/publish.rs
//
// The explicit "Save Changes" action: rewrite trips-data.js (keeping one
// backup), then bump the cache-busting version in the HTML pages.

use std::{error::Error, path::PathBuf};

use chrono::{DateTime, Local};

use crate::{
    cache_bust,
    catalog::Catalog,
    config::options::ProjectPaths,
    progress::Progress,
    store,
};

#[derive(Clone, Debug, Default)]
pub struct SaveReport {
    pub trips_file: PathBuf,
    pub backup: Option<PathBuf>,
    pub cache_updated: Vec<PathBuf>,
    pub version: i64,
}

impl SaveReport {
    /// Message-box text for the GUI/CLI.
    pub fn message(&self) -> String {
        let mut msg = format!("Changes saved to:\n{}", self.trips_file.display());
        if self.backup.is_some() {
            msg.push_str("\n\nBackup created.");
        }
        if !self.cache_updated.is_empty() {
            msg.push_str("\n\n✅ Cache-busting updated in HTML files.");
        }
        msg
    }
}

pub fn save_catalog(
    paths: &ProjectPaths,
    catalog: &mut Catalog,
    now: DateTime<Local>,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<SaveReport, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(2);
    }

    let trips_file = paths.trips_file();
    let backup = match store::save_trips(&trips_file, catalog.trips(), now) {
        Ok(b) => b,
        Err(e) => {
            if let Some(p) = progress.as_deref_mut() {
                p.step_failed("Save trips", &e.to_string());
                p.finish();
            }
            return Err(e);
        }
    };
    catalog.mark_saved();
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("Save trips");
    }

    let version = now.timestamp();
    let cache_updated =
        cache_bust::update_cache_version(&paths.html_files(), version, progress.as_deref_mut());
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("Cache busting");
        p.finish();
    }

    Ok(SaveReport { trips_file, backup, cache_updated, version })
}
