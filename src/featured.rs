// src/featured.rs
//
// The homepage's "Upcoming Adventures": an ordered, short list of trip ids
// kept in js/featured-trips.js.

use std::{error::Error, fs, path::Path, sync::OnceLock};

use chrono::{DateTime, Local};
use regex::Regex;
use serde_json::Value;
use thiserror::Error as ThisError;

use crate::catalog::Catalog;
use crate::config::consts::{DEFAULT_FEATURED, MAX_FEATURED};
use crate::jsobj::{js_to_json, literal_extent};
use crate::store::js_string;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum FeaturedError {
    #[error("Maximum {} featured trips allowed. Remove one first to add another.", MAX_FEATURED)]
    LimitReached,

    #[error("'{0}' is already featured")]
    AlreadyFeatured(String),

    #[error("No trip with ID '{0}'")]
    UnknownTrip(String),

    #[error("'{0}' is not featured")]
    NotFeatured(String),
}

fn decl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:const|let|var)\s+featuredTripIds\s*=\s*").unwrap())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Featured {
    ids: Vec<String>,
    dirty: bool,
}

impl Featured {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids, dirty: false }
    }

    pub fn defaults() -> Self {
        Self::new(DEFAULT_FEATURED.iter().map(|s| s!(*s)).collect())
    }

    /// Read the id array. A missing or unrecognisable file yields the
    /// built-in defaults.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match parse_featured(&text) {
                Some(ids) => {
                    logf!("Featured: Loaded {} ids", ids.len());
                    Self::new(ids)
                }
                None => {
                    loge!("Featured: No featuredTripIds array in {}", path.display());
                    Self::defaults()
                }
            },
            Err(e) => {
                logd!("Featured: {} unreadable ({e}), using defaults", path.display());
                Self::defaults()
            }
        }
    }

    pub fn save(&mut self, path: &Path, now: DateTime<Local>) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, render_featured(&self.ids, now))?;
        self.dirty = false;
        logf!("Featured: Saved {:?} → {}", self.ids, path.display());
        Ok(())
    }

    pub fn ids(&self) -> &[String] { &self.ids }
    pub fn len(&self) -> usize { self.ids.len() }
    pub fn is_empty(&self) -> bool { self.ids.is_empty() }
    pub fn is_dirty(&self) -> bool { self.dirty }
    pub fn contains(&self, id: &str) -> bool { self.ids.iter().any(|x| x == id) }

    pub fn add(&mut self, id: &str, catalog: &Catalog) -> Result<(), FeaturedError> {
        if self.contains(id) {
            return Err(FeaturedError::AlreadyFeatured(s!(id)));
        }
        if self.ids.len() >= MAX_FEATURED {
            return Err(FeaturedError::LimitReached);
        }
        if !catalog.contains_id(id) {
            return Err(FeaturedError::UnknownTrip(s!(id)));
        }
        self.ids.push(s!(id));
        self.dirty = true;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<(), FeaturedError> {
        let pos = self.position(id)?;
        self.ids.remove(pos);
        self.dirty = true;
        Ok(())
    }

    /// Swap with the previous entry. Returns the new position.
    pub fn move_up(&mut self, id: &str) -> Result<usize, FeaturedError> {
        let pos = self.position(id)?;
        if pos == 0 {
            return Ok(0);
        }
        self.ids.swap(pos, pos - 1);
        self.dirty = true;
        Ok(pos - 1)
    }

    /// Swap with the next entry. Returns the new position.
    pub fn move_down(&mut self, id: &str) -> Result<usize, FeaturedError> {
        let pos = self.position(id)?;
        if pos + 1 >= self.ids.len() {
            return Ok(pos);
        }
        self.ids.swap(pos, pos + 1);
        self.dirty = true;
        Ok(pos + 1)
    }

    /// `(id, display title)` per featured entry; ids no longer in the
    /// catalog show as `Unknown (<id>)`.
    pub fn entries(&self, catalog: &Catalog) -> Vec<(String, String)> {
        self.ids
            .iter()
            .map(|id| {
                let title = catalog
                    .find(id)
                    .map(|t| t.title.clone())
                    .unwrap_or_else(|| format!("Unknown ({id})"));
                (id.clone(), title)
            })
            .collect()
    }

    /// Catalog trips that are not featured, as `(id, title)`.
    pub fn available(&self, catalog: &Catalog) -> Vec<(String, String)> {
        catalog
            .trips()
            .iter()
            .filter(|t| !self.contains(&t.id))
            .map(|t| (t.id.clone(), t.title.clone()))
            .collect()
    }

    fn position(&self, id: &str) -> Result<usize, FeaturedError> {
        self.ids
            .iter()
            .position(|x| x == id)
            .ok_or_else(|| FeaturedError::NotFeatured(s!(id)))
    }
}

/// Read the ids out of `const featuredTripIds = [ ... ]`. Non-string
/// entries are skipped.
pub fn parse_featured(text: &str) -> Option<Vec<String>> {
    let m = decl_re().find(text)?;
    let rest = &text[m.end()..];
    if !rest.starts_with('[') {
        return None;
    }
    let len = literal_extent(rest)?;
    let items: Vec<Value> = serde_json::from_str(&js_to_json(&rest[..len])).ok()?;
    Some(
        items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(id) if !id.is_empty() => Some(id),
                _ => None,
            })
            .collect(),
    )
}

pub fn render_featured(ids: &[String], now: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str("// ============================================\n");
    out.push_str("// FEATURED TRIPS CONFIGURATION\n");
    out.push_str("// ============================================\n");
    out.push_str("// \n");
    out.push_str("// These trips will be displayed on the homepage\n");
    out.push_str("// in the \"Upcoming Adventures\" section.\n");
    out.push_str("// \n");
    out.push_str("// Edit using Trip Manager → ⭐ Featured Trips\n");
    out.push_str(&format!("// Last updated: {}\n", now.format("%Y-%m-%d %H:%M")));
    out.push_str("// ============================================\n\n");

    out.push_str("const featuredTripIds = [\n");
    for id in ids {
        out.push_str(&format!("    {},\n", js_string(id)));
    }
    out.push_str("];\n\n");

    out.push_str(
        "// Function to get featured trips data
function getFeaturedTrips() {
    return featuredTripIds.map(id => {
        const trip = tripsData[id];
        if (trip) {
            return { id, ...trip };
        }
        return null;
    }).filter(t => t !== null);
}
",
    );
    out
}
