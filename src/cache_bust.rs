// src/cache_bust.rs
//
// Browsers cache js/trips-data.js hard. After a save, every page that loads
// it gets `?v=<unix time>` on the script tag so the next visit re-fetches.

use std::{borrow::Cow, fs, path::PathBuf, sync::OnceLock};

use regex::{Captures, Regex};

use crate::progress::Progress;

fn script_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(src=["']js/trips-data\.js)(\?v=\d+)?(["'])"#).unwrap())
}

/// Point every trips-data.js script tag in `html` at `version`.
/// Tags already carrying a `?v=` only get the number replaced.
pub fn bust_html(html: &str, version: i64) -> Cow<'_, str> {
    if !html.contains("trips-data.js") {
        return Cow::Borrowed(html);
    }
    script_re().replace_all(html, |caps: &Captures| {
        format!("{}?v={}{}", &caps[1], version, &caps[3])
    })
}

/// Current version found on the first matching tag, if any.
pub fn current_version(html: &str) -> Option<i64> {
    let caps = script_re().captures(html)?;
    caps.get(2)?.as_str().trim_start_matches("?v=").parse().ok()
}

/// Rewrite each existing file in `files`. Missing files and files without the
/// tag are skipped; a file that fails to read or write is logged and skipped.
/// Returns the files that changed.
pub fn update_cache_version(
    files: &[PathBuf],
    version: i64,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<PathBuf> {
    let mut updated = Vec::new();

    for path in files {
        if !path.exists() {
            continue;
        }
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                loge!("Cache: Failed to read {}: {e}", path.display());
                continue;
            }
        };

        let new_content = bust_html(&content, version);
        if new_content == content {
            continue;
        }
        if let Err(e) = fs::write(path, new_content.as_bytes()) {
            loge!("Cache: Failed to update {}: {e}", path.display());
            continue;
        }

        logf!("Cache: Updated version in {}", path.display());
        if let Some(p) = progress.as_deref_mut() {
            let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            p.log(&format!("Cache version updated: {name}"));
        }
        updated.push(path.clone());
    }

    if !updated.is_empty() {
        logf!("Cache: Updated {} HTML files with v={version}", updated.len());
    }
    updated
}
