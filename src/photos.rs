// src/photos.rs
use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::PHOTO_EXTS;

pub fn is_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| PHOTO_EXTS.iter().any(|x| x.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// File names of the trip photos in `dir`, sorted. Missing dir → empty.
pub fn list_photos(dir: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || !is_photo(&path) { continue; }
        if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
            names.push(s!(name));
        }
    }
    names.sort();
    Ok(names)
}

/// Copy `src` into `dir` under its own file name. Overwrites a photo with
/// the same name. Returns the destination.
pub fn import_photo(src: &Path, dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if !src.is_file() {
        return Err(err!("Not a file: {}", src.display()));
    }
    if !is_photo(src) {
        return Err(err!("Not an image ({}): {}", PHOTO_EXTS.join(", "), src.display()));
    }
    let name = src.file_name().ok_or_else(|| err!("No file name: {}", src.display()))?;

    fs::create_dir_all(dir)?;
    let dest = dir.join(name);
    fs::copy(src, &dest)?;
    logf!("Photos: {} → {}", src.display(), dest.display());
    Ok(dest)
}
