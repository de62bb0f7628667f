// src/desktop.rs
//
// Hand a path or URL to the desktop: file manager for folders, default
// browser for http:// URLs.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Open `target` with the platform's default handler.
pub fn open_in_system(target: impl AsRef<OsStr>) -> Result<(), String> {
    let target = target.as_ref();

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("explorer")
            .arg(target)
            .spawn()
            .map_err(|e| format!("Failed to spawn explorer: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(target)
            .spawn()
            .map_err(|e| format!("Failed to spawn open: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(target)
            .spawn()
            .map_err(|e| format!("Failed to spawn xdg-open: {}", e))?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = target;
        Err("Opening files not supported on this platform".to_string())
    }
}

/// Open `path` (or its nearest existing ancestor) in the file manager.
pub fn open_folder(path: &Path) -> Result<PathBuf, String> {
    let folder = nearest_existing_dir(path);
    let absolute = std::fs::canonicalize(&folder)
        .map_err(|e| format!("Cannot resolve folder path: {}", e))?;
    open_in_system(&absolute)?;
    logf!("Opened folder: {}", absolute.display());
    Ok(absolute)
}

/// Walk up until a directory exists; `.` if none does.
pub fn nearest_existing_dir(path: &Path) -> PathBuf {
    let mut current = path.to_path_buf();
    loop {
        if current.is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => current = parent.to_path_buf(),
            _ => return PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_dir_walks_up() {
        let tmp = std::env::temp_dir();
        let missing = tmp.join("trip_manager_nope").join("deeper");
        assert_eq!(nearest_existing_dir(&missing), tmp);
    }
}
