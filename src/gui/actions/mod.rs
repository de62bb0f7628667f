// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{save,preview,...}.

mod delete;  // src/gui/actions/delete.rs
mod folder;  // src/gui/actions/folder.rs
mod preview; // src/gui/actions/preview.rs
mod save;    // src/gui/actions/save.rs

pub use delete::delete;
pub use folder::open_folder;
pub use preview::preview;
pub use save::{save, save_featured};
