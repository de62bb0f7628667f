// src/gui/components/mod.rs
pub mod dialogs;
pub mod sidebar;
