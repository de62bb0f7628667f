// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;

pub mod trip;
pub mod catalog;
pub mod form;

pub mod jsobj;
pub mod store;
pub mod featured;
pub mod cache_bust;
pub mod photos;
pub mod dates;

pub mod progress;
pub mod publish;
pub mod preview;
pub mod desktop;

pub mod cli;
pub mod gui;
