// src/config/consts.rs

// Site layout (relative to the project root)
pub const TRIPS_DATA_FILE: &str = "js/trips-data.js";
pub const FEATURED_TRIPS_FILE: &str = "js/featured-trips.js";
pub const IMAGES_DIR: &str = "images/trips";
pub const IMAGE_PREFIX: &str = "images/trips/";
pub const BACKUP_SUFFIX: &str = ".backup";

// Pages that load trips-data.js and get a cache-busting version
pub const HTML_FILES: &[&str] = &[
    "index.html",
    "trips.html",
    "trip-detail.html",
    "checkout.html",
];

// Featured trips
pub const MAX_FEATURED: usize = 4;
pub const DEFAULT_FEATURED: &[&str] = &["netravati", "kerala", "ooty", "spiti"];

// Photos
pub const PHOTO_EXTS: &[&str] = &["jpg", "jpeg", "png", "webp"];

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Preview server
pub const PREVIEW_HOST: &str = "127.0.0.1";
pub const PREVIEW_PORT: u16 = 8080;
pub const PREVIEW_INDEX: &str = "index.html";
