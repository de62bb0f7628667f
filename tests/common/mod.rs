// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, TimeZone};
use tempfile::TempDir;

use trip_manager::config::options::ProjectPaths;

/// The shape the site shipped with before the manager rewrote it: array
/// form, single quotes, trailing commas, a comment, an unknown key.
pub const ARRAY_FORM: &str = r#"// trips
const tripsData = [
    {
        id: 'netravati',
        title: 'Netravati Peak Trek',
        location: 'Kudremukh, Karnataka',
        badge: 'Popular',
        price: 3499,
        duration: '2 Days',
        difficulty: 'Moderate',
        groupSize: '15-20',
        image: 'images/trips/netravati.jpg',
        about: 'Grasslands and "shola" forests.',
        availableDates: ['Jan 15-17', 'Feb 02'],
        highlights: ['Sunrise summit', 'Misty trails',],
        itinerary: [
            { day: 'Day 1', title: 'Arrive', activities: ['Check in', 'Briefing'] },
        ],
        inclusions: ['Meals'],
        exclusions: ['Travel insurance'],
        rating: 4.8, // not edited by the manager
    },
    {
        id: 'kerala',
        title: 'Kerala Backwaters',
        price: '5,999',
    },
];

function getTripData(tripId) { return tripsData.find(t => t.id === tripId); }
"#;

pub fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
}

/// Temp site folder with js/ and the four HTML pages.
pub fn site() -> (TempDir, ProjectPaths) {
    let tmp = tempfile::tempdir().unwrap();
    let paths = ProjectPaths::new(tmp.path());
    fs::create_dir_all(tmp.path().join("js")).unwrap();
    for f in paths.html_files() {
        write_html(&f, "<script src=\"js/trips-data.js\"></script>");
    }
    (tmp, paths)
}

pub fn site_with_trips(js: &str) -> (TempDir, ProjectPaths) {
    let (tmp, paths) = site();
    fs::write(paths.trips_file(), js).unwrap();
    (tmp, paths)
}

pub fn write_html(path: &Path, body: &str) {
    fs::write(path, format!("<html><body>{body}</body></html>")).unwrap();
}
