// tests/photos_dates.rs
use std::fs;

use chrono::NaiveDate;
use trip_manager::dates::{format_date_range, range_from_text};
use trip_manager::photos::{import_photo, is_photo, list_photos};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn date_range_formats() {
    assert_eq!(format_date_range(ymd(2025, 1, 15), Some(ymd(2025, 1, 17))), "Jan 15-17");
    assert_eq!(format_date_range(ymd(2025, 1, 30), Some(ymd(2025, 2, 2))), "Jan 30 - Feb 02");
    assert_eq!(format_date_range(ymd(2025, 1, 5), None), "Jan 05");
    assert_eq!(format_date_range(ymd(2025, 3, 9), Some(ymd(2025, 3, 9))), "Mar 09");
}

#[test]
fn reversed_range_is_swapped() {
    assert_eq!(format_date_range(ymd(2025, 1, 17), Some(ymd(2025, 1, 15))), "Jan 15-17");
}

#[test]
fn text_boxes() {
    assert_eq!(range_from_text("2025-12-30", "2026-01-02").unwrap(), "Dec 30 - Jan 02");
    assert_eq!(range_from_text(" 2025-06-01 ", "").unwrap(), "Jun 01");
    assert!(range_from_text("", "").is_err());
    assert!(range_from_text("2025-06-01", "June 3").is_err());
}

#[test]
fn photo_extensions() {
    for ok in ["a.jpg", "b.JPEG", "c.png", "d.WebP"] {
        assert!(is_photo(ok.as_ref()), "{ok}");
    }
    for no in ["a.gif", "notes.txt", "jpg"] {
        assert!(!is_photo(no.as_ref()), "{no}");
    }
}

#[test]
fn lists_only_photos_sorted() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("images/trips");
    assert!(list_photos(&dir).unwrap().is_empty());

    fs::create_dir_all(dir.join("sub.jpg")).unwrap();
    for name in ["ooty.png", "Readme.md", "coorg.JPG", "ba.webp"] {
        fs::write(dir.join(name), b"x").unwrap();
    }
    assert_eq!(list_photos(&dir).unwrap(), ["ba.webp", "coorg.JPG", "ooty.png"]);
}

#[test]
fn import_copies_into_trips_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("Downloads/hampi.jpg");
    fs::create_dir_all(src.parent().unwrap()).unwrap();
    fs::write(&src, b"jpeg bytes").unwrap();

    let dir = tmp.path().join("site/images/trips");
    let dest = import_photo(&src, &dir).unwrap();
    assert_eq!(dest, dir.join("hampi.jpg"));
    assert_eq!(fs::read(&dest).unwrap(), b"jpeg bytes");

    let txt = tmp.path().join("notes.txt");
    fs::write(&txt, b"x").unwrap();
    assert!(import_photo(&txt, &dir).is_err());
    assert!(import_photo(&tmp.path().join("missing.jpg"), &dir).is_err());
}
