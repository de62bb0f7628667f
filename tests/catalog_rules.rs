// tests/catalog_rules.rs
use trip_manager::catalog::{Catalog, CatalogError};
use trip_manager::trip::{next_day_label, resolve_image_path, split_lines, ItineraryDay, Trip};

fn catalog() -> Catalog {
    Catalog::new(vec![Trip::new("netravati", "Netravati Peak"), Trip::new("ooty", "Ooty Hills")])
}

#[test]
fn loaded_catalog_is_clean() {
    assert!(!catalog().is_dirty());
}

#[test]
fn add_rejects_duplicate_id() {
    let mut c = catalog();
    let err = c.add(Trip::new("ooty", "Another Ooty")).unwrap_err();
    assert_eq!(err, CatalogError::DuplicateId("ooty".into()));
    assert_eq!(c.len(), 2);
    assert!(!c.is_dirty());
}

#[test]
fn add_trims_and_requires_id_and_title() {
    let mut c = catalog();
    assert_eq!(c.add(Trip::new("   ", "x")), Err(CatalogError::MissingId));
    assert_eq!(c.add(Trip::new("x", " ")), Err(CatalogError::MissingTitle));
    // Whitespace around an existing id is still a duplicate
    assert_eq!(c.add(Trip::new(" ooty ", "x")), Err(CatalogError::DuplicateId("ooty".into())));
}

#[test]
fn add_defaults_image_path() {
    let mut c = catalog();
    let ix = c.add(Trip::new("spiti", "Spiti")).unwrap();
    assert_eq!(c.get(ix).unwrap().image, "images/trips/spiti.jpg");

    let mut t = Trip::new("goa", "Goa");
    t.image = "images/trips/".into();
    let ix = c.add(t).unwrap();
    assert_eq!(c.get(ix).unwrap().image, "images/trips/goa.jpg");

    let mut t = Trip::new("hampi", "Hampi");
    t.image = "images/trips/hampi-ruins.png".into();
    let ix = c.add(t).unwrap();
    assert_eq!(c.get(ix).unwrap().image, "images/trips/hampi-ruins.png");
    assert!(c.is_dirty());
}

#[test]
fn update_cannot_take_another_trips_id() {
    let mut c = catalog();
    let err = c.update(0, Trip::new("ooty", "Renamed")).unwrap_err();
    assert_eq!(err, CatalogError::DuplicateId("ooty".into()));
    assert_eq!(c.get(0).unwrap().title, "Netravati Peak");
}

#[test]
fn update_may_keep_or_change_own_id() {
    let mut c = catalog();
    c.update(1, Trip::new("ooty", "Ooty Revisited")).unwrap();
    assert_eq!(c.get(1).unwrap().title, "Ooty Revisited");

    c.update(1, Trip::new("ooty-2", "Ooty Again")).unwrap();
    assert_eq!(c.position("ooty-2"), Some(1));
    assert!(!c.contains_id("ooty"));
}

#[test]
fn update_and_remove_check_bounds() {
    let mut c = catalog();
    assert_eq!(c.update(9, Trip::new("a", "b")), Err(CatalogError::NoSuchIndex(9)));
    assert_eq!(c.remove(9).unwrap_err(), CatalogError::NoSuchIndex(9));
    assert_eq!(c.remove_id("nope").unwrap_err(), CatalogError::NoSuchId("nope".into()));
}

#[test]
fn remove_marks_dirty_and_mark_saved_clears() {
    let mut c = catalog();
    let gone = c.remove_id("netravati").unwrap();
    assert_eq!(gone.title, "Netravati Peak");
    assert_eq!(c.len(), 1);
    assert!(c.is_dirty());
    c.mark_saved();
    assert!(!c.is_dirty());
}

#[test]
fn search_is_case_insensitive_on_title() {
    let c = catalog();
    assert_eq!(c.search("PEAK"), vec![0]);
    assert_eq!(c.search("  hills "), vec![1]);
    assert_eq!(c.search(""), vec![0, 1]);
    assert!(c.search("xyz").is_empty());
}

#[test]
fn day_labels() {
    let day = |d: &str| ItineraryDay { day: d.into(), ..Default::default() };
    assert_eq!(next_day_label(&[]), "Day 0");
    assert_eq!(next_day_label(&[day("Day 1"), day("Day 3"), day("Day 2")]), "Day 4");
    assert_eq!(next_day_label(&[day("Arrival"), day("Day 0")]), "Day 1");
    assert_eq!(next_day_label(&[day("Arrival")]), "Day 0");
}

#[test]
fn multi_line_fields() {
    assert_eq!(split_lines("a\n\n  b  \r\n\t\n"), vec!["a", "b"]);
    assert_eq!(resolve_image_path("  ", "x"), "images/trips/x.jpg");
}

#[test]
fn summary_fills_blanks() {
    let mut t = Trip::new("x", "X");
    assert_eq!(t.summary(), "N/A | ₹0 | N/A");
    t.location = "Coorg".into();
    t.price = "4,499".into();
    t.badge = "New".into();
    assert_eq!(t.summary(), "Coorg | ₹4,499 | New");
}
