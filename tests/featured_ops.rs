// tests/featured_ops.rs
mod common;

use std::fs;

use trip_manager::catalog::Catalog;
use trip_manager::featured::{parse_featured, render_featured, Featured, FeaturedError};
use trip_manager::trip::Trip;

use common::{fixed_now, site};

fn catalog(ids: &[&str]) -> Catalog {
    Catalog::new(ids.iter().map(|id| Trip::new(*id, id.to_uppercase())).collect())
}

#[test]
fn missing_file_gives_defaults() {
    let (_tmp, paths) = site();
    let f = Featured::load(&paths.featured_file());
    assert_eq!(f.ids(), ["netravati", "kerala", "ooty", "spiti"]);
    assert!(!f.is_dirty());
}

#[test]
fn parses_existing_file() {
    let text = "// header\nconst featuredTripIds = [\n  'ooty',\n  \"spiti\", // note\n];\n";
    assert_eq!(parse_featured(text), Some(vec!["ooty".into(), "spiti".into()]));
    assert_eq!(parse_featured("const other = [];"), None);
}

#[test]
fn add_enforces_limit_duplicates_and_existence() {
    let c = catalog(&["a", "b", "c", "d", "e"]);
    let mut f = Featured::new(vec![]);

    for id in ["a", "b", "c", "d"] {
        f.add(id, &c).unwrap();
    }
    assert_eq!(f.add("a", &c), Err(FeaturedError::AlreadyFeatured("a".into())));
    assert_eq!(f.add("e", &c), Err(FeaturedError::LimitReached));

    f.remove("d").unwrap();
    assert_eq!(f.add("zzz", &c), Err(FeaturedError::UnknownTrip("zzz".into())));
    f.add("e", &c).unwrap();
    assert_eq!(f.ids(), ["a", "b", "c", "e"]);
    assert!(f.is_dirty());
}

#[test]
fn move_up_and_down_stop_at_the_ends() {
    let mut f = Featured::new(vec!["a".into(), "b".into(), "c".into()]);
    assert_eq!(f.move_up("c"), Ok(1));
    assert_eq!(f.ids(), ["a", "c", "b"]);
    assert_eq!(f.move_up("a"), Ok(0));
    assert_eq!(f.move_down("a"), Ok(1));
    assert_eq!(f.move_down("b"), Ok(2));
    assert_eq!(f.ids(), ["c", "a", "b"]);
    assert_eq!(f.move_down("x"), Err(FeaturedError::NotFeatured("x".into())));
    assert_eq!(f.remove("x"), Err(FeaturedError::NotFeatured("x".into())));
}

#[test]
fn entries_and_available() {
    let c = catalog(&["a", "b", "c"]);
    let f = Featured::new(vec!["b".into(), "gone".into()]);

    assert_eq!(
        f.entries(&c),
        vec![("b".to_string(), "B".to_string()), ("gone".to_string(), "Unknown (gone)".to_string())]
    );
    let avail: Vec<String> = f.available(&c).into_iter().map(|(id, _)| id).collect();
    assert_eq!(avail, ["a", "c"]);
}

#[test]
fn save_then_load() {
    let (_tmp, paths) = site();
    let c = catalog(&["ooty", "hampi"]);
    let mut f = Featured::new(vec![]);
    f.add("hampi", &c).unwrap();
    f.add("ooty", &c).unwrap();
    f.save(&paths.featured_file(), fixed_now()).unwrap();
    assert!(!f.is_dirty());

    let text = fs::read_to_string(paths.featured_file()).unwrap();
    assert!(text.contains("Last updated: 2025-01-02 03:04"));
    assert!(text.contains("function getFeaturedTrips()"));
    assert_eq!(Featured::load(&paths.featured_file()).ids(), ["hampi", "ooty"]);
}

#[test]
fn render_quotes_ids() {
    let text = render_featured(&["a".into()], fixed_now());
    assert!(text.contains("const featuredTripIds = [\n    \"a\",\n];"));
}

#[test]
fn ids_with_quotes_survive_save_and_load() {
    let (_tmp, paths) = site();
    let c = catalog(&["kid's-trek", "say-\"hi\""]);
    let mut f = Featured::new(vec![]);
    f.add("kid's-trek", &c).unwrap();
    f.add("say-\"hi\"", &c).unwrap();
    f.save(&paths.featured_file(), fixed_now()).unwrap();

    assert_eq!(Featured::load(&paths.featured_file()).ids(), ["kid's-trek", "say-\"hi\""]);
}
