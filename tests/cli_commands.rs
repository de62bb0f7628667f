// tests/cli_commands.rs
mod common;

use std::fs;

use trip_manager::cli::{execute, Command, FeaturedCmd, PhotosCmd};
use trip_manager::config::options::{AppOptions, ProjectPaths};
use trip_manager::featured::Featured;
use trip_manager::store::load_trips;

use common::{site_with_trips, ARRAY_FORM};

fn run(paths: &ProjectPaths, cmd: Command) -> Result<String, String> {
    let opts = AppOptions::for_root(paths.root());
    let mut out: Vec<u8> = Vec::new();
    execute(&opts, cmd, &mut out).map_err(|e| e.to_string())?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn list_and_search() {
    let (_tmp, paths) = site_with_trips(ARRAY_FORM);
    let all = run(&paths, Command::List { search: None }).unwrap();
    assert_eq!(all.lines().count(), 2);
    assert!(all.starts_with("netravati\tNetravati Peak Trek\tKudremukh, Karnataka | ₹3499 | Popular"));

    let hits = run(&paths, Command::List { search: Some("BACKWATERS".into()) }).unwrap();
    assert_eq!(hits.lines().collect::<Vec<_>>(), ["kerala\tKerala Backwaters\tN/A | ₹5,999 | N/A"]);
}

#[test]
fn show_prints_json_with_unknown_keys() {
    let (_tmp, paths) = site_with_trips(ARRAY_FORM);
    let out = run(&paths, Command::Show { id: "netravati".into() }).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["groupSize"], "15-20");
    assert_eq!(v["rating"], 4.8);

    assert!(run(&paths, Command::Show { id: "nope".into() }).is_err());
}

#[test]
fn add_saves_and_rejects_duplicates() {
    let (tmp, paths) = site_with_trips(ARRAY_FORM);
    let file = tmp.path().join("new.json");
    fs::write(&file, r#"{"id": "hampi", "title": "Hampi", "highlights": ["Ruins"]}"#).unwrap();

    let out = run(&paths, Command::Add { file: file.clone() }).unwrap();
    assert!(out.contains("Added hampi"));
    assert!(paths.backup_file().exists());

    let trips = load_trips(&paths.trips_file()).unwrap();
    assert_eq!(trips.len(), 3);
    assert_eq!(trips[2].image, "images/trips/hampi.jpg");

    let err = run(&paths, Command::Add { file }).unwrap_err();
    assert!(err.contains("already exists"));
}

#[test]
fn delete_needs_yes() {
    let (_tmp, paths) = site_with_trips(ARRAY_FORM);
    let err = run(&paths, Command::Delete { id: "kerala".into(), yes: false }).unwrap_err();
    assert!(err.contains("--yes"));
    assert_eq!(load_trips(&paths.trips_file()).unwrap().len(), 2);

    run(&paths, Command::Delete { id: "kerala".into(), yes: true }).unwrap();
    let trips = load_trips(&paths.trips_file()).unwrap();
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].id, "netravati");
}

#[test]
fn featured_commands_persist() {
    let (_tmp, paths) = site_with_trips(ARRAY_FORM);
    // defaults reference trips this catalog doesn't have
    let out = run(&paths, Command::Featured(FeaturedCmd::List)).unwrap();
    assert!(out.contains("3. ooty\tUnknown (ooty)"));

    run(&paths, Command::Featured(FeaturedCmd::Remove("spiti".into()))).unwrap();
    run(&paths, Command::Featured(FeaturedCmd::Remove("ooty".into()))).unwrap();
    run(&paths, Command::Featured(FeaturedCmd::Up("kerala".into()))).unwrap();
    assert_eq!(Featured::load(&paths.featured_file()).ids(), ["kerala", "netravati"]);

    let err = run(&paths, Command::Featured(FeaturedCmd::Add("kerala".into()))).unwrap_err();
    assert!(err.contains("already featured"));
}

#[test]
fn export_json_round_trips() {
    let (tmp, paths) = site_with_trips(ARRAY_FORM);
    let dest = tmp.path().join("trips.json");
    let out = run(&paths, Command::ExportJson { out: Some(dest.clone()) }).unwrap();
    assert!(out.contains("Wrote 2 trips"));

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(dest).unwrap()).unwrap();
    assert_eq!(v[0]["id"], "netravati");
    assert_eq!(v[1]["price"], "5,999");
}

#[test]
fn bust_and_photos() {
    let (tmp, paths) = site_with_trips(ARRAY_FORM);
    let out = run(&paths, Command::Bust).unwrap();
    assert!(out.contains("Updated 4 HTML files"));

    let src = tmp.path().join("ooty.png");
    fs::write(&src, b"png").unwrap();
    run(&paths, Command::Photos(PhotosCmd::Add(src))).unwrap();
    assert_eq!(run(&paths, Command::Photos(PhotosCmd::List)).unwrap(), "ooty.png\n");
}
