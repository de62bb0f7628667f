// tests/publish_preview.rs
mod common;

use std::fs;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::path::Path;

use trip_manager::cache_bust::current_version;
use trip_manager::catalog::Catalog;
use trip_manager::config::options::PreviewOptions;
use trip_manager::preview::{self, content_type, resolve_target, Refused};
use trip_manager::progress::LineProgress;
use trip_manager::publish::save_catalog;
use trip_manager::store::load_trips;
use trip_manager::trip::Trip;

use common::{fixed_now, site_with_trips, ARRAY_FORM};

#[test]
fn save_pipeline_writes_backs_up_and_busts() {
    let (_tmp, paths) = site_with_trips(ARRAY_FORM);
    let mut catalog = Catalog::new(load_trips(&paths.trips_file()).unwrap());
    catalog.add(Trip::new("hampi", "Hampi Ruins")).unwrap();

    let mut progress = LineProgress::default();
    let report = save_catalog(&paths, &mut catalog, fixed_now(), Some(&mut progress)).unwrap();

    assert!(!catalog.is_dirty());
    assert_eq!(report.backup.as_deref(), Some(paths.backup_file().as_path()));
    assert_eq!(report.cache_updated.len(), 4);
    assert_eq!(report.version, fixed_now().timestamp());
    assert!(report.message().contains("Backup created"));
    assert!(progress.lines.iter().any(|l| l == "✅ Save trips"));
    assert!(progress.lines.iter().any(|l| l == "✅ Cache busting"));

    let html = fs::read_to_string(&paths.html_files()[0]).unwrap();
    assert_eq!(current_version(&html), Some(report.version));

    let reloaded = load_trips(&paths.trips_file()).unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded[2].image, "images/trips/hampi.jpg");
}

#[test]
fn save_failure_leaves_catalog_dirty() {
    let tmp = tempfile::tempdir().unwrap();
    // js/ is a file, so js/trips-data.js can't be created
    fs::write(tmp.path().join("js"), b"").unwrap();
    let paths = trip_manager::config::options::ProjectPaths::new(tmp.path());

    let mut catalog = Catalog::default();
    catalog.add(Trip::new("a", "A")).unwrap();
    let mut progress = LineProgress::default();
    assert!(save_catalog(&paths, &mut catalog, fixed_now(), Some(&mut progress)).is_err());
    assert!(catalog.is_dirty());
    assert!(progress.lines[0].starts_with("⚠️ Save trips"));
}

#[test]
fn request_targets_resolve_inside_root() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("js")).unwrap();

    assert_eq!(resolve_target(root, "/"), Ok(root.join("index.html")));
    assert_eq!(resolve_target(root, "/trips.html?id=ooty#top"), Ok(root.join("trips.html")));
    assert_eq!(resolve_target(root, "/js"), Ok(root.join("js").join("index.html")));
    assert_eq!(resolve_target(root, "/images/My%20Trip.jpg"), Ok(root.join("images").join("My Trip.jpg")));
    assert_eq!(resolve_target(root, "/../etc/passwd"), Err(Refused));
    assert_eq!(resolve_target(root, "/js/%2e%2e/%2e%2e/secret"), Err(Refused));
}

#[test]
fn content_types() {
    assert_eq!(content_type(Path::new("a.HTML")), "text/html; charset=utf-8");
    assert_eq!(content_type(Path::new("a.js")), "text/javascript; charset=utf-8");
    assert_eq!(content_type(Path::new("a.jpg")), "image/jpeg");
    assert_eq!(content_type(Path::new("a.bin")), "application/octet-stream");
}

fn get(addr: std::net::SocketAddr, target: &str) -> String {
    let mut s = TcpStream::connect(addr).unwrap();
    write!(s, "GET {target} HTTP/1.0\r\nHost: localhost\r\n\r\n").unwrap();
    let mut resp = String::new();
    s.read_to_string(&mut resp).unwrap();
    resp
}

#[test]
fn server_serves_files_and_refuses_traversal() {
    let (tmp, _paths) = site_with_trips(ARRAY_FORM);
    let opts = PreviewOptions { host: "127.0.0.1".into(), port: 0, open_browser: false };
    let handle = preview::start(tmp.path(), &opts, None).unwrap();
    let addr = handle.addr;
    assert!(handle.url().starts_with("http://127.0.0.1:"));

    let index = get(addr, "/");
    assert!(index.starts_with("HTTP/1.0 200 OK"), "{index}");
    assert!(index.contains("Content-Type: text/html"));
    assert!(index.contains("js/trips-data.js"));

    let js = get(addr, "/js/trips-data.js");
    assert!(js.contains("const tripsData"));

    assert!(get(addr, "/nope.html").starts_with("HTTP/1.0 404"));
    assert!(get(addr, "/../secret").starts_with("HTTP/1.0 403"));
}

#[test]
fn busy_port_is_reported() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let opts = PreviewOptions { host: "127.0.0.1".into(), port, open_browser: false };
    let err = preview::start(Path::new("."), &opts, None).err().unwrap();
    assert!(err.to_string().contains("Failed to start server"));
}
