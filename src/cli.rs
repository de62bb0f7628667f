// src/cli.rs
//
// Scriptable front end over the same library calls the GUI makes. Every
// mutating command saves straight away; there is no session to hold changes.

use std::{
    env,
    error::Error,
    fs,
    io::Write,
    path::PathBuf,
};

use chrono::Local;
use serde_json::Value;

use crate::{
    cache_bust,
    catalog::Catalog,
    config::options::{AppOptions, ProjectPaths},
    desktop,
    featured::Featured,
    jsobj::js_to_json,
    photos,
    preview,
    progress::LineProgress,
    publish,
    store,
    trip::Trip,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeaturedCmd {
    List,
    Add(String),
    Remove(String),
    Up(String),
    Down(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotosCmd {
    List,
    Add(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    List { search: Option<String> },
    Show { id: String },
    Add { file: PathBuf },
    Delete { id: String, yes: bool },
    Featured(FeaturedCmd),
    Save,
    Bust,
    Photos(PhotosCmd),
    Preview { port: Option<u16>, open: bool },
    ExportJson { out: Option<PathBuf> },
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub command: Command,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;
    if args.command == Command::Help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }

    let options = match &args.root {
        Some(root) => AppOptions::for_root(root.clone()),
        None => AppOptions::for_root(ProjectPaths::discover(&env::current_dir()?).root()),
    };
    crate::log::init(options.project.root());
    logf!("CLI: {:?} (root={})", args.command, options.project.root().display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&options, args.command, &mut out)
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut root = None;
    let mut rest: Vec<String> = Vec::new();

    let mut it = args.into_iter();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--root" => root = Some(PathBuf::from(it.next().ok_or("Missing value for --root")?)),
            "-h" | "--help" => return Ok(CliArgs { root, command: Command::Help }),
            _ => rest.push(a),
        }
    }

    let mut rest = rest.into_iter();
    let Some(cmd) = rest.next() else {
        return Ok(CliArgs { root, command: Command::Help });
    };

    let command = match cmd.as_str() {
        "list" => {
            let mut search = None;
            while let Some(a) = rest.next() {
                match a.as_str() {
                    "--search" | "-s" => search = Some(rest.next().ok_or("Missing value for --search")?),
                    _ => return Err(format!("Unknown arg: {}", a).into()),
                }
            }
            Command::List { search }
        }
        "show" => Command::Show { id: rest.next().ok_or("Missing trip id")? },
        "add" => Command::Add { file: PathBuf::from(rest.next().ok_or("Missing trip file")?) },
        "delete" => {
            let mut id = None;
            let mut yes = false;
            for a in rest.by_ref() {
                match a.as_str() {
                    "--yes" | "-y" => yes = true,
                    _ if id.is_none() => id = Some(a),
                    _ => return Err(format!("Unknown arg: {}", a).into()),
                }
            }
            Command::Delete { id: id.ok_or("Missing trip id")?, yes }
        }
        "featured" => {
            let sub = rest.next();
            let mut id = || rest.next().ok_or("Missing trip id");
            Command::Featured(match sub.as_deref() {
                None | Some("list") => FeaturedCmd::List,
                Some("add") => FeaturedCmd::Add(id()?),
                Some("remove") => FeaturedCmd::Remove(id()?),
                Some("up") => FeaturedCmd::Up(id()?),
                Some("down") => FeaturedCmd::Down(id()?),
                Some(other) => return Err(format!("Unknown featured command: {}", other).into()),
            })
        }
        "save" => Command::Save,
        "bust" => Command::Bust,
        "photos" => Command::Photos(match rest.next().as_deref() {
            None | Some("list") => PhotosCmd::List,
            Some("add") => PhotosCmd::Add(PathBuf::from(rest.next().ok_or("Missing photo file")?)),
            Some(other) => return Err(format!("Unknown photos command: {}", other).into()),
        }),
        "preview" => {
            let mut port = None;
            let mut open = true;
            while let Some(a) = rest.next() {
                match a.as_str() {
                    "--port" | "-p" => port = Some(rest.next().ok_or("Missing value for --port")?.parse()?),
                    "--no-open" => open = false,
                    _ => return Err(format!("Unknown arg: {}", a).into()),
                }
            }
            Command::Preview { port, open }
        }
        "export-json" => {
            let mut out = None;
            while let Some(a) = rest.next() {
                match a.as_str() {
                    "-o" | "--out" => out = Some(PathBuf::from(rest.next().ok_or("Missing output path")?)),
                    _ => return Err(format!("Unknown arg: {}", a).into()),
                }
            }
            Command::ExportJson { out }
        }
        other => return Err(format!("Unknown command: {}", other).into()),
    };

    Ok(CliArgs { root, command })
}

/// Run one command against the project in `options`, printing to `out`.
pub fn execute(options: &AppOptions, command: Command, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let paths = &options.project;

    match command {
        Command::Help => {
            writeln!(out, "{}", include_str!("cli_help.txt"))?;
        }

        Command::List { search } => {
            let catalog = load_catalog(paths)?;
            let query = search.unwrap_or_default();
            for ix in catalog.search(&query) {
                if let Some(t) = catalog.get(ix) {
                    writeln!(out, "{}\t{}\t{}", t.id, t.title, t.summary())?;
                }
            }
        }

        Command::Show { id } => {
            let catalog = load_catalog(paths)?;
            let trip = catalog.find(&id).ok_or_else(|| err!("No trip with ID '{id}'"))?;
            writeln!(out, "{}", serde_json::to_string_pretty(trip)?)?;
        }

        Command::Add { file } => {
            let mut catalog = load_catalog(paths)?;
            let text = fs::read_to_string(&file)
                .map_err(|e| err!("Cannot read {}: {e}", file.display()))?;
            let trips = parse_trip_input(&text)?;
            for trip in trips {
                let id = trip.id.clone();
                catalog.add(trip)?;
                writeln!(out, "Added {id}")?;
            }
            save(paths, &mut catalog, out)?;
        }

        Command::Delete { id, yes } => {
            if !yes {
                return Err(err!("Refusing to delete '{id}' without --yes"));
            }
            let mut catalog = load_catalog(paths)?;
            let trip = catalog.remove_id(&id)?;
            writeln!(out, "Deleted {} ({})", trip.id, trip.title)?;
            save(paths, &mut catalog, out)?;
        }

        Command::Featured(cmd) => featured(paths, cmd, out)?,

        Command::Save => {
            let mut catalog = load_catalog(paths)?;
            save(paths, &mut catalog, out)?;
        }

        Command::Bust => {
            let version = Local::now().timestamp();
            let mut progress = LineProgress::default();
            let updated = cache_bust::update_cache_version(&paths.html_files(), version, Some(&mut progress));
            for line in &progress.lines {
                writeln!(out, "{line}")?;
            }
            writeln!(out, "Updated {} HTML files (v={version})", updated.len())?;
        }

        Command::Photos(PhotosCmd::List) => {
            for name in photos::list_photos(&paths.images_dir())? {
                writeln!(out, "{name}")?;
            }
        }

        Command::Photos(PhotosCmd::Add(file)) => {
            let dest = photos::import_photo(&file, &paths.images_dir())?;
            writeln!(out, "Imported {}", dest.display())?;
        }

        Command::Preview { port, open } => {
            let mut opts = options.preview.clone();
            if let Some(p) = port {
                opts.port = p;
            }
            let handle = preview::start(paths.root(), &opts, None)?;
            let url = handle.url();
            writeln!(out, "Local server running at {url} (Ctrl+C to stop)")?;
            out.flush()?;
            if open && opts.open_browser {
                if let Err(e) = desktop::open_in_system(&url) {
                    loge!("Preview: {e}");
                }
            }
            handle.join();
        }

        Command::ExportJson { out: dest } => {
            let catalog = load_catalog(paths)?;
            let json = serde_json::to_string_pretty(catalog.trips())?;
            match dest {
                Some(path) => {
                    fs::write(&path, json)?;
                    writeln!(out, "Wrote {} trips to {}", catalog.len(), path.display())?;
                }
                None => writeln!(out, "{json}")?,
            }
        }
    }
    Ok(())
}

fn load_catalog(paths: &ProjectPaths) -> Result<Catalog, Box<dyn Error>> {
    Ok(Catalog::new(store::load_trips(&paths.trips_file())?))
}

fn save(paths: &ProjectPaths, catalog: &mut Catalog, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let mut progress = LineProgress::default();
    let report = publish::save_catalog(paths, catalog, Local::now(), Some(&mut progress))?;
    for line in &progress.lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", report.message())?;
    Ok(())
}

fn featured(paths: &ProjectPaths, cmd: FeaturedCmd, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let catalog = load_catalog(paths)?;
    let mut featured = Featured::load(&paths.featured_file());

    match &cmd {
        FeaturedCmd::List => {}
        FeaturedCmd::Add(id) => featured.add(id, &catalog)?,
        FeaturedCmd::Remove(id) => featured.remove(id)?,
        FeaturedCmd::Up(id) => { featured.move_up(id)?; }
        FeaturedCmd::Down(id) => { featured.move_down(id)?; }
    }
    if featured.is_dirty() {
        featured.save(&paths.featured_file(), Local::now())?;
    }

    for (pos, (id, title)) in featured.entries(&catalog).iter().enumerate() {
        writeln!(out, "{}. {}\t{}", pos + 1, id, title)?;
    }
    Ok(())
}

/// A single trip object or an array of them, as JSON or a JS literal.
pub fn parse_trip_input(text: &str) -> Result<Vec<Trip>, Box<dyn Error>> {
    let json = js_to_json(text.trim().trim_end_matches(';'));
    match serde_json::from_str::<Value>(&json)? {
        Value::Array(items) => items
            .into_iter()
            .map(|v| serde_json::from_value::<Trip>(v).map_err(Into::into))
            .collect(),
        v @ Value::Object(_) => Ok(vec![serde_json::from_value::<Trip>(v)?]),
        _ => Err(err!("Expected a trip object or an array of trips")),
    }
}
