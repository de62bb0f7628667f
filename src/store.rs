// src/store.rs
//
// trips-data.js on disk <-> Vec<Trip> in memory.
//
// Reading: find `const tripsData =`, cut out the balanced literal after it,
// turn it into JSON (see jsobj) and hand it to serde. Both the array form
// (`[ { id: .. }, .. ]`) and the object form (`{ id: { .. }, .. }`) load.
//
// Writing: always the object form, keyed by id, with a fresh header and the
// getTripData() helper the site calls. The previous file is copied to
// `<file>.backup` first.

use std::{
    collections::HashSet,
    error::Error,
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use chrono::{DateTime, Local};
use regex::Regex;
use serde_json::{Map, Value};

use crate::config::consts::BACKUP_SUFFIX;
use crate::jsobj::{js_to_json, literal_extent};
use crate::trip::{ItineraryDay, Trip};

fn decl_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:const|let|var)\s+tripsData\s*=\s*").unwrap())
}

/* ---------------- Loading ---------------- */

pub fn load_trips(path: &Path) -> Result<Vec<Trip>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| err!("Trips data file not found: {} ({e})", path.display()))?;
    let trips = parse_trips(&text)?;
    logf!("Store: Loaded {} trips from {}", trips.len(), path.display());
    Ok(trips)
}

/// Parse the text of a trips-data.js file.
pub fn parse_trips(text: &str) -> Result<Vec<Trip>, Box<dyn Error>> {
    let m = decl_re()
        .find(text)
        .ok_or_else(|| err!("Could not parse trips data file: no `tripsData` declaration"))?;

    let rest = &text[m.end()..];
    let len = literal_extent(rest)
        .ok_or_else(|| err!("Could not parse trips data file: unbalanced literal"))?;
    let json = js_to_json(&rest[..len]);

    let trips: Result<Vec<Trip>, Box<dyn Error>> = match serde_json::from_str::<Value>(&json)? {
        Value::Array(items) => items
            .into_iter()
            .map(|v| serde_json::from_value::<Trip>(v).map_err(Into::into))
            .collect(),
        Value::Object(map) => map
            .into_iter()
            .map(|(id, v)| -> Result<Trip, Box<dyn Error>> {
                let mut trip = serde_json::from_value::<Trip>(v)?;
                // The key wins over any id field inside the body
                trip.id = id;
                Ok(trip)
            })
            .collect(),
        _ => Err(err!("Could not parse trips data file: tripsData is not an array or object")),
    };
    let trips = trips?;

    check_ids(&trips).map_err(|e| err!("Could not parse trips data file: {e}"))?;
    Ok(trips)
}

/// Every trip needs its own non-empty id; saving keys the file by it.
pub fn check_ids(trips: &[Trip]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for (n, trip) in trips.iter().enumerate() {
        if trip.id.trim().is_empty() {
            return Err(format!("trip #{} ('{}') has no id", n + 1, trip.title));
        }
        if !seen.insert(trip.id.as_str()) {
            return Err(format!("trip id '{}' is used more than once", trip.id));
        }
    }
    Ok(())
}

/* ---------------- Saving ---------------- */

/// Write `trips` to `path`, keeping one backup of the previous contents.
/// Returns the backup path if one was made.
pub fn save_trips(
    path: &Path,
    trips: &[Trip],
    now: DateTime<Local>,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    check_ids(trips).map_err(|e| err!("Refusing to save trips: {e}"))?;
    let contents = render_trips(trips, now);

    let backup = if path.exists() {
        let b = backup_path(path);
        fs::copy(path, &b)?;
        logd!("Store: Backup → {}", b.display());
        Some(b)
    } else {
        None
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    logf!("Store: Saved {} trips → {}", trips.len(), path.display());
    Ok(backup)
}

pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Full file text in object form.
pub fn render_trips(trips: &[Trip], now: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str("// ============================================\n");
    out.push_str("// TEAM WEEKEND TREKKERS - TRIP DATABASE\n");
    out.push_str("// ============================================\n");
    out.push_str("// \n");
    out.push_str(&format!("// Last updated: {}\n", now.format("%Y-%m-%d %H:%M")));
    out.push_str("// \n");
    out.push_str("// 📸 PHOTOS: Put images in images/trips/tripid.jpg\n");
    out.push_str("// 💰 PRICES: Change the 'price' field\n");
    out.push_str("// 📅 DATES: Update 'availableDates' array\n");
    out.push_str("// ➕ NEW TRIP: Copy any trip block, change all fields\n");
    out.push_str("// ============================================\n\n");

    out.push_str("const tripsData = {\n");
    let entries: Vec<String> = trips.iter().map(render_trip).collect();
    out.push_str(&entries.join(",\n"));
    out.push_str("\n};\n\n");

    out.push_str("function getTripData(tripId) {\n");
    out.push_str("    return tripsData[tripId] || tripsData['netravati'];\n");
    out.push_str("}\n");
    out
}

fn render_trip(trip: &Trip) -> String {
    let mut e = format!("    {}: {{\n", js_key(&trip.id));

    let scalars = [
        ("title", &trip.title),
        ("location", &trip.location),
        ("badge", &trip.badge),
        ("price", &trip.price),
        ("duration", &trip.duration),
        ("difficulty", &trip.difficulty),
        ("groupSize", &trip.group_size),
        ("image", &trip.image),
        ("about", &trip.about),
    ];
    for (key, value) in scalars {
        e.push_str(&format!("        {key}: {},\n", js_string(value)));
    }

    e.push_str(&format!("        availableDates: {},\n", js_string_list(&trip.available_dates)));
    e.push_str(&format!("        highlights: {},\n", js_string_list(&trip.highlights)));
    e.push_str(&render_itinerary(&trip.itinerary));
    e.push_str(&format!("        inclusions: {},\n", js_string_list(&trip.inclusions)));
    e.push_str(&format!("        exclusions: {},\n", js_string_list(&trip.exclusions)));

    e.push_str(&render_extra(&trip.extra));
    e.push_str("    }");
    e
}

fn render_itinerary(days: &[ItineraryDay]) -> String {
    if days.is_empty() {
        return s!("        itinerary: [],\n");
    }
    let items: Vec<String> = days
        .iter()
        .map(|d| {
            format!(
                "            {{day: {}, title: {}, activities: {}}}",
                js_string(&d.day),
                js_string(&d.title),
                js_string_list(&d.activities)
            )
        })
        .collect();
    format!("        itinerary: [\n{}\n        ],\n", items.join(",\n"))
}

fn render_extra(extra: &Map<String, Value>) -> String {
    let mut out = String::new();
    for (key, value) in extra {
        let v = serde_json::to_string(value).unwrap_or_else(|_| s!("null"));
        out.push_str(&format!("        {}: {v},\n", js_key(key)));
    }
    out
}

/* ---------------- JS text helpers ---------------- */

/// Plain identifiers stay bare; anything else (hyphens, spaces, leading
/// digits) is written as a quoted key.
pub fn js_key(key: &str) -> String {
    let mut chars = key.chars();
    let bare = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if bare { s!(key) } else { js_string(key) }
}

/// Double-quoted JS string literal.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // JS treats these as line terminators inside string literals
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn js_string_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| js_string(s)).collect();
    format!("[{}]", quoted.join(", "))
}
