// src/trip.rs
//
// The catalog record. Field names follow the site's JS keys (camelCase), so a
// trip serializes straight to the shape the website reads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::config::consts::IMAGE_PREFIX;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub badge: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub group_size: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub about: String,

    #[serde(default, deserialize_with = "lenient_strings")]
    pub available_dates: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub inclusions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub exclusions: Vec<String>,

    /// Keys the editor doesn't know about, kept in file order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    #[serde(default, deserialize_with = "lenient_string")]
    pub day: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub activities: Vec<String>,
}

impl Trip {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), ..Self::default() }
    }

    /// Case-insensitive title filter; empty query matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.trim();
        q.is_empty() || self.title.to_lowercase().contains(&q.to_lowercase())
    }

    /// One-line summary used by list views.
    pub fn summary(&self) -> String {
        format!(
            "{} | ₹{} | {}",
            or_na(&self.location),
            if self.price.is_empty() { "0" } else { &self.price },
            or_na(&self.badge),
        )
    }
}

fn or_na(s: &str) -> &str {
    if s.is_empty() { "N/A" } else { s }
}

/// `images/trips/<id>.jpg` unless the user typed something more specific.
pub fn resolve_image_path(typed: &str, id: &str) -> String {
    let typed = typed.trim();
    if typed.is_empty() || typed == IMAGE_PREFIX {
        format!("{IMAGE_PREFIX}{id}.jpg")
    } else {
        s!(typed)
    }
}

/// Multi-line text box → list. Blank lines dropped, entries trimmed.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

pub fn join_lines(items: &[String]) -> String {
    items.join("\n")
}

/// Label for a freshly added itinerary day: one past the highest "Day N",
/// or "Day 0" when no label parses.
pub fn next_day_label(days: &[ItineraryDay]) -> String {
    let next = days
        .iter()
        .filter_map(|d| d.day.trim().strip_prefix("Day").and_then(|n| n.trim().parse::<i64>().ok()))
        .max()
        .map(|max| max + 1)
        .unwrap_or(0);
    format!("Day {next}")
}

impl ItineraryDay {
    pub fn placeholder(days: &[ItineraryDay]) -> Self {
        Self {
            day: next_day_label(days),
            title: s!("New Day Title"),
            activities: vec![s!("Add activity here")],
        }
    }
}

/* ---------------- Lenient scalar reading ---------------- */

fn value_to_string(v: Value) -> String {
    match v {
        Value::String(s) => s,
        Value::Null => s!(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(value_to_string(Value::deserialize(d)?))
}

fn lenient_strings<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.into_iter().map(value_to_string).collect(),
        Value::Null => Vec::new(),
        single => vec![value_to_string(single)],
    })
}
