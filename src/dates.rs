// src/dates.rs
//
// `availableDates` entries are free text on the site, but the manager writes
// them in one shape: "Jan 15-17", "Jan 30 - Feb 02", or "Jan 15".

use chrono::{Datelike, NaiveDate};

pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let Some(end) = end else {
        return start.format("%b %d").to_string();
    };
    let (a, b) = if end < start { (end, start) } else { (start, end) };

    if a == b {
        a.format("%b %d").to_string()
    } else if a.month() == b.month() && a.year() == b.year() {
        format!("{} {}-{}", a.format("%b"), a.day(), b.day())
    } else {
        format!("{} - {}", a.format("%b %d"), b.format("%b %d"))
    }
}

/// Parse `YYYY-MM-DD` as typed into the editor.
pub fn parse_ymd(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Build a range label from two text boxes; the end box may be empty.
pub fn range_from_text(start: &str, end: &str) -> Result<String, String> {
    let a = parse_ymd(start).ok_or_else(|| format!("Start date '{}' is not YYYY-MM-DD", start.trim()))?;
    let b = if end.trim().is_empty() {
        None
    } else {
        Some(parse_ymd(end).ok_or_else(|| format!("End date '{}' is not YYYY-MM-DD", end.trim()))?)
    };
    Ok(format_date_range(a, b))
}
