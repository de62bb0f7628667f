// src/form.rs
//
// Editable text mirror of a Trip. The editor page binds widgets straight to
// these fields; list fields are edited as one entry per line and split on
// submit.

use serde_json::{Map, Value};

use crate::{
    catalog::{Catalog, CatalogError},
    config::consts::IMAGE_PREFIX,
    dates,
    trip::{join_lines, next_day_label, split_lines, ItineraryDay, Trip},
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DayForm {
    pub day: String,
    pub title: String,
    /// One activity per line
    pub activities: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TripForm {
    /// Catalog index being edited; None for a new trip
    pub editing: Option<usize>,

    pub id: String,
    pub title: String,
    pub location: String,
    pub badge: String,
    pub price: String,
    pub duration: String,
    pub difficulty: String,
    pub group_size: String,
    pub image: String,
    pub about: String,

    pub dates: Vec<String>,
    pub date_start: String,
    pub date_end: String,

    pub highlights: String,
    pub inclusions: String,
    pub exclusions: String,
    pub itinerary: Vec<DayForm>,

    extra: Map<String, Value>,
}

impl Default for TripForm {
    fn default() -> Self {
        Self::blank()
    }
}

impl TripForm {
    pub fn blank() -> Self {
        Self {
            editing: None,
            id: s!(),
            title: s!(),
            location: s!(),
            badge: s!(),
            price: s!(),
            duration: s!(),
            difficulty: s!(),
            group_size: s!(),
            image: s!(IMAGE_PREFIX),
            about: s!(),
            dates: Vec::new(),
            date_start: s!(),
            date_end: s!(),
            highlights: s!(),
            inclusions: s!(),
            exclusions: s!(),
            itinerary: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn from_trip(index: usize, trip: &Trip) -> Self {
        Self {
            editing: Some(index),
            id: trip.id.clone(),
            title: trip.title.clone(),
            location: trip.location.clone(),
            badge: trip.badge.clone(),
            price: trip.price.clone(),
            duration: trip.duration.clone(),
            difficulty: trip.difficulty.clone(),
            group_size: trip.group_size.clone(),
            image: trip.image.clone(),
            about: trip.about.clone(),
            dates: trip.available_dates.clone(),
            date_start: s!(),
            date_end: s!(),
            highlights: join_lines(&trip.highlights),
            inclusions: join_lines(&trip.inclusions),
            exclusions: join_lines(&trip.exclusions),
            itinerary: trip
                .itinerary
                .iter()
                .map(|d| DayForm {
                    day: d.day.clone(),
                    title: d.title.clone(),
                    activities: join_lines(&d.activities),
                })
                .collect(),
            extra: trip.extra.clone(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.editing.is_none()
    }

    pub fn to_trip(&self) -> Trip {
        Trip {
            id: self.id.trim().to_string(),
            title: self.title.trim().to_string(),
            location: self.location.trim().to_string(),
            badge: self.badge.trim().to_string(),
            price: self.price.trim().to_string(),
            duration: self.duration.trim().to_string(),
            difficulty: self.difficulty.trim().to_string(),
            group_size: self.group_size.trim().to_string(),
            image: self.image.trim().to_string(),
            about: self.about.trim().to_string(),
            available_dates: self.dates.clone(),
            highlights: split_lines(&self.highlights),
            itinerary: self.itinerary_days(),
            inclusions: split_lines(&self.inclusions),
            exclusions: split_lines(&self.exclusions),
            extra: self.extra.clone(),
        }
    }

    fn itinerary_days(&self) -> Vec<ItineraryDay> {
        self.itinerary
            .iter()
            .map(|d| ItineraryDay {
                day: d.day.trim().to_string(),
                title: d.title.trim().to_string(),
                activities: split_lines(&d.activities),
            })
            .collect()
    }

    /// Add or replace the trip in `catalog`. Returns the trip's index.
    pub fn submit(&self, catalog: &mut Catalog) -> Result<usize, CatalogError> {
        let trip = self.to_trip();
        match self.editing {
            Some(ix) => catalog.update(ix, trip).map(|_| ix),
            None => catalog.add(trip),
        }
    }

    /* ---------- dates ---------- */

    /// Turn the two date boxes into a range label and append it.
    pub fn add_date_range(&mut self) -> Result<String, String> {
        let label = dates::range_from_text(&self.date_start, &self.date_end)?;
        self.dates.push(label.clone());
        self.date_start.clear();
        self.date_end.clear();
        Ok(label)
    }

    pub fn remove_date(&mut self, index: usize) {
        if index < self.dates.len() {
            self.dates.remove(index);
        }
    }

    /* ---------- itinerary ---------- */

    pub fn add_day(&mut self) {
        let label = next_day_label(&self.itinerary_days());
        let day = ItineraryDay::placeholder(&[]);
        self.itinerary.push(DayForm {
            day: label,
            title: day.title,
            activities: join_lines(&day.activities),
        });
    }

    pub fn remove_day(&mut self, index: usize) {
        if index < self.itinerary.len() {
            self.itinerary.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_defaults_image_prefix() {
        let f = TripForm::blank();
        assert!(f.is_new());
        assert_eq!(f.image, IMAGE_PREFIX);
    }

    #[test]
    fn list_fields_split_and_trim() {
        let mut f = TripForm::blank();
        f.id = s!(" coorg ");
        f.title = s!("Coorg Escape");
        f.highlights = s!("  Coffee estates \n\n Abbey Falls\n   \n");
        let t = f.to_trip();
        assert_eq!(t.id, "coorg");
        assert_eq!(t.highlights, vec!["Coffee estates", "Abbey Falls"]);
    }

    #[test]
    fn day_labels_continue_numbering() {
        let mut f = TripForm::blank();
        f.add_day();
        assert_eq!(f.itinerary[0].day, "Day 0");
        f.itinerary[0].day = s!("Day 2");
        f.add_day();
        assert_eq!(f.itinerary[1].day, "Day 3");
        f.remove_day(0);
        assert_eq!(f.itinerary.len(), 1);
    }

    #[test]
    fn date_boxes_append_range() {
        let mut f = TripForm::blank();
        f.date_start = s!("2025-01-15");
        f.date_end = s!("2025-01-17");
        assert_eq!(f.add_date_range().as_deref(), Ok("Jan 15-17"));
        assert_eq!(f.dates, vec!["Jan 15-17"]);
        assert!(f.date_start.is_empty());

        f.date_start = s!("15/01/2025");
        assert!(f.add_date_range().is_err());
        assert_eq!(f.dates.len(), 1);
    }

    #[test]
    fn edit_round_trips_unknown_keys() {
        let mut trip = Trip::new("ooty", "Ooty");
        trip.extra.insert(s!("rating"), Value::from(4.5));
        let f = TripForm::from_trip(3, &trip);
        assert_eq!(f.editing, Some(3));
        assert_eq!(f.to_trip().extra.get("rating"), Some(&Value::from(4.5)));
    }

    #[test]
    fn submit_adds_then_updates() {
        let mut catalog = Catalog::default();
        let mut f = TripForm::blank();
        f.id = s!("spiti");
        f.title = s!("Spiti Valley");
        let ix = f.submit(&mut catalog).unwrap();
        assert_eq!(catalog.get(ix).unwrap().image, "images/trips/spiti.jpg");

        let mut edit = TripForm::from_trip(ix, catalog.get(ix).unwrap());
        edit.price = s!("18999");
        edit.submit(&mut catalog).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().price, "18999");
    }
}
