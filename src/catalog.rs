// src/catalog.rs
//
// In-memory trip list. The only place trips are created, replaced or removed;
// it enforces the id rules and tracks whether anything needs saving.

use thiserror::Error;

use crate::trip::{resolve_image_path, Trip};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Trip ID is required")]
    MissingId,

    #[error("Trip title is required")]
    MissingTitle,

    #[error("Trip ID '{0}' already exists. Please use a unique ID.")]
    DuplicateId(String),

    #[error("No trip at position {0}")]
    NoSuchIndex(usize),

    #[error("No trip with ID '{0}'")]
    NoSuchId(String),
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    trips: Vec<Trip>,
    dirty: bool,
}

impl Catalog {
    /// Wrap a freshly loaded list. Loading is not a change.
    pub fn new(trips: Vec<Trip>) -> Self {
        Self { trips, dirty: false }
    }

    pub fn trips(&self) -> &[Trip] { &self.trips }
    pub fn len(&self) -> usize { self.trips.len() }
    pub fn is_empty(&self) -> bool { self.trips.is_empty() }
    pub fn get(&self, index: usize) -> Option<&Trip> { self.trips.get(index) }

    pub fn is_dirty(&self) -> bool { self.dirty }
    pub fn mark_saved(&mut self) { self.dirty = false; }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.trips.iter().position(|t| t.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Indices of trips whose title matches `query`, in catalog order.
    pub fn search(&self, query: &str) -> Vec<usize> {
        self.trips
            .iter()
            .enumerate()
            .filter(|(_, t)| t.matches_search(query))
            .map(|(i, _)| i)
            .collect()
    }

    /// Append a new trip. Returns its index.
    pub fn add(&mut self, mut trip: Trip) -> Result<usize, CatalogError> {
        normalize(&mut trip)?;
        if self.contains_id(&trip.id) {
            return Err(CatalogError::DuplicateId(trip.id));
        }
        trip.image = resolve_image_path(&trip.image, &trip.id);

        logf!("Catalog: Added {} ({})", trip.id, trip.title);
        self.trips.push(trip);
        self.dirty = true;
        Ok(self.trips.len() - 1)
    }

    /// Replace the trip at `index`. The id may change, but not to one another
    /// trip already uses.
    pub fn update(&mut self, index: usize, mut trip: Trip) -> Result<(), CatalogError> {
        if index >= self.trips.len() {
            return Err(CatalogError::NoSuchIndex(index));
        }
        normalize(&mut trip)?;
        if let Some(other) = self.position(&trip.id) {
            if other != index {
                return Err(CatalogError::DuplicateId(trip.id));
            }
        }
        trip.image = resolve_image_path(&trip.image, &trip.id);

        logf!("Catalog: Updated {} at {}", trip.id, index);
        self.trips[index] = trip;
        self.dirty = true;
        Ok(())
    }

    /// Remove and return the trip at `index`. Callers confirm first.
    pub fn remove(&mut self, index: usize) -> Result<Trip, CatalogError> {
        if index >= self.trips.len() {
            return Err(CatalogError::NoSuchIndex(index));
        }
        let trip = self.trips.remove(index);
        logf!("Catalog: Deleted {} ({})", trip.id, trip.title);
        self.dirty = true;
        Ok(trip)
    }

    pub fn remove_id(&mut self, id: &str) -> Result<Trip, CatalogError> {
        let ix = self.position(id).ok_or_else(|| CatalogError::NoSuchId(s!(id)))?;
        self.remove(ix)
    }
}

fn normalize(trip: &mut Trip) -> Result<(), CatalogError> {
    trip.id = trip.id.trim().to_string();
    trip.title = trip.title.trim().to_string();
    if trip.id.is_empty() {
        return Err(CatalogError::MissingId);
    }
    if trip.title.is_empty() {
        return Err(CatalogError::MissingTitle);
    }
    Ok(())
}
