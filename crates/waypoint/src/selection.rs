//! The user's ordered selection list
//!
//! Most-recently-added first, no id twice. Owned exclusively by
//! [`crate::controller::SelectionController`]; everything else sees clones.

use tracing::warn;
use waypoint_api::Place;

/// Ordered sequence of selected places, most recently added first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionList {
    places: Vec<Place>,
}

impl SelectionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from already-persisted places, keeping order and
    /// dropping any duplicate id after its first occurrence.
    pub fn from_places(places: Vec<Place>) -> Self {
        let mut list = Self::new();
        for place in places {
            if list.contains(&place.id) {
                warn!(id = %place.id, "dropping duplicate id while hydrating selection list");
                continue;
            }
            list.places.push(place);
        }
        list
    }

    pub fn contains(&self, id: &str) -> bool {
        self.places.iter().any(|p| p.id == id)
    }

    /// Prepend a place. Returns false (and leaves the list untouched) if the
    /// id is already present.
    pub fn prepend(&mut self, place: Place) -> bool {
        if self.contains(&place.id) {
            return false;
        }
        self.places.insert(0, place);
        true
    }

    /// Drop the entry with `id`. Returns false if it was not present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.places.len();
        self.places.retain(|p| p.id != id);
        self.places.len() != before
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn ids(&self) -> Vec<String> {
        self.places.iter().map(|p| p.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
