//! Static catalog of known places
//!
//! The local persistence strategy stores only ids; this table resolves them
//! back into full [`Place`] values on load.

use std::collections::HashMap;

use tracing::warn;
use waypoint_api::Place;

/// Immutable id -> place table, preserving catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    places: Vec<Place>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(places: Vec<Place>) -> Self {
        let index = places
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self { places, index }
    }

    pub fn get(&self, id: &str) -> Option<&Place> {
        self.index.get(id).map(|&i| &self.places[i])
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Resolve stored ids into places, keeping the stored order.
    ///
    /// Ids with no catalog match are dropped silently (the stored list may
    /// predate a catalog change).
    pub fn hydrate(&self, ids: &[String]) -> Vec<Place> {
        ids.iter()
            .filter_map(|id| {
                let place = self.get(id);
                if place.is_none() {
                    warn!(%id, "stored id not in catalog, dropping");
                }
                place.cloned()
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
