//! Distance-based catalog ordering
//!
//! Pure functions only: the origin comes from a one-shot position lookup
//! elsewhere (see [`crate::position`]); nothing here performs I/O.

use waypoint_api::{Coordinate, Place};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers (haversine).
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + (d_lng / 2.0).sin().powi(2) * lat_a.cos() * lat_b.cos();
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Return the places ordered by ascending distance from `origin`.
///
/// Stable: ties keep their original catalog order. The result is always a
/// permutation of the input; nothing is added or dropped.
pub fn sort_places_by_distance(places: &[Place], origin: Coordinate) -> Vec<Place> {
    let mut sorted = places.to_vec();
    sorted.sort_by(|a, b| {
        distance_km(origin, a.coordinates).total_cmp(&distance_km(origin, b.coordinates))
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn place(id: &str, lat: f64, lng: f64) -> Place {
        Place {
            id: id.to_string(),
            name: format!("Place {}", id),
            image_path: format!("images/{}.jpg", id),
            description: String::new(),
            coordinates: Coordinate::new(lat, lng),
        }
    }

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = Coordinate::new(48.8566, 2.3522);
        assert!(distance_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_distance_matches_reference_value() {
        // Paris <-> Berlin, reference value from the haversine formula itself
        let paris = Coordinate::new(48.8566, 2.3522);
        let berlin = Coordinate::new(52.52, 13.405);
        let d = distance_km(paris, berlin);
        assert!((d - 877.46).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_sort_symmetric_scenario() {
        // B(1,1) and C(-1,-1) are equidistant from the origin; the stable
        // sort must keep B before C because B comes first in the catalog.
        let catalog = vec![place("A", 0.0, 0.0), place("B", 1.0, 1.0), place("C", -1.0, -1.0)];
        let origin = Coordinate::new(0.0, 0.0);

        let sorted = sort_places_by_distance(&catalog, origin);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);

        let d_b = distance_km(origin, sorted[1].coordinates);
        let d_c = distance_km(origin, sorted[2].coordinates);
        assert!((d_b - d_c).abs() < 1e-9);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let catalog = vec![place("far", 50.0, 50.0), place("near", 0.1, 0.1)];
        let before = catalog.clone();
        let sorted = sort_places_by_distance(&catalog, Coordinate::new(0.0, 0.0));
        assert_eq!(catalog, before);
        assert_eq!(sorted[0].id, "near");
        assert_eq!(sorted[1].id, "far");
    }

    proptest! {
        #[test]
        fn prop_sort_is_ordered_permutation(
            coords in prop::collection::vec((-89.0f64..89.0, -179.0f64..179.0), 0..20),
            origin_lat in -89.0f64..89.0,
            origin_lng in -179.0f64..179.0,
        ) {
            let catalog: Vec<Place> = coords
                .iter()
                .enumerate()
                .map(|(i, (lat, lng))| place(&format!("p{}", i), *lat, *lng))
                .collect();
            let origin = Coordinate::new(origin_lat, origin_lng);

            let sorted = sort_places_by_distance(&catalog, origin);

            // Permutation: same ids, same multiplicity
            let mut before: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
            let mut after: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);

            // Non-decreasing distance
            for pair in sorted.windows(2) {
                let d0 = distance_km(origin, pair[0].coordinates);
                let d1 = distance_km(origin, pair[1].coordinates);
                prop_assert!(d0 <= d1);
            }
        }
    }
}
