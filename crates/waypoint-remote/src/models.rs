use serde::{Deserialize, Serialize};
use waypoint_api::Place;

/// Body of `GET /{resource}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub places: Vec<Place>,
}

/// Body of `PUT /user-places`: the complete replacement list.
#[derive(Debug, Serialize)]
pub struct UpdateRequest<'a> {
    pub places: &'a [Place],
}

/// Server acknowledgment of a `PUT /user-places`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
}
