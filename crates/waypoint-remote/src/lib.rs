//! Remote persistence strategy for waypoint
//!
//! This crate provides the HTTP-backed side of the store seam:
//! - `client` - PlacesClient (reqwest HTTP client for the places API)
//! - `models` - wire models
//! - `store` - RemoteStore implementing `SelectionStore` over the client
//! - `fake` - FakePlacesApi with failure injection for tests and offline use

pub mod client;
pub mod fake;
pub mod models;
pub mod store;

pub use client::PlacesClient;
pub use fake::FakePlacesApi;
pub use models::{PlacesResponse, UpdateResponse};
pub use store::RemoteStore;
