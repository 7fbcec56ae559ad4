pub mod catalog;
pub mod controller;
pub mod engine;
pub mod fetch;
pub mod geo;
pub mod position;
pub mod selection;
pub mod store;

pub use catalog::Catalog;
pub use controller::{SelectionController, SyncNotice};
pub use engine::{CatalogOrdering, CatalogView, EngineConfig, PlacesEngine};
pub use fetch::FetchCore;
pub use position::{FixedPosition, PositionSource, DEFAULT_POSITION_TIMEOUT};
pub use selection::SelectionList;
pub use store::{LocalStore, SelectionStore};

// Re-export the shared types so downstream crates only need one import path
pub use waypoint_api::{Coordinate, FetchError, FetchState, Place, Result, SyncError};
