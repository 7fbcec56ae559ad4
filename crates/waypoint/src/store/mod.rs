//! Persistence seam for the selection list
//!
//! Two interchangeable strategies implement [`SelectionStore`]: the
//! file-backed [`LocalStore`] here and the HTTP-backed store in the
//! `waypoint-remote` crate. Exactly one is active at composition time.

use async_trait::async_trait;
use waypoint_api::{Place, Result};

pub mod local;

pub use local::LocalStore;

/// Where the selection list's truth lives.
///
/// `save` always receives the complete desired list, never a delta; callers
/// compute the post-mutation list before calling it.
#[async_trait]
pub trait SelectionStore: Send + Sync {
    /// Load the persisted selection list.
    async fn load(&self) -> Result<Vec<Place>>;

    /// Replace the persisted list with `places`.
    ///
    /// Returns the backend's confirmation message when it supplies one (the
    /// remote strategy does, the local strategy does not).
    async fn save(&self, places: &[Place]) -> Result<Option<String>>;
}
