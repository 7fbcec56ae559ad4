//! Fake places API for tests and offline use
//!
//! Serves a fixed catalog and an in-memory user list behind the same
//! `SelectionStore` seam as [`crate::store::RemoteStore`], with switchable
//! failure injection to drive the rollback paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use waypoint::store::SelectionStore;
use waypoint_api::{Place, Result, SyncError};

pub struct FakePlacesApi {
    catalog: Vec<Place>,
    user_places: Mutex<Vec<Place>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl FakePlacesApi {
    pub fn new(catalog: Vec<Place>) -> Arc<Self> {
        Arc::new(Self {
            catalog,
            user_places: Mutex::new(Vec::new()),
            fail_loads: AtomicBool::new(false),
            fail_saves: AtomicBool::new(false),
        })
    }

    /// Reject subsequent loads with a transport-style error.
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Reject subsequent saves with a transport-style error.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// The catalog as `GET /places` would return it.
    pub async fn fetch_catalog(&self) -> Result<Vec<Place>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(self.http_error("places"));
        }
        Ok(self.catalog.clone())
    }

    /// What the fake currently holds as the persisted user list.
    pub async fn persisted(&self) -> Vec<Place> {
        self.user_places.lock().await.clone()
    }

    fn http_error(&self, resource: &str) -> SyncError {
        SyncError::Http {
            status: 503,
            url: format!("fake:/{}", resource),
            body: "service unavailable".to_string(),
        }
    }
}

#[async_trait]
impl SelectionStore for FakePlacesApi {
    async fn load(&self) -> Result<Vec<Place>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(self.http_error("user-places"));
        }
        Ok(self.user_places.lock().await.clone())
    }

    async fn save(&self, places: &[Place]) -> Result<Option<String>> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(self.http_error("user-places"));
        }
        *self.user_places.lock().await = places.to_vec();
        debug!(count = places.len(), "fake store replaced user places");
        Ok(Some("User places updated!".to_string()))
    }
}
