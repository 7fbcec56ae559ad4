//! File-backed local strategy
//!
//! Persists only the ordered list of selected ids as a JSON array in a single
//! file; loads hydrate the ids against the static catalog. The device-local
//! counterpart of the remote store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;
use waypoint_api::{Place, Result};

use crate::catalog::Catalog;
use crate::store::SelectionStore;

/// Default file name for the stored id list.
pub const DEFAULT_STORE_FILE: &str = "selected-places.json";

pub struct LocalStore {
    path: PathBuf,
    catalog: Catalog,
}

impl LocalStore {
    pub fn new(path: impl AsRef<Path>, catalog: Catalog) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            catalog,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SelectionStore for LocalStore {
    async fn load(&self) -> Result<Vec<Place>> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            // A store that was never written is an empty list, not an error
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let ids: Vec<String> = serde_json::from_slice(&raw)?;
        debug!(count = ids.len(), path = %self.path.display(), "loaded stored ids");
        Ok(self.catalog.hydrate(&ids))
    }

    async fn save(&self, places: &[Place]) -> Result<Option<String>> {
        let ids: Vec<&str> = places.iter().map(|p| p.id.as_str()).collect();
        let bytes = serde_json::to_vec(&ids)?;

        // Write-then-rename so a reader never observes a partial list
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(count = ids.len(), path = %self.path.display(), "saved id list");
        Ok(None)
    }
}
