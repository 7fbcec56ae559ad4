//! Composition root
//!
//! Wires the pieces together the way the app does at startup: one loader for
//! the catalog (fetched, then distance-sorted once the one-shot position
//! resolves), one loader for the user's saved list, and the optimistic
//! controller over the chosen store strategy. Store and catalog source are
//! swappable at composition time; there is one engine, not one per backend.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::info;
use waypoint_api::{Coordinate, FetchState, Place, Result};

use crate::controller::SelectionController;
use crate::fetch::FetchCore;
use crate::geo::sort_places_by_distance;
use crate::position::{resolve_position, PositionSource, DEFAULT_POSITION_TIMEOUT};
use crate::store::SelectionStore;

pub const CATALOG_RESOURCE: &str = "places";
pub const USER_PLACES_RESOURCE: &str = "user-places";

const USER_PLACES_FAILED_MESSAGE: &str = "Failed to get your places. Please try again";

/// How the catalog is currently ordered.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CatalogOrdering {
    /// Position not resolved (yet); catalog keeps its source order.
    #[default]
    Pending,
    /// Sorted by ascending distance from the resolved origin.
    ByDistance(Coordinate),
}

/// The catalog as the presentation layer should show it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogView {
    pub places: Vec<Place>,
    pub ordering: CatalogOrdering,
}

pub struct EngineConfig {
    pub catalog_resource: String,
    pub position_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_resource: CATALOG_RESOURCE.to_string(),
            position_timeout: DEFAULT_POSITION_TIMEOUT,
        }
    }
}

pub struct PlacesEngine {
    catalog: FetchCore<String, CatalogView>,
    selections: FetchCore<String, Vec<Place>>,
    controller: Arc<SelectionController>,
    catalog_resource: String,
}

impl PlacesEngine {
    /// Build an engine over a catalog source, a position source and a store.
    ///
    /// `catalog_fn` maps a resource name to the raw catalog; the engine
    /// composes it with the position lookup and the distance sort so that
    /// the catalog loader's `is_fetching` covers the whole pipeline, the way
    /// the original startup flow did.
    pub fn new<F, Fut>(
        catalog_fn: F,
        position: Arc<dyn PositionSource>,
        store: Arc<dyn SelectionStore>,
        config: EngineConfig,
    ) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<Place>>> + Send + 'static,
    {
        let timeout = config.position_timeout;
        let catalog = FetchCore::new(CatalogView::default(), move |resource: String| {
            let places_fut = catalog_fn(resource);
            let position = Arc::clone(&position);
            async move {
                let places = places_fut.await?;
                match resolve_position(position.as_ref(), timeout).await {
                    Ok(origin) => {
                        info!(count = places.len(), "catalog sorted by distance");
                        Ok(CatalogView {
                            places: sort_places_by_distance(&places, origin),
                            ordering: CatalogOrdering::ByDistance(origin),
                        })
                    }
                    // Not a hard error: ordering stays pending indefinitely
                    Err(_) => {
                        info!("position unavailable, catalog ordering stays pending");
                        Ok(CatalogView {
                            places,
                            ordering: CatalogOrdering::Pending,
                        })
                    }
                }
            }
        });

        let selection_store = Arc::clone(&store);
        let selections = FetchCore::new(Vec::new(), move |_resource: String| {
            let store = Arc::clone(&selection_store);
            async move { store.load().await }
        })
        .with_fallback_message(USER_PLACES_FAILED_MESSAGE);

        Self {
            catalog,
            selections,
            controller: Arc::new(SelectionController::new(store)),
            catalog_resource: config.catalog_resource,
        }
    }

    /// Load the catalog and the user's saved list concurrently, then hand
    /// the loaded selection to the controller.
    pub async fn start(&self) {
        tokio::join!(
            self.catalog.load(self.catalog_resource.clone()),
            self.load_selections(),
        );
    }

    /// Re-trigger the catalog load (same resource, new generation).
    pub async fn reload_catalog(&self) {
        self.catalog.load(self.catalog_resource.clone()).await;
    }

    async fn load_selections(&self) {
        self.selections.load(USER_PLACES_RESOURCE.to_string()).await;
        let state = self.selections.state();
        if state.error.is_none() {
            self.controller.set_confirmed(state.data).await;
        }
    }

    pub fn catalog_state(&self) -> FetchState<CatalogView> {
        self.catalog.state()
    }

    pub fn subscribe_catalog(&self) -> watch::Receiver<FetchState<CatalogView>> {
        self.catalog.subscribe()
    }

    pub fn selections_state(&self) -> FetchState<Vec<Place>> {
        self.selections.state()
    }

    pub fn controller(&self) -> Arc<SelectionController> {
        Arc::clone(&self.controller)
    }
}
