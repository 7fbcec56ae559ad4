//! End-to-end engine flows against an in-memory store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use waypoint::engine::{CatalogOrdering, EngineConfig, PlacesEngine};
use waypoint::position::{FixedPosition, PositionSource};
use waypoint::store::SelectionStore;
use waypoint::{Coordinate, Place, Result, SyncError};

fn place(id: &str, lat: f64, lng: f64) -> Place {
    Place {
        id: id.to_string(),
        name: format!("Place {}", id),
        image_path: format!("images/{}.jpg", id),
        description: String::new(),
        coordinates: Coordinate::new(lat, lng),
    }
}

fn catalog() -> Vec<Place> {
    vec![
        place("far", 40.0, 40.0),
        place("near", 1.0, 1.0),
        place("mid", 10.0, 10.0),
    ]
}

/// In-memory store seeded with a saved list, with switchable save failures.
struct MemoryStore {
    places: Mutex<Vec<Place>>,
    fail_saves: AtomicBool,
    fail_loads: AtomicBool,
}

impl MemoryStore {
    fn new(seed: Vec<Place>) -> Arc<Self> {
        Arc::new(Self {
            places: Mutex::new(seed),
            fail_saves: AtomicBool::new(false),
            fail_loads: AtomicBool::new(false),
        })
    }
}

#[async_trait]
impl SelectionStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Place>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(SyncError::load("connection refused"));
        }
        Ok(self.places.lock().await.clone())
    }

    async fn save(&self, places: &[Place]) -> Result<Option<String>> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(SyncError::Http {
                status: 500,
                url: "memory:/user-places".to_string(),
                body: "save rejected".to_string(),
            });
        }
        *self.places.lock().await = places.to_vec();
        Ok(Some("User places updated!".to_string()))
    }
}

struct NeverResolves;

#[async_trait]
impl PositionSource for NeverResolves {
    async fn current_position(&self) -> Result<Coordinate> {
        std::future::pending().await
    }
}

fn engine_with(
    store: Arc<MemoryStore>,
    position: Arc<dyn PositionSource>,
    config: EngineConfig,
) -> PlacesEngine {
    PlacesEngine::new(
        move |_resource| {
            let places = catalog();
            async move { Ok(places) }
        },
        position,
        store,
        config,
    )
}

#[tokio::test]
async fn test_startup_sorts_catalog_and_hydrates_selection() {
    let store = MemoryStore::new(vec![place("mid", 10.0, 10.0)]);
    let position = Arc::new(FixedPosition(Coordinate::new(0.0, 0.0)));
    let engine = engine_with(store, position, EngineConfig::default());

    engine.start().await;

    let catalog = engine.catalog_state();
    assert!(!catalog.is_fetching);
    assert!(catalog.error.is_none());
    let ids: Vec<&str> = catalog.data.places.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["near", "mid", "far"]);
    assert_eq!(
        catalog.data.ordering,
        CatalogOrdering::ByDistance(Coordinate::new(0.0, 0.0))
    );

    assert_eq!(engine.controller().list().await.ids(), vec!["mid"]);
}

#[tokio::test(start_paused = true)]
async fn test_unresolved_position_leaves_ordering_pending() {
    let store = MemoryStore::new(Vec::new());
    let engine = engine_with(
        store,
        Arc::new(NeverResolves),
        EngineConfig {
            position_timeout: Duration::from_millis(200),
            ..EngineConfig::default()
        },
    );

    engine.start().await;

    let catalog = engine.catalog_state();
    assert!(catalog.error.is_none(), "pending position is not an error");
    assert_eq!(catalog.data.ordering, CatalogOrdering::Pending);
    // Source order untouched
    let ids: Vec<&str> = catalog.data.places.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["far", "near", "mid"]);
}

#[tokio::test]
async fn test_selection_load_failure_is_inert() {
    let store = MemoryStore::new(vec![place("mid", 10.0, 10.0)]);
    store.fail_loads.store(true, Ordering::SeqCst);
    let position = Arc::new(FixedPosition(Coordinate::new(0.0, 0.0)));
    let engine = engine_with(store, position, EngineConfig::default());

    engine.start().await;

    let selections = engine.selections_state();
    assert_eq!(
        selections.error.unwrap().message,
        "connection refused"
    );
    // Nothing was handed to the controller
    assert!(engine.controller().list().await.is_empty());
}

#[tokio::test]
async fn test_offline_add_rolls_back_through_the_engine() {
    let store = MemoryStore::new(vec![place("mid", 10.0, 10.0)]);
    let position = Arc::new(FixedPosition(Coordinate::new(0.0, 0.0)));
    let engine = engine_with(store.clone(), position, EngineConfig::default());
    engine.start().await;

    let controller = engine.controller();
    store.fail_saves.store(true, Ordering::SeqCst);

    controller.add(place("near", 1.0, 1.0)).await.unwrap_err();

    assert_eq!(controller.list().await.ids(), vec!["mid"]);
    let notice = controller.subscribe_notices().borrow().clone().unwrap();
    assert!(!notice.message.is_empty());

    // The persisted truth was never touched
    store.fail_saves.store(false, Ordering::SeqCst);
    assert_eq!(store.load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_and_confirm_remove_roundtrip() {
    let store = MemoryStore::new(Vec::new());
    let position = Arc::new(FixedPosition(Coordinate::new(0.0, 0.0)));
    let engine = engine_with(store.clone(), position, EngineConfig::default());
    engine.start().await;

    let controller = engine.controller();
    controller.add(place("near", 1.0, 1.0)).await.unwrap();
    controller.add(place("far", 40.0, 40.0)).await.unwrap();
    assert_eq!(controller.list().await.ids(), vec!["far", "near"]);

    controller.begin_remove("far").await;
    controller.confirm_remove().await.unwrap();
    assert_eq!(controller.list().await.ids(), vec!["near"]);

    let persisted = store.load().await.unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].id, "near");
}
