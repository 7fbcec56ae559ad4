//! Minimal end-to-end run against the fake places API.
//!
//! ```sh
//! cargo run -p waypoint-remote --example sync_demo
//! ```

use std::sync::Arc;

use waypoint::engine::{EngineConfig, PlacesEngine};
use waypoint::position::FixedPosition;
use waypoint::{Coordinate, Place, SelectionStore};
use waypoint_remote::FakePlacesApi;

fn place(id: &str, name: &str, lat: f64, lng: f64) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        image_path: format!("images/{}.jpg", id),
        description: String::new(),
        coordinates: Coordinate::new(lat, lng),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let api = FakePlacesApi::new(vec![
        place("forest-waterfall", "Forest Waterfall", 44.5588, -80.344),
        place("desert-dunes", "Desert Dunes", 25.0, 12.0),
        place("mountain-lake", "Mountain Lake", 46.6, 8.0),
    ]);

    let catalog_api = Arc::clone(&api);
    let engine = PlacesEngine::new(
        move |_resource| {
            let api = Arc::clone(&catalog_api);
            async move { api.fetch_catalog().await }
        },
        Arc::new(FixedPosition(Coordinate::new(48.8566, 2.3522))),
        Arc::clone(&api) as Arc<dyn SelectionStore>,
        EngineConfig::default(),
    );

    engine.start().await;

    let catalog = engine.catalog_state();
    println!("catalog by distance from Paris:");
    for p in &catalog.data.places {
        println!("  {}", p.name);
    }

    let controller = engine.controller();
    let nearest = catalog.data.places[0].clone();
    controller.add(nearest.clone()).await?;
    println!("selected: {:?}", controller.list().await.ids());

    controller.begin_remove(nearest.id.clone()).await;
    controller.confirm_remove().await?;
    println!("after removal: {:?}", controller.list().await.ids());

    Ok(())
}
