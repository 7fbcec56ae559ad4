//! `SelectionStore` over the HTTP client

use std::sync::Arc;

use async_trait::async_trait;
use waypoint::store::SelectionStore;
use waypoint_api::{Place, Result};

use crate::client::{PlacesClient, USER_PLACES_RESOURCE};

/// Remote strategy: truth lives behind the places API.
pub struct RemoteStore {
    client: Arc<PlacesClient>,
    resource: String,
}

impl RemoteStore {
    pub fn new(client: Arc<PlacesClient>) -> Self {
        Self {
            client,
            resource: USER_PLACES_RESOURCE.to_string(),
        }
    }
}

#[async_trait]
impl SelectionStore for RemoteStore {
    async fn load(&self) -> Result<Vec<Place>> {
        self.client.fetch_places(&self.resource).await
    }

    async fn save(&self, places: &[Place]) -> Result<Option<String>> {
        self.client.update_user_places(places).await.map(Some)
    }
}
