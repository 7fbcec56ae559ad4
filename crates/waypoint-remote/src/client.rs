//! HTTP client for the places API
//!
//! Two endpoints: `GET /{resource}` for a catalog read and `PUT /user-places`
//! for a full-list replace. Non-success statuses keep their status code and a
//! truncated response body in the error value.

use tracing::{debug, error, info};
use waypoint_api::{Place, Result, SyncError};

use crate::models::{PlacesResponse, UpdateRequest, UpdateResponse};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const USER_PLACES_RESOURCE: &str = "user-places";

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
const MAX_ERROR_BODY: usize = 500;

pub struct PlacesClient {
    base_url: String,
    client: reqwest::Client,
}

impl Default for PlacesClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PlacesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Read the places under `resource` (the catalog, or the saved user list).
    pub async fn fetch_places(&self, resource: &str) -> Result<Vec<Place>> {
        let url = format!("{}/{}", self.base_url, resource);
        debug!(%url, "fetching places");

        let response = self.client.get(&url).send().await.map_err(|e| {
            let message = format!("Failed to send request to {}: {}", url, e);
            error!("[PlacesClient] {}", message);
            SyncError::Load { message }
        })?;

        let body = Self::handle_response(response, &url).await?;
        let parsed: PlacesResponse = serde_json::from_str(&body).map_err(|e| {
            let message = format!("Failed to parse places response from {}: {}", url, e);
            error!("[PlacesClient] {}", message);
            SyncError::Load { message }
        })?;

        info!(count = parsed.places.len(), %url, "fetched places");
        Ok(parsed.places)
    }

    /// Replace the saved user list and return the server's confirmation
    /// message. Always sends the complete desired list, never a delta.
    pub async fn update_user_places(&self, places: &[Place]) -> Result<String> {
        let url = format!("{}/{}", self.base_url, USER_PLACES_RESOURCE);
        debug!(count = places.len(), %url, "updating user places");

        let response = self
            .client
            .put(&url)
            .json(&UpdateRequest { places })
            .send()
            .await
            .map_err(|e| {
                let message = format!("Failed to send update to {}: {}", url, e);
                error!("[PlacesClient] {}", message);
                SyncError::Persist { message }
            })?;

        let body = Self::handle_response(response, &url).await?;
        let parsed: UpdateResponse = serde_json::from_str(&body).map_err(|e| {
            let message = format!("Failed to parse update response from {}: {}", url, e);
            error!("[PlacesClient] {}", message);
            SyncError::Persist { message }
        })?;

        info!(message = %parsed.message, "user places updated");
        Ok(parsed.message)
    }

    /// Check the status and read the body, keeping status and a truncated
    /// body on non-success instead of collapsing to a generic failure.
    async fn handle_response(response: reqwest::Response, url: &str) -> Result<String> {
        let status = response.status();
        let body = response.text().await.map_err(|e| SyncError::Load {
            message: format!("Failed to read response body from {}: {}", url, e),
        })?;

        if !status.is_success() {
            let truncated = if body.chars().count() > MAX_ERROR_BODY {
                let head: String = body.chars().take(MAX_ERROR_BODY).collect();
                format!("{}... (truncated)", head)
            } else {
                body
            };
            let err = SyncError::Http {
                status: status.as_u16(),
                url: url.to_string(),
                body: truncated,
            };
            error!("[PlacesClient] {}", err);
            return Err(err);
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_urls_from_base() {
        let client = PlacesClient::new("http://example.test:3000");
        assert_eq!(client.base_url, "http://example.test:3000");
    }

    #[test]
    fn test_default_points_at_local_backend() {
        let client = PlacesClient::default();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
