use crate::models::{DraftLocation, Location};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the locations API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    ErrorStatus(StatusCode),
}

/// HTTP client for the locations API
///
/// The data-fetching side of the page: one call per endpoint, nothing else.
/// The page controller decides when to fetch and what to do with the result.
pub struct LocationsApi {
    base_url: String,
    client: Client,
}

impl LocationsApi {
    /// Create a new API client for the given server base URL
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    fn locations_url(&self) -> String {
        format!("{}/api/location", self.base_url.trim_end_matches('/'))
    }

    /// GET /api/location
    pub async fn fetch_locations(&self) -> Result<Vec<Location>, ApiError> {
        let response = self.client.get(self.locations_url()).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::ErrorStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    /// POST /api/location
    pub async fn create_location(&self, draft: &DraftLocation) -> Result<Location, ApiError> {
        let response = self
            .client
            .post(self.locations_url())
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::ErrorStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    /// DELETE /api/location/{cuid}
    pub async fn delete_location(&self, cuid: &str) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.locations_url(), cuid);

        let response = self.client.delete(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::ErrorStatus(response.status()));
        }

        Ok(())
    }
}
