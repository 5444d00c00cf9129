use crate::models::{DraftLocation, Location};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key or project")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Document store connection for the locations collection
///
/// Wraps the store's REST document API. The rest of the crate only sees
/// insert / list / delete on `Location` values; wire format, authentication
/// headers and projection queries all live here.
pub struct StoreClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    collection_id: String,
    client: Client,
}

/// Public fields of a location document, used as a `select` projection so
/// storage-internal fields are excluded by the store itself rather than
/// filtered out after the fact.
const PUBLIC_FIELDS: [&str; 5] = ["cuid", "name", "latitude", "longitude", "address"];

impl StoreClient {
    /// Create a new store client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collection_id: String,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            project_id,
            database_id,
            collection_id,
            client,
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collection_id
        )
    }

    /// Insert a new location document
    ///
    /// The minted cuid doubles as the store document id, so deletes can
    /// address the document directly. The created document is parsed back
    /// into the public `Location` shape.
    pub async fn insert_location(
        &self,
        cuid: &str,
        draft: &DraftLocation,
    ) -> Result<Location, StoreError> {
        let url = self.documents_url();

        let payload = serde_json::json!({
            "$id": cuid,
            "cuid": cuid,
            "name": draft.name,
            "latitude": draft.latitude,
            "longitude": draft.longitude,
            "address": draft.address,
        });

        let response = self
            .client
            .post(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            return Err(StoreError::ApiError(format!(
                "Failed to insert location: {}",
                status
            )));
        }

        let json: Value = response.json().await?;
        let data = json.get("data").unwrap_or(&json);

        serde_json::from_value(data.clone())
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse location: {}", e)))
    }

    /// Fetch every location in the collection
    ///
    /// The query carries a projection on the public fields, so `$`-prefixed
    /// storage fields are dropped at the query level.
    pub async fn list_locations(&self) -> Result<Vec<Location>, StoreError> {
        let fields = PUBLIC_FIELDS
            .iter()
            .map(|f| format!("\"{}\"", f))
            .collect::<Vec<_>>()
            .join(",");
        let queries_json = serde_json::json!([format!("select([{}])", fields)]).to_string();
        let encoded_queries = urlencoding::encode(&queries_json);

        let full_url = format!("{}?query={}", self.documents_url(), encoded_queries);

        tracing::debug!("Fetching locations from: {}", full_url);

        let response = self
            .client
            .get(&full_url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            return Err(StoreError::ApiError(format!(
                "Failed to list locations: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64()).unwrap_or(0);

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| StoreError::InvalidResponse("Missing documents array".into()))?;

        let locations: Vec<Location> = documents
            .iter()
            .filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                serde_json::from_value(data.clone()).ok()
            })
            .collect();

        tracing::debug!("Fetched {} locations (total: {})", locations.len(), total);

        Ok(locations)
    }

    /// Delete the location document with the given cuid
    ///
    /// A 404 from the store is success: deleting a record that no longer
    /// exists is a no-op, matching the idempotent delete contract.
    pub async fn delete_location(&self, cuid: &str) -> Result<(), StoreError> {
        let url = format!("{}/{}", self.documents_url(), cuid);

        let response = self
            .client
            .delete(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("Delete for missing location {}, treated as success", cuid);
            return Ok(());
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }
        if !status.is_success() {
            return Err(StoreError::ApiError(format!(
                "Failed to delete location: {}",
                status
            )));
        }

        Ok(())
    }

    /// Probe the store's health endpoint
    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url.trim_end_matches('/'));

        match self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("Store health check failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> StoreClient {
        StoreClient::new(
            base_url.to_string(),
            "test_key".to_string(),
            "test_project".to_string(),
            "test_db".to_string(),
            "locations".to_string(),
        )
    }

    #[test]
    fn test_store_client_creation() {
        let client = test_client("https://store.test/v1");

        assert_eq!(client.base_url, "https://store.test/v1");
        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.collection_id, "locations");
    }

    #[test]
    fn test_documents_url_trims_trailing_slash() {
        let client = test_client("https://store.test/v1/");

        assert_eq!(
            client.documents_url(),
            "https://store.test/v1/databases/test_db/collections/locations/documents"
        );
    }

    #[tokio::test]
    async fn test_delete_missing_location_is_ok() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "DELETE",
                "/databases/test_db/collections/locations/documents/gone",
            )
            .with_status(404)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let result = client.delete_location("gone").await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_list_locations_parses_documents() {
        let mut server = mockito::Server::new_async().await;
        let body = serde_json::json!({
            "total": 2,
            "documents": [
                {
                    "$id": "a",
                    "cuid": "a",
                    "name": "Home",
                    "latitude": 1.0,
                    "longitude": 2.0,
                    "address": "1 Main St"
                },
                {
                    "$id": "b",
                    "cuid": "b",
                    "name": "Office",
                    "latitude": 3.0,
                    "longitude": 4.0,
                    "address": "2 Side St"
                }
            ]
        });
        let mock = server
            .mock("GET", "/databases/test_db/collections/locations/documents")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = test_client(&server.url());
        let locations = client.list_locations().await.unwrap();

        mock.assert_async().await;
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].name, "Home");
        assert_eq!(locations[1].cuid, "b");
    }

    #[tokio::test]
    async fn test_list_locations_store_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/databases/test_db/collections/locations/documents")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let result = client.list_locations().await;

        assert!(matches!(result, Err(StoreError::ApiError(_))));
    }
}
