//! Immich API client implementation
//!
//! Wraps a `reqwest::Client` configured with the `x-api-key` header and
//! exposes the four endpoints the synchronizer uses. Non-success
//! statuses are surfaced as [`ImmichError::Api`] with the response body
//! as the message; transport failures become [`ImmichError::Network`].

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::debug;

use crate::error::{ImmichError, Result};
use crate::types::{
    AddAssetsRequest, Album, AssetSummary, CreateAlbumRequest, CreatedAlbum,
    MetadataSearchRequest, MetadataSearchResponse,
};

/// Immich API client
///
/// The API key is installed as a default header at construction time and
/// is read-only afterwards; no other state is held.
pub struct ImmichClient {
    client: reqwest::Client,
    base_url: String,
}

impl ImmichClient {
    /// Create a client for the given base API endpoint, e.g.
    /// `http://localhost:2283/api`.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let key_value = HeaderValue::from_str(api_key)
            .map_err(|e| ImmichError::InvalidApiKey(e.to_string()))?;
        headers.insert("x-api-key", key_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent("album-sync/0.1.0")
            .build()
            .map_err(|e| ImmichError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List all albums visible to the API key.
    pub async fn list_albums(&self) -> Result<Vec<Album>> {
        let url = format!("{}/albums", self.base_url);
        debug!(url = %url, "Listing albums");

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        let albums = response.json::<Vec<Album>>().await?;

        debug!(count = albums.len(), "Received album listing");
        Ok(albums)
    }

    /// Create an album with the given name, returning its new id.
    pub async fn create_album(&self, album_name: &str) -> Result<String> {
        let url = format!("{}/albums", self.base_url);
        let body = CreateAlbumRequest {
            album_name: album_name.to_string(),
        };
        debug!(url = %url, album_name = %album_name, "Creating album");

        let response = self.client.post(&url).json(&body).send().await?;
        let response = Self::check_status(response).await?;
        let created = response.json::<CreatedAlbum>().await?;

        Ok(created.id)
    }

    /// Search assets whose original filename matches `filename` exactly.
    ///
    /// Returns every match; the caller decides what to do when the result
    /// is not unique.
    pub async fn search_assets_by_filename(&self, filename: &str) -> Result<Vec<AssetSummary>> {
        let url = format!("{}/search/metadata", self.base_url);
        let body = MetadataSearchRequest {
            original_file_name: filename.to_string(),
        };
        debug!(url = %url, filename = %filename, "Searching assets by filename");

        let response = self.client.post(&url).json(&body).send().await?;
        let response = Self::check_status(response).await?;
        let search = response.json::<MetadataSearchResponse>().await?;

        Ok(search.assets.map(|page| page.items).unwrap_or_default())
    }

    /// Attach the given asset ids to an album in one batch call.
    ///
    /// The remote service treats this as a set union, so re-attaching an
    /// already-linked asset is a no-op.
    pub async fn add_assets_to_album(&self, album_id: &str, asset_ids: &[String]) -> Result<()> {
        let url = format!("{}/albums/{}/assets", self.base_url, album_id);
        let body = AddAssetsRequest {
            ids: asset_ids.to_vec(),
        };
        debug!(url = %url, count = asset_ids.len(), "Attaching assets to album");

        let response = self.client.put(&url).json(&body).send().await?;
        Self::check_status(response).await?;

        Ok(())
    }

    /// Map a non-success status to an API error carrying the body text.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(ImmichError::Api {
            status_code: status.as_u16(),
            message,
        })
    }
}
