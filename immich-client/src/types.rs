//! Immich API request and response types
//!
//! Data structures for the album and metadata-search endpoints. Only the
//! fields the synchronizer reads are modeled; everything else in the
//! responses is ignored.

use serde::{Deserialize, Serialize};

/// Album summary as returned by `GET /albums`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Album ID
    pub id: String,

    /// Album display name
    pub album_name: String,
}

/// Request body for `POST /albums`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumRequest {
    /// Name of the album to create
    pub album_name: String,
}

/// Response body for `POST /albums`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedAlbum {
    /// ID assigned to the new album
    pub id: String,
}

/// Request body for `POST /search/metadata`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSearchRequest {
    /// Exact original filename to search for
    pub original_file_name: String,
}

/// Response body for `POST /search/metadata`
///
/// The `assets` envelope is absent when the search matches nothing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSearchResponse {
    #[serde(default)]
    pub assets: Option<AssetPage>,
}

/// Page of asset results inside a metadata search response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPage {
    /// Matched assets
    #[serde(default)]
    pub items: Vec<AssetSummary>,
}

/// Asset summary inside a search result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    /// Asset ID
    pub id: String,

    /// Original filename the asset was uploaded with
    #[serde(default)]
    pub original_file_name: Option<String>,
}

/// Request body for `PUT /albums/{id}/assets`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAssetsRequest {
    /// Asset IDs to attach to the album
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_album_listing() {
        let json = r#"[
            {
                "id": "7c3a3d51-4b0e-4f9a-9a52-0d8ab30ab7fe",
                "albumName": "Vacation2023",
                "assetCount": 12,
                "shared": false
            }
        ]"#;

        let albums: Vec<Album> = serde_json::from_str(json).unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].album_name, "Vacation2023");
        assert_eq!(albums[0].id, "7c3a3d51-4b0e-4f9a-9a52-0d8ab30ab7fe");
    }

    #[test]
    fn test_serialize_create_album_request() {
        let request = CreateAlbumRequest {
            album_name: "Empty".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"albumName": "Empty"}));
    }

    #[test]
    fn test_deserialize_metadata_search_response() {
        let json = r#"{
            "assets": {
                "total": 1,
                "count": 1,
                "items": [
                    {
                        "id": "A1",
                        "originalFileName": "a.jpg",
                        "type": "IMAGE"
                    }
                ]
            },
            "albums": {"total": 0, "count": 0, "items": []}
        }"#;

        let response: MetadataSearchResponse = serde_json::from_str(json).unwrap();
        let assets = response.assets.unwrap();
        assert_eq!(assets.items.len(), 1);
        assert_eq!(assets.items[0].id, "A1");
        assert_eq!(assets.items[0].original_file_name.as_deref(), Some("a.jpg"));
    }

    #[test]
    fn test_deserialize_metadata_search_response_without_assets() {
        let response: MetadataSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.assets.is_none());
    }

    #[test]
    fn test_serialize_add_assets_request() {
        let request = AddAssetsRequest {
            ids: vec!["A1".to_string(), "A2".to_string()],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"ids": ["A1", "A2"]}));
    }
}
