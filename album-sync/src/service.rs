//! Remote album service seam
//!
//! The synchronizer talks to the remote service through this trait so
//! tests can substitute a mock. `ImmichClient` is the production
//! implementation.

use async_trait::async_trait;
use immich_client::{Album, AssetSummary, ImmichClient};

/// The four remote capabilities the synchronizer needs.
#[async_trait]
pub trait AlbumService: Send + Sync {
    /// List all remote albums (name + id pairs).
    async fn list_albums(&self) -> immich_client::Result<Vec<Album>>;

    /// Create an album, returning its new id.
    async fn create_album(&self, album_name: &str) -> immich_client::Result<String>;

    /// Search assets by exact original filename.
    async fn search_assets_by_filename(
        &self,
        filename: &str,
    ) -> immich_client::Result<Vec<AssetSummary>>;

    /// Attach asset ids to an album in one batch call (set-union
    /// semantics on the remote side).
    async fn add_assets_to_album(
        &self,
        album_id: &str,
        asset_ids: &[String],
    ) -> immich_client::Result<()>;
}

#[async_trait]
impl AlbumService for ImmichClient {
    async fn list_albums(&self) -> immich_client::Result<Vec<Album>> {
        ImmichClient::list_albums(self).await
    }

    async fn create_album(&self, album_name: &str) -> immich_client::Result<String> {
        ImmichClient::create_album(self, album_name).await
    }

    async fn search_assets_by_filename(
        &self,
        filename: &str,
    ) -> immich_client::Result<Vec<AssetSummary>> {
        ImmichClient::search_assets_by_filename(self, filename).await
    }

    async fn add_assets_to_album(
        &self,
        album_id: &str,
        asset_ids: &[String],
    ) -> immich_client::Result<()> {
        ImmichClient::add_assets_to_album(self, album_id, asset_ids).await
    }
}
