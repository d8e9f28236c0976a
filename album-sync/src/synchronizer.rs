//! Sequential album synchronization
//!
//! The run is a single linear traversal: each album folder moves through
//! resolve → collect assets → attach, with no retries and no persisted
//! checkpoint. Re-running after a crash is safe because lookups and
//! searches are reads and album creation / attach are idempotent on the
//! remote side.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Result, SyncError};
use crate::report::AlbumReport;
use crate::service::AlbumService;

/// Placeholder album id returned under dry-run when the album does not
/// exist yet. Never sent to the remote service: attach is also
/// suppressed under dry-run.
pub const SIMULATED_ALBUM_ID: &str = "SIMULATED_ALBUM_ID";

/// Synchronizes a local directory tree into remote albums.
pub struct AlbumSynchronizer<S> {
    service: S,
    dry_run: bool,
}

impl<S: AlbumService> AlbumSynchronizer<S> {
    pub fn new(service: S, dry_run: bool) -> Self {
        Self { service, dry_run }
    }

    /// Visit every album folder under `root_folder` and mirror it into
    /// the remote album structure.
    ///
    /// Aborts on the first hard failure (album creation, asset search,
    /// attach, or filesystem error). Filenames without a unique remote
    /// match are warned about and skipped, never fatal.
    pub async fn run(&self, root_folder: &Path) -> Result<Vec<AlbumReport>> {
        if !root_folder.is_dir() {
            return Err(SyncError::NotADirectory(root_folder.to_path_buf()));
        }

        let mut reports = Vec::new();
        for (album_name, album_path) in album_folders(root_folder)? {
            info!(album = %album_name, "Processing album");

            let (album_id, created) = self.resolve_or_create_album(&album_name).await?;

            let mut asset_ids = Vec::new();
            let mut unmatched = Vec::new();
            for filename in asset_filenames(&album_path)? {
                match self.resolve_asset(&filename).await? {
                    Some(asset_id) => {
                        info!(file = %filename, asset_id = %asset_id, "Found asset");
                        asset_ids.push(asset_id);
                    }
                    None => {
                        warn!(file = %filename, "No unique asset match, skipping");
                        unmatched.push(filename);
                    }
                }
            }

            let attached = asset_ids.len();
            if asset_ids.is_empty() {
                info!(album = %album_name, "No assets to add");
            } else {
                self.attach_assets(&album_name, &album_id, &asset_ids).await?;
            }

            reports.push(AlbumReport {
                album_name,
                album_id,
                created,
                attached,
                unmatched,
            });
        }

        Ok(reports)
    }

    /// Resolve an album id by exact name, creating the album when absent.
    ///
    /// Returns the id and whether a creation happened (or was simulated).
    async fn resolve_or_create_album(&self, album_name: &str) -> Result<(String, bool)> {
        if let Some(album_id) = self.lookup_album(album_name).await {
            info!(album = %album_name, album_id = %album_id, "Album already exists");
            return Ok((album_id, false));
        }

        if self.dry_run {
            info!(album = %album_name, "[dry run] Would create album");
            return Ok((SIMULATED_ALBUM_ID.to_string(), true));
        }

        info!(album = %album_name, "Creating album");
        let album_id = self.service.create_album(album_name).await?;
        Ok((album_id, true))
    }

    /// Find an existing album by exact name; first match wins.
    ///
    /// Listing failures are swallowed and reported as "absent", so a
    /// genuine outage looks like a missing album and leads to a create
    /// attempt (whose own failure does abort the run).
    async fn lookup_album(&self, album_name: &str) -> Option<String> {
        match self.service.list_albums().await {
            Ok(albums) => albums
                .into_iter()
                .find(|album| album.album_name == album_name)
                .map(|album| album.id),
            Err(error) => {
                warn!(album = %album_name, error = %error, "Album listing failed, treating album as absent");
                None
            }
        }
    }

    /// Resolve a filename to an asset id, requiring exactly one match.
    ///
    /// Zero and multiple matches are both "not found": ambiguity never
    /// attaches the wrong asset.
    async fn resolve_asset(&self, filename: &str) -> Result<Option<String>> {
        let mut matches = self.service.search_assets_by_filename(filename).await?;
        if matches.len() == 1 {
            Ok(Some(matches.remove(0).id))
        } else {
            Ok(None)
        }
    }

    async fn attach_assets(
        &self,
        album_name: &str,
        album_id: &str,
        asset_ids: &[String],
    ) -> Result<()> {
        if self.dry_run {
            info!(
                album = %album_name,
                count = asset_ids.len(),
                "[dry run] Would add assets to album"
            );
            return Ok(());
        }

        info!(album = %album_name, count = asset_ids.len(), "Adding assets to album");
        self.service.add_assets_to_album(album_id, asset_ids).await?;
        Ok(())
    }
}

/// Immediate subdirectories of the root folder, sorted by name.
/// Non-directory entries and names that are not valid UTF-8 are ignored.
fn album_folders(root: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut folders = Vec::new();
    for entry in read_dir(root)? {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => folders.push((name, path)),
            // A lossy rendition would name a different remote album.
            Err(name) => {
                warn!(name = %name.to_string_lossy(), "Album folder name is not valid UTF-8, skipping");
            }
        }
    }
    folders.sort();
    Ok(folders)
}

/// Direct file children of an album folder, sorted by name.
/// Nested directories are not recursed; names that are not valid UTF-8
/// are skipped with a warning.
fn asset_filenames(album_path: &Path) -> Result<Vec<String>> {
    let mut filenames = Vec::new();
    for entry in read_dir(album_path)? {
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => filenames.push(name),
            // A lossy rendition can never equal an uploaded original filename.
            Err(name) => {
                warn!(file = %name.to_string_lossy(), "File name is not valid UTF-8, skipping");
            }
        }
    }
    filenames.sort();
    Ok(filenames)
}

fn read_dir(path: &Path) -> Result<Vec<fs::DirEntry>> {
    let entries = fs::read_dir(path)
        .map_err(|source| SyncError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|source| SyncError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(entries)
}
