//! Per-album run outcome

/// Outcome of synchronizing one album folder.
///
/// Transient: surfaced through the synchronizer's return value and
/// logged, never persisted.
#[derive(Debug, Clone)]
pub struct AlbumReport {
    /// Album folder name, which is also the remote album name
    pub album_name: String,

    /// Album id used for the attach call. Under dry-run this is the
    /// placeholder id when the album did not already exist.
    pub album_id: String,

    /// Whether the album was created (or would have been, under dry-run)
    pub created: bool,

    /// Number of assets attached (or that would have been, under dry-run)
    pub attached: usize,

    /// Filenames with zero or multiple remote matches, excluded from the
    /// attach batch
    pub unmatched: Vec<String>,
}
