//! # Album Synchronizer
//!
//! Mirrors a local directory tree into Immich's album structure.
//!
//! ## Overview
//!
//! Each immediate subdirectory of a root folder names an album; each
//! file inside it is a candidate asset, matched against the remote
//! library by exact original filename. The synchronizer:
//! - Resolves or creates the remote album
//! - Resolves each file to a remote asset, requiring a unique match
//! - Attaches all resolved assets to the album in one batch call
//!
//! Assets are never uploaded, modified, or deleted; the only write
//! operations are album creation and attach, and both are suppressed in
//! dry-run mode.
//!
//! ## Components
//!
//! - **Service seam** (`service`): the `AlbumService` trait over the
//!   remote API, implemented for `ImmichClient`
//! - **Synchronizer** (`synchronizer`): the sequential run loop
//! - **Report** (`report`): transient per-album outcome

pub mod error;
pub mod report;
pub mod service;
pub mod synchronizer;

pub use error::{Result, SyncError};
pub use report::AlbumReport;
pub use service::AlbumService;
pub use synchronizer::{AlbumSynchronizer, SIMULATED_ALBUM_ID};
