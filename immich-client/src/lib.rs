//! # Immich Client
//!
//! Thin HTTP adapter for the Immich API.
//!
//! ## Overview
//!
//! This crate provides the four calls the album synchronizer needs:
//! - Listing albums (name + id pairs)
//! - Creating an album by name
//! - Searching assets by exact original filename
//! - Batch-attaching asset ids to an album
//!
//! Requests carry the API key in an `x-api-key` header and exchange
//! JSON bodies. No pagination is performed; responses are consumed as
//! single pages.

pub mod client;
pub mod error;
pub mod types;

pub use client::ImmichClient;
pub use error::{ImmichError, Result};
pub use types::{Album, AssetSummary};
