//! HTTP API module for the versions-manifest endpoint.
//!
//! Provides `VersionsClient` for fetching the published game version
//! manifest. Filtering of the fetched list is local and lives with the
//! version models.

pub mod client;
pub mod error;

pub use client::VersionsClient;
pub use error::ApiError;
