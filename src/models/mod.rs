//! Data models for launcher entities.
//!
//! This module contains the data structures shared across the crate:
//!
//! - `Account`: identity and token bundle for a logged-in account
//! - `VersionManifest`, `VersionEntry`, `VersionType`: game version
//!   manifest types plus local filtering

pub mod account;
pub mod version;

pub use account::Account;
pub use version::{filter_versions, LatestVersions, VersionEntry, VersionManifest, VersionType};
