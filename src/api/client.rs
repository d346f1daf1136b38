//! HTTP client for the versions-manifest endpoint.
//!
//! The manifest is the only thing this layer fetches itself; every
//! other remote interaction goes through the native backend.

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::models::VersionManifest;

use super::ApiError;

/// Published manifest of all game versions.
const MANIFEST_URL: &str = "https://launchermeta.mojang.com/mc/game/version_manifest.json";

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the read-only versions manifest.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct VersionsClient {
    client: Client,
}

impl VersionsClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch and parse the full version manifest.
    pub async fn fetch_manifest(&self) -> Result<VersionManifest> {
        let response = self
            .client
            .get(MANIFEST_URL)
            .send()
            .await
            .context("Failed to send version manifest request")?;

        let response = Self::check_response(response).await?;

        let manifest: VersionManifest = response
            .json()
            .await
            .context("Failed to parse version manifest")?;
        debug!(versions = manifest.versions.len(), "version manifest fetched");
        Ok(manifest)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }
}
