//! Game version manifest types and local filtering.
//!
//! The manifest endpoint is consumed read-only; filtering by
//! release/snapshot flag and id substring happens entirely on the
//! client so the list reacts to typing without another fetch.

use serde::{Deserialize, Serialize};

/// Release channel of a manifest entry.
///
/// The manifest is an external feed, so unrecognized channel names map
/// to `Unknown` instead of failing the whole fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub enum VersionType {
    Release,
    Snapshot,
    OldBeta,
    OldAlpha,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct VersionEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub version_type: VersionType,
    pub url: String,
    pub time: String,
    #[serde(rename = "releaseTime")]
    pub release_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct LatestVersions {
    pub release: String,
    pub snapshot: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct VersionManifest {
    pub latest: LatestVersions,
    pub versions: Vec<VersionEntry>,
}

/// Filter manifest entries for display.
///
/// With `include_snapshots` off, only `Release` entries survive; old
/// betas and alphas are hidden either way unless snapshots are shown.
/// A blank or whitespace-only query matches everything; otherwise the
/// query is matched case-insensitively against the version id.
pub fn filter_versions(
    versions: &[VersionEntry],
    query: &str,
    include_snapshots: bool,
) -> Vec<VersionEntry> {
    let query = query.trim().to_lowercase();

    versions
        .iter()
        .filter(|v| include_snapshots || v.version_type == VersionType::Release)
        .filter(|v| query.is_empty() || v.id.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, version_type: VersionType) -> VersionEntry {
        VersionEntry {
            id: id.to_string(),
            version_type,
            url: format!("https://pistonmeta.example/v1/packages/{}.json", id),
            time: "2023-03-14T12:56:18+00:00".to_string(),
            release_time: "2023-03-14T12:56:18+00:00".to_string(),
        }
    }

    fn sample() -> Vec<VersionEntry> {
        vec![
            entry("1.20", VersionType::Release),
            entry("23w10a", VersionType::Snapshot),
        ]
    }

    #[test]
    fn test_filter_excludes_snapshots_by_default() {
        let filtered = filter_versions(&sample(), "", false);
        let ids: Vec<&str> = filtered.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1.20"]);
    }

    #[test]
    fn test_filter_query_matches_snapshot_id() {
        let filtered = filter_versions(&sample(), "23w", true);
        let ids: Vec<&str> = filtered.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["23w10a"]);
    }

    #[test]
    fn test_filter_query_is_case_insensitive() {
        let filtered = filter_versions(&sample(), "23W", true);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "23w10a");
    }

    #[test]
    fn test_filter_blank_query_keeps_everything() {
        let filtered = filter_versions(&sample(), "   ", true);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_parse_manifest_json() {
        let json = r#"{
            "latest": {"release": "1.20", "snapshot": "23w10a"},
            "versions": [
                {"id": "1.20", "type": "release", "url": "https://example/1.20.json",
                 "time": "2023-06-02T08:36:17+00:00", "releaseTime": "2023-06-02T08:36:17+00:00"},
                {"id": "23w10a", "type": "snapshot", "url": "https://example/23w10a.json",
                 "time": "2023-03-08T14:01:23+00:00", "releaseTime": "2023-03-08T14:01:23+00:00"},
                {"id": "b1.8", "type": "old_beta", "url": "https://example/b1.8.json",
                 "time": "2011-09-14T22:00:00+00:00", "releaseTime": "2011-09-14T22:00:00+00:00"}
            ]
        }"#;

        let manifest: VersionManifest = serde_json::from_str(json).expect("manifest should parse");
        assert_eq!(manifest.latest.release, "1.20");
        assert_eq!(manifest.versions.len(), 3);
        assert_eq!(manifest.versions[0].version_type, VersionType::Release);
        assert_eq!(manifest.versions[2].version_type, VersionType::OldBeta);
    }

    #[test]
    fn test_parse_unknown_version_type() {
        let json = r#"{"id": "x", "type": "experimental", "url": "u", "time": "t", "releaseTime": "r"}"#;
        let entry: VersionEntry = serde_json::from_str(json).expect("entry should parse");
        assert_eq!(entry.version_type, VersionType::Unknown);
    }
}
