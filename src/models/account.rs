use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A logged-in account: identity plus token material.
///
/// The backend hands one of these out after a completed login flow or a
/// token refresh. At most one account is persisted at a time (see
/// `CredentialStore`); a partially populated record never exists. The
/// bundle is either fully present or absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Account {
    /// Opaque unique identifier for the account.
    pub uuid: String,
    /// Display name shown in the UI.
    pub name: String,
    /// Short-lived token used for launching instances.
    pub access_token: String,
    /// Long-lived token exchanged for a fresh bundle on startup.
    pub refresh_token: String,
    /// Absolute expiry of the access token, in epoch seconds.
    pub expires_at: i64,
}

impl Account {
    /// Whether the access token has passed its expiry timestamp.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_expired() {
        let mut account = Account {
            uuid: "a1b2".to_string(),
            name: "Steve".to_string(),
            access_token: "tok".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: Utc::now().timestamp() + 3600,
        };
        assert!(!account.is_expired());

        account.expires_at = Utc::now().timestamp() - 1;
        assert!(account.is_expired());
    }
}
