//! Persisted account slot.
//!
//! Exactly one serialized [`Account`] lives under a well-known file in
//! the app data directory. The slot is written only by the session
//! manager; anything unreadable or malformed in it is treated as "no
//! stored account" and wiped, never surfaced as an error.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use crate::models::Account;

/// Account file name in the store directory.
const ACCOUNT_FILE: &str = "account.json";

pub struct CredentialStore {
    dir: PathBuf,
}

impl CredentialStore {
    /// Store rooted at an explicit directory. The directory is created
    /// lazily on the first `save`.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the default per-user data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(crate::config::data_dir()?))
    }

    /// Serialize and write the account, overwriting any prior value.
    pub fn save(&self, account: &Account) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create store directory {}", self.dir.display()))?;
        let contents =
            serde_json::to_string_pretty(account).context("Failed to serialize account")?;
        std::fs::write(self.account_path(), contents).context("Failed to write account file")?;
        Ok(())
    }

    /// The stored account, if one is present and structurally valid.
    ///
    /// Unreadable or malformed content is logged, the slot is cleared,
    /// and `None` is returned - a corrupt record must behave exactly
    /// like an absent one.
    pub fn load(&self) -> Option<Account> {
        let path = self.account_path();
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "stored account unreadable, clearing");
                self.clear_logged();
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(account) => Some(account),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "stored account malformed, clearing");
                self.clear_logged();
                None
            }
        }
    }

    /// Remove the slot. Clearing an already-empty slot is a no-op.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(self.account_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("Failed to remove account file"),
        }
    }

    fn clear_logged(&self) {
        if let Err(e) = self.clear() {
            warn!(error = %e, "failed to clear account slot");
        }
    }

    fn account_path(&self) -> PathBuf {
        self.dir.join(ACCOUNT_FILE)
    }
}
