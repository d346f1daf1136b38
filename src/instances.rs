//! Instance operations: list, install, launch.
//!
//! Thin glue over the backend command surface. Installation is
//! acknowledge-only - progress and failure arrive on the
//! `install-status` / `install-error` channels.

use tracing::warn;

use crate::backend::{Backend, BackendError};
use crate::models::Account;

/// Installed instance names, in backend order.
///
/// A backend failure here degrades to an empty list so the play view
/// still renders; the cause is only logged.
pub async fn list_instances<B: Backend>(backend: &B) -> Vec<String> {
    match backend.list_instances().await {
        Ok(instances) => instances,
        Err(e) => {
            warn!(error = %e, "failed to list instances");
            Vec::new()
        }
    }
}

/// Ask the backend to install `version_id` into a named instance.
pub async fn install_instance<B: Backend>(
    backend: &B,
    instance_name: &str,
    version_id: &str,
) -> Result<(), BackendError> {
    backend.install_instance(instance_name, version_id).await
}

/// Launch an installed instance under the given account.
pub async fn launch_instance<B: Backend>(
    backend: &B,
    instance_name: &str,
    account: &Account,
) -> Result<(), BackendError> {
    backend.launch_instance(instance_name, account).await
}

/// Default instance name for a freshly installed version.
pub fn install_instance_name(version_id: &str) -> String {
    format!("Instance-{version_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend whose every command fails.
    struct DeadBackend;

    impl Backend for DeadBackend {
        async fn start_login(&self) -> Result<(), BackendError> {
            Err(BackendError::Unavailable("gone".to_string()))
        }

        async fn refresh_login(&self, _refresh_token: &str) -> Result<Account, BackendError> {
            Err(BackendError::Unavailable("gone".to_string()))
        }

        async fn list_instances(&self) -> Result<Vec<String>, BackendError> {
            Err(BackendError::Unavailable("gone".to_string()))
        }

        async fn install_instance(
            &self,
            _instance_name: &str,
            _version_id: &str,
        ) -> Result<(), BackendError> {
            Err(BackendError::Rejected("unknown version".to_string()))
        }

        async fn launch_instance(
            &self,
            _instance_name: &str,
            _account: &Account,
        ) -> Result<(), BackendError> {
            Err(BackendError::Unavailable("gone".to_string()))
        }
    }

    #[tokio::test]
    async fn test_list_instances_degrades_to_empty() {
        assert!(list_instances(&DeadBackend).await.is_empty());
    }

    #[tokio::test]
    async fn test_install_failure_surfaces_to_caller() {
        let result = install_instance(&DeadBackend, "Instance-1.20", "1.20").await;
        assert!(matches!(result, Err(BackendError::Rejected(_))));
    }

    #[test]
    fn test_install_instance_name() {
        assert_eq!(install_instance_name("1.20"), "Instance-1.20");
        assert_eq!(install_instance_name("23w10a"), "Instance-23w10a");
    }
}
