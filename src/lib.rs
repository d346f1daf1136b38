//! Core library for the Quarry launcher.
//!
//! This crate is the session and event layer between the launcher UI
//! and the native backend process:
//!
//! - `auth`: account session lifecycle (login, silent refresh,
//!   persistence, logout) over a single persisted credential slot
//! - `events`: typed event bridge relaying backend notifications
//!   (login outcomes, install progress) into UI callbacks, with a
//!   composite disposer for teardown
//! - `backend`: the async command surface the backend implements
//! - `api`: read-only versions-manifest fetch and local filtering
//! - `instances`: list/install/launch glue
//! - `nav`, `config`: navigation table and app configuration
//!
//! Everything runs on the UI's single-threaded cooperative event
//! loop; backend commands suspend without blocking it.

pub mod api;
pub mod auth;
pub mod backend;
pub mod config;
pub mod events;
pub mod instances;
pub mod models;
pub mod nav;

pub use api::{ApiError, VersionsClient};
pub use auth::{CredentialStore, SessionManager, SessionState};
pub use backend::{Backend, BackendError};
pub use config::Config;
pub use events::{
    subscribe, subscribe_install, Channel, EventHub, LauncherEvent, Subscription,
};
pub use models::{filter_versions, Account, VersionEntry, VersionManifest, VersionType};
pub use nav::{NavItem, NAV_ITEMS};
