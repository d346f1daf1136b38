//! Command surface of the native launcher backend.
//!
//! The backend process owns the actual OAuth flow, token exchange and
//! installation pipeline. This crate only issues requests against it
//! and consumes the events it pushes into the [`EventHub`]
//! (see the `events` module); everything behind the trait is someone
//! else's problem.
//!
//! All commands are request/acknowledge: `start_login` and
//! `install_instance` return as soon as the backend accepts the
//! request, with the actual outcome arriving later on an event
//! channel.
//!
//! [`EventHub`]: crate::events::EventHub

use thiserror::Error;

use crate::models::Account;

#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend refused to start or perform the requested command.
    #[error("backend rejected the request: {0}")]
    Rejected(String),

    /// The refresh token was not accepted during a token exchange.
    #[error("refresh token was not accepted")]
    InvalidToken,

    /// The backend could not be reached or died mid-request.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Async command surface of the native backend.
///
/// Implementations suspend the calling task; nothing here blocks the
/// UI event loop. There is no cancellation and no timeout at this
/// layer. A request that the backend never answers stays pending.
pub trait Backend: Send + Sync {
    /// Ask the backend to begin an out-of-band login flow (device code
    /// or browser authorization). Resolves once the request to begin
    /// is acknowledged; the flow itself terminates later with a
    /// `login-success` or `login-error` event.
    fn start_login(&self) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;

    /// Exchange a refresh token for a fresh credential bundle.
    fn refresh_login(
        &self,
        refresh_token: &str,
    ) -> impl std::future::Future<Output = Result<Account, BackendError>> + Send;

    /// Ordered list of installed instance names.
    fn list_instances(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, BackendError>> + Send;

    /// Kick off installation of a version into a named instance.
    /// Progress and failure arrive on the `install-status` and
    /// `install-error` channels.
    fn install_instance(
        &self,
        instance_name: &str,
        version_id: &str,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;

    /// Launch an installed instance under the given account.
    fn launch_instance(
        &self,
        instance_name: &str,
        account: &Account,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;
}
