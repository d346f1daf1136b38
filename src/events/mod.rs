//! Event bridge between the native backend and UI callbacks.
//!
//! The backend reports login outcomes and installation progress as
//! fire-and-forget events. This module provides:
//!
//! - `Channel`: the closed set of event channels
//! - `LauncherEvent`: a typed payload union, one shape per channel
//! - `EventHub`: the in-process dispatch point the backend emits into
//! - `subscribe` / `Subscription`: attach handlers to one or more
//!   channels and get back a single composite disposer
//!
//! Events on one channel are delivered in emission order; there is no
//! ordering guarantee across channels.

pub mod bridge;
pub mod hub;

use std::fmt;

use crate::models::Account;

pub use bridge::{subscribe, subscribe_install, EventHandler, Subscription};
pub use hub::{EventError, EventHub, ListenerId};

/// The channels the backend emits on. Closed set: adding a channel
/// means adding a variant here and a payload shape to
/// [`LauncherEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    LoginSuccess,
    LoginError,
    InstallStatus,
    InstallError,
}

impl Channel {
    /// Wire name of the channel, as the backend emits it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::LoginSuccess => "login-success",
            Channel::LoginError => "login-error",
            Channel::InstallStatus => "install-status",
            Channel::InstallError => "install-error",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A backend event with its channel-specific payload.
///
/// The payload union is keyed by channel: the variant determines which
/// channel the event is delivered on, so a handler registered on
/// `login-success` only ever sees `LoginSuccess` payloads.
#[derive(Debug, Clone)]
pub enum LauncherEvent {
    /// A login flow completed with a fresh credential bundle.
    LoginSuccess(Account),
    /// A login flow failed; the message is shown to the user.
    LoginError(String),
    /// Installation progress line for the status area.
    InstallStatus(String),
    /// Installation failed; the message is shown to the user.
    InstallError(String),
}

impl LauncherEvent {
    /// The channel this event is delivered on.
    pub fn channel(&self) -> Channel {
        match self {
            LauncherEvent::LoginSuccess(_) => Channel::LoginSuccess,
            LauncherEvent::LoginError(_) => Channel::LoginError,
            LauncherEvent::InstallStatus(_) => Channel::InstallStatus,
            LauncherEvent::InstallError(_) => Channel::InstallError,
        }
    }
}
