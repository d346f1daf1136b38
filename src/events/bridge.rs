//! Composite subscriptions over the event hub.
//!
//! A UI view typically listens on a pair of channels for the lifetime
//! of the view (login success + error, install status + error). The
//! bridge attaches all handlers at once and hands back a single
//! [`Subscription`] whose `dispose` releases every underlying
//! registration - including ones whose setup is still pending when the
//! view is torn down.

use futures::future::join_all;
use tokio::task::JoinHandle;
use tracing::warn;

use super::{Channel, EventHub, LauncherEvent, ListenerId};

/// Boxed handler for one channel of a composite subscription.
pub type EventHandler = Box<dyn Fn(LauncherEvent) + Send + Sync>;

/// Attach a handler to each `(channel, handler)` pair.
///
/// Each registration runs as its own task, so the composite disposer
/// is available immediately even while the underlying subscribe calls
/// are still pending.
pub fn subscribe(hub: &EventHub, pairs: Vec<(Channel, EventHandler)>) -> Subscription {
    let pending = pairs
        .into_iter()
        .map(|(channel, handler)| {
            let hub = hub.clone();
            let setup = tokio::spawn(async move { hub.listen(channel, handler).await });
            (channel, setup)
        })
        .collect();

    Subscription {
        hub: hub.clone(),
        pending,
    }
}

/// Attach the installation progress handlers.
///
/// `on_status` receives progress lines, `on_error` the failure message
/// if the install dies. Dispose the returned subscription when the
/// installations view unmounts.
pub fn subscribe_install<S, E>(hub: &EventHub, on_status: S, on_error: E) -> Subscription
where
    S: Fn(String) + Send + Sync + 'static,
    E: Fn(String) + Send + Sync + 'static,
{
    let status: EventHandler = Box::new(move |event| {
        if let LauncherEvent::InstallStatus(status) = event {
            on_status(status);
        }
    });
    let error: EventHandler = Box::new(move |event| {
        if let LauncherEvent::InstallError(message) = event {
            on_error(message);
        }
    });

    subscribe(
        hub,
        vec![
            (Channel::InstallStatus, status),
            (Channel::InstallError, error),
        ],
    )
}

/// Composite disposer for a batch of channel registrations.
///
/// Dropping a `Subscription` without calling [`dispose`] leaks the
/// listeners; teardown is an async operation and has to be awaited.
///
/// [`dispose`]: Subscription::dispose
pub struct Subscription {
    hub: EventHub,
    pending: Vec<(Channel, JoinHandle<ListenerId>)>,
}

impl Subscription {
    /// Release every underlying registration.
    ///
    /// Each channel's setup is awaited before its listener is removed,
    /// so disposing immediately after subscribing cannot leave a
    /// listener behind. Per-channel removal is best-effort: a failure
    /// is logged and the remaining channels are still released.
    pub async fn dispose(self) {
        let hub = self.hub;
        let teardowns = self.pending.into_iter().map(|(channel, setup)| {
            let hub = hub.clone();
            async move {
                match setup.await {
                    Ok(id) => {
                        if let Err(e) = hub.unlisten(channel, id).await {
                            warn!(%channel, error = %e, "failed to remove listener");
                        }
                    }
                    Err(e) => {
                        warn!(%channel, error = %e, "listener setup task failed");
                    }
                }
            }
        });

        join_all(teardowns).await;
    }

    /// Channels this subscription covers, in registration order.
    pub fn channels(&self) -> Vec<Channel> {
        self.pending.iter().map(|(channel, _)| *channel).collect()
    }
}
