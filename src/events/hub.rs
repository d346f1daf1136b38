//! In-process event dispatch.
//!
//! `EventHub` is the seam between the backend's event system and this
//! crate: the backend side calls `emit`, UI-side code registers
//! handlers with `listen`. Delivery is synchronous on the emitting
//! task, in registration order per channel, so within one channel
//! events arrive in emission order. Handlers run on the UI event loop
//! and must not block it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

use super::{Channel, LauncherEvent};

/// Identifies one registered handler on one channel.
pub type ListenerId = u64;

type Handler = Arc<dyn Fn(LauncherEvent) + Send + Sync>;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("no listener {id} registered on {channel}")]
    UnknownListener { channel: Channel, id: ListenerId },
}

#[derive(Default)]
struct HubInner {
    next_id: ListenerId,
    listeners: HashMap<Channel, Vec<(ListenerId, Handler)>>,
}

/// Dispatch point for backend events.
///
/// Clone is cheap - the listener table is shared behind an `Arc`, so
/// clones observe the same registrations.
#[derive(Clone, Default)]
pub struct EventHub {
    inner: Arc<Mutex<HubInner>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler on a channel.
    ///
    /// Registration is asynchronous to mirror the backend's subscribe
    /// call; the returned id is what `unlisten` takes. Handlers on one
    /// channel are invoked in registration order.
    pub async fn listen<F>(&self, channel: Channel, handler: F) -> ListenerId
    where
        F: Fn(LauncherEvent) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner
            .listeners
            .entry(channel)
            .or_default()
            .push((id, Arc::new(handler)));
        tracing::debug!(%channel, id, "listener registered");
        id
    }

    /// Remove a previously registered handler.
    pub async fn unlisten(&self, channel: Channel, id: ListenerId) -> Result<(), EventError> {
        let mut inner = self.lock();
        let handlers = inner
            .listeners
            .get_mut(&channel)
            .ok_or(EventError::UnknownListener { channel, id })?;

        let before = handlers.len();
        handlers.retain(|(listener_id, _)| *listener_id != id);
        if handlers.len() == before {
            return Err(EventError::UnknownListener { channel, id });
        }
        tracing::debug!(%channel, id, "listener removed");
        Ok(())
    }

    /// Deliver an event to every handler on its channel, in
    /// registration order. Events for a channel with no listeners are
    /// dropped.
    ///
    /// The listener table is snapshotted before invoking anything, so
    /// a handler may itself subscribe or emit without deadlocking.
    pub fn emit(&self, event: LauncherEvent) {
        let channel = event.channel();
        let handlers: Vec<Handler> = {
            let inner = self.lock();
            inner
                .listeners
                .get(&channel)
                .map(|list| list.iter().map(|(_, h)| Arc::clone(h)).collect())
                .unwrap_or_default()
        };

        tracing::trace!(%channel, count = handlers.len(), "dispatching event");
        for handler in handlers {
            handler(event.clone());
        }
    }

    /// Number of handlers currently registered on a channel.
    pub fn listener_count(&self, channel: Channel) -> usize {
        self.lock()
            .listeners
            .get(&channel)
            .map(Vec::len)
            .unwrap_or(0)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HubInner> {
        // A poisoned lock only means a handler panicked; the table
        // itself is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(LauncherEvent) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let handler = move |event: LauncherEvent| {
            if let LauncherEvent::InstallStatus(status) = event {
                sink.lock().unwrap().push(status);
            }
        };
        (seen, handler)
    }

    #[tokio::test]
    async fn test_emit_delivers_in_emission_order() {
        let hub = EventHub::new();
        let (seen, handler) = recorder();
        hub.listen(Channel::InstallStatus, handler).await;

        hub.emit(LauncherEvent::InstallStatus("Fetching Manifest...".to_string()));
        hub.emit(LauncherEvent::InstallStatus("Downloading Client...".to_string()));

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["Fetching Manifest...", "Downloading Client..."]
        );
    }

    #[tokio::test]
    async fn test_emit_without_listeners_is_dropped() {
        let hub = EventHub::new();
        // No panic, no delivery.
        hub.emit(LauncherEvent::InstallError("boom".to_string()));
        assert_eq!(hub.listener_count(Channel::InstallError), 0);
    }

    #[tokio::test]
    async fn test_unlisten_removes_only_that_handler() {
        let hub = EventHub::new();
        let (seen_a, handler_a) = recorder();
        let (seen_b, handler_b) = recorder();
        let id_a = hub.listen(Channel::InstallStatus, handler_a).await;
        hub.listen(Channel::InstallStatus, handler_b).await;

        hub.unlisten(Channel::InstallStatus, id_a)
            .await
            .expect("listener should exist");
        hub.emit(LauncherEvent::InstallStatus("Unpacking...".to_string()));

        assert!(seen_a.lock().unwrap().is_empty());
        assert_eq!(*seen_b.lock().unwrap(), vec!["Unpacking..."]);
    }

    #[tokio::test]
    async fn test_unlisten_unknown_id_errors() {
        let hub = EventHub::new();
        let result = hub.unlisten(Channel::LoginError, 42).await;
        assert!(matches!(
            result,
            Err(EventError::UnknownListener { id: 42, .. })
        ));
    }

    #[tokio::test]
    async fn test_events_only_reach_their_channel() {
        let hub = EventHub::new();
        let (seen, handler) = recorder();
        hub.listen(Channel::InstallStatus, handler).await;

        hub.emit(LauncherEvent::InstallError("disk full".to_string()));

        assert!(seen.lock().unwrap().is_empty());
    }
}
