//! Account session lifecycle.
//!
//! `SessionManager` owns the session state machine:
//!
//! ```text
//! Unauthenticated ──start_login()──▶ AwaitingExternalLogin
//!        ▲                                │          │
//!        │◀──────────login-error──────────┘          │
//!        │                                     login-success
//!        │◀──logout()── Authenticated ◀──────────────┘
//!                            ▲
//!                            └── try_auto_login() on startup
//! ```
//!
//! The login flow itself is out-of-band: `start_login` only asks the
//! backend to begin, and the terminal outcome arrives later as a
//! `login-success` or `login-error` event. A flow terminates exactly
//! once - the first terminal event wins and later ones are ignored.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::backend::{Backend, BackendError};
use crate::events::{subscribe, Channel, EventHandler, EventHub, LauncherEvent, Subscription};
use crate::models::Account;

use super::CredentialStore;

/// Current session state, derived from manager operations only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No session; the login view is shown.
    Unauthenticated,
    /// A login flow was started and its outcome has not arrived yet.
    AwaitingExternalLogin,
    /// A credential bundle is live.
    Authenticated(Account),
}

/// Orchestrates login, refresh, auto-login and logout.
///
/// One instance exists for the lifetime of the app and is handed to UI
/// components explicitly; all writes to the credential store go
/// through it. State is shared with the event handlers registered by
/// [`attach_listeners`], which run on the same single-threaded UI
/// event loop as every other operation here.
///
/// A second `start_login` while one flow is pending is not guarded;
/// the UI disables re-invocation while in `AwaitingExternalLogin`.
///
/// [`attach_listeners`]: SessionManager::attach_listeners
pub struct SessionManager<B> {
    backend: B,
    store: Arc<CredentialStore>,
    state: Arc<Mutex<SessionState>>,
}

impl<B: Backend> SessionManager<B> {
    pub fn new(backend: B, store: CredentialStore) -> Self {
        Self {
            backend,
            store: Arc::new(store),
            state: Arc::new(Mutex::new(SessionState::Unauthenticated)),
        }
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.lock_state().clone()
    }

    /// The live account, if authenticated.
    pub fn current_account(&self) -> Option<Account> {
        match &*self.lock_state() {
            SessionState::Authenticated(account) => Some(account.clone()),
            _ => None,
        }
    }

    /// Ask the backend to begin an out-of-band login flow.
    ///
    /// Resolves once the request to begin is acknowledged - it does
    /// not wait for the flow to complete. A rejected start leaves the
    /// state untouched and surfaces the error to the caller.
    pub async fn start_login(&self) -> Result<(), BackendError> {
        self.backend.start_login().await?;
        *self.lock_state() = SessionState::AwaitingExternalLogin;
        info!("login flow started");
        Ok(())
    }

    /// Register the login outcome handlers on the hub.
    ///
    /// `on_success` / `on_error` are the UI callbacks. The success
    /// handler persists the bundle before notifying; the error handler
    /// never persists anything. Both apply only while a flow is open
    /// (`AwaitingExternalLogin`): the first terminal event closes the
    /// flow, so a duplicate or contradictory second event is ignored.
    ///
    /// Dispose the returned subscription when the owning view unmounts.
    pub fn attach_listeners<S, E>(&self, hub: &EventHub, on_success: S, on_error: E) -> Subscription
    where
        S: Fn(Account) + Send + Sync + 'static,
        E: Fn(String) + Send + Sync + 'static,
    {
        let state = Arc::clone(&self.state);
        let store = Arc::clone(&self.store);
        let success: EventHandler = Box::new(move |event| {
            if let LauncherEvent::LoginSuccess(account) = event {
                let mut state = lock(&state);
                if *state != SessionState::AwaitingExternalLogin {
                    debug!("ignoring login-success with no open flow");
                    return;
                }
                // The handler has no caller to report to; a failed
                // write still leaves a usable in-memory session and
                // the next startup falls back to logged-out.
                if let Err(e) = store.save(&account) {
                    warn!(error = %e, "failed to persist account");
                }
                *state = SessionState::Authenticated(account.clone());
                drop(state);
                info!(name = %account.name, "logged in");
                on_success(account);
            }
        });

        let state = Arc::clone(&self.state);
        let error: EventHandler = Box::new(move |event| {
            if let LauncherEvent::LoginError(message) = event {
                let mut state = lock(&state);
                if *state != SessionState::AwaitingExternalLogin {
                    debug!("ignoring login-error with no open flow");
                    return;
                }
                *state = SessionState::Unauthenticated;
                drop(state);
                warn!(message = %message, "login failed");
                on_error(message);
            }
        });

        subscribe(
            hub,
            vec![(Channel::LoginSuccess, success), (Channel::LoginError, error)],
        )
    }

    /// Exchange a refresh token for a fresh credential bundle.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Account, BackendError> {
        self.backend.refresh_login(refresh_token).await
    }

    /// Try to restore a session from the stored refresh token.
    ///
    /// An empty slot resolves to `Unauthenticated` without touching
    /// the network. Any refresh failure collapses to `None`: the store
    /// is cleared, the state falls back to `Unauthenticated` and the
    /// cause is only logged - a stale or revoked refresh token is an
    /// expected condition on startup, not an error.
    pub async fn try_auto_login(&self) -> Option<Account> {
        let Some(saved) = self.store.load() else {
            debug!("no stored account, skipping auto-login");
            *self.lock_state() = SessionState::Unauthenticated;
            return None;
        };

        match self.backend.refresh_login(&saved.refresh_token).await {
            Ok(account) => {
                if let Err(e) = self.store.save(&account) {
                    warn!(error = %e, "failed to persist refreshed account");
                }
                *self.lock_state() = SessionState::Authenticated(account.clone());
                info!(name = %account.name, "session restored");
                Some(account)
            }
            Err(e) => {
                warn!(error = %e, "auto-login failed, falling back to logged-out");
                if let Err(e) = self.store.clear() {
                    warn!(error = %e, "failed to clear stale account");
                }
                *self.lock_state() = SessionState::Unauthenticated;
                None
            }
        }
    }

    /// Drop the local session. Always succeeds; the backend is not
    /// notified - revocation, if any, is its concern.
    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear account on logout");
        }
        *self.lock_state() = SessionState::Unauthenticated;
        info!("logged out");
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        lock(&self.state)
    }
}

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    // Poisoning only means a handler panicked mid-transition; the
    // state value itself is still valid.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
