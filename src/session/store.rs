//! In-memory session store with change notification.
//!
//! The store holds at most one [`Session`] and a list of listeners. It is
//! never exposed directly; applications own it through a
//! [`SessionProvider`](super::SessionProvider) and reach it through
//! [`SessionHandle`](super::SessionHandle)s.

use crate::domain::{Session, SessionState};
use std::sync::{Arc, RwLock, Weak};
use tracing::debug;

/// Callback invoked with the new state after every login or logout.
pub type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Shared state behind a provider.
#[derive(Default)]
pub(crate) struct SessionStore {
    session: RwLock<Option<Session>>,
    listeners: RwLock<Listeners>,
}

impl SessionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replace the current session unconditionally and notify listeners.
    pub(crate) fn login(&self, session: Session) {
        debug!(phone_number = %session.phone_number, "session login");

        if let Ok(mut current) = self.session.write() {
            *current = Some(session.clone());
        }

        self.notify(&SessionState::LoggedIn(session));
    }

    /// Clear the current session unconditionally and notify listeners.
    pub(crate) fn logout(&self) {
        debug!("session logout");

        if let Ok(mut current) = self.session.write() {
            *current = None;
        }

        self.notify(&SessionState::LoggedOut);
    }

    pub(crate) fn current(&self) -> Option<Session> {
        match self.session.read() {
            Ok(current) => current.clone(),
            Err(_) => None,
        }
    }

    pub(crate) fn add_listener(&self, listener: Listener) -> u64 {
        match self.listeners.write() {
            Ok(mut listeners) => {
                let id = listeners.next_id;
                listeners.next_id += 1;
                listeners.entries.push((id, listener));
                debug!(subscription = id, total = listeners.entries.len(), "listener added");
                id
            }
            // Poisoned: the listener is never called, same as a dropped subscription.
            Err(_) => u64::MAX,
        }
    }

    pub(crate) fn remove_listener(&self, id: u64) {
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.entries.retain(|(entry_id, _)| *entry_id != id);
            debug!(subscription = id, total = listeners.entries.len(), "listener removed");
        }
    }

    pub(crate) fn listener_count(&self) -> usize {
        match self.listeners.read() {
            Ok(listeners) => listeners.entries.len(),
            Err(_) => 0,
        }
    }

    // Snapshot first so listeners run without any lock held and may call back in.
    fn notify(&self, state: &SessionState) {
        let snapshot: Vec<Listener> = match self.listeners.read() {
            Ok(listeners) => listeners
                .entries
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect(),
            Err(_) => return,
        };

        for listener in snapshot {
            listener(state);
        }
    }
}

/// Registration returned by `subscribe`.
///
/// The listener stays registered until this value is dropped or
/// [`unsubscribe`](Subscription::unsubscribe) is called. It does not keep the
/// store alive.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    store: Weak<SessionStore>,
}

impl Subscription {
    pub(crate) fn new(id: u64, store: &Arc<SessionStore>) -> Self {
        Self {
            id,
            store: Arc::downgrade(store),
        }
    }

    /// Remove the listener now.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.remove_listener(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("live", &(self.store.strong_count() > 0))
            .finish()
    }
}
