//! Provider scope and injected session handles.

use super::store::{Listener, SessionStore, Subscription};
use crate::domain::{Session, SessionState};
use crate::error::{ConfigResult, ConfigurationError};
use std::sync::{Arc, Weak};
use tracing::{info, warn};

/// Owner of the session store for the lifetime of the application.
///
/// Create one at the top of the application and hand out
/// [`SessionHandle`]s to the components that need the session. Dropping the
/// provider ends the scope: every handle it issued starts failing with
/// [`ConfigurationError::OutsideProvider`].
///
/// # Example
///
/// ```
/// use phone_signin::domain::{phone, Session};
/// use phone_signin::session::SessionProvider;
///
/// let provider = SessionProvider::new();
/// let handle = provider.handle();
///
/// handle.login(Session::new(phone::format("5551234567"))).unwrap();
/// let session = handle.current_session().unwrap().unwrap();
/// assert_eq!(session.phone_number.as_str(), "(555) 123-4567");
/// ```
pub struct SessionProvider {
    store: Arc<SessionStore>,
}

impl SessionProvider {
    /// Open a new provider scope in the logged-out state.
    pub fn new() -> Self {
        info!("session provider opened");
        Self {
            store: Arc::new(SessionStore::new()),
        }
    }

    /// Issue a handle bound to this provider.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            store: Arc::downgrade(&self.store),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.store.listener_count()
    }
}

impl Default for SessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SessionProvider {
    fn drop(&mut self) {
        info!("session provider closed");
    }
}

impl std::fmt::Debug for SessionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionProvider")
            .field("logged_in", &self.store.current().is_some())
            .field("subscribers", &self.store.listener_count())
            .finish()
    }
}

/// Access to the session of one provider scope.
///
/// Handles are cheap to clone and do not keep the provider alive. Every
/// operation fails fast with [`ConfigurationError::OutsideProvider`] when the
/// handle is unbound or its provider is gone; there is no fallback session.
#[derive(Clone, Default)]
pub struct SessionHandle {
    store: Weak<SessionStore>,
}

impl SessionHandle {
    /// A handle that belongs to no provider.
    ///
    /// Useful as a placeholder; every operation on it returns an error.
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Whether the handle currently points at a live provider.
    pub fn is_bound(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// Sign a user in, replacing any current session.
    ///
    /// No validation happens here; pass an already formatted number.
    pub fn login(&self, session: Session) -> ConfigResult<()> {
        self.store("login")?.login(session);
        Ok(())
    }

    /// Sign the current user out. Succeeds when nobody is signed in.
    pub fn logout(&self) -> ConfigResult<()> {
        self.store("logout")?.logout();
        Ok(())
    }

    /// The signed-in user, if any.
    pub fn current_session(&self) -> ConfigResult<Option<Session>> {
        Ok(self.store("current_session")?.current())
    }

    /// Current state as a [`SessionState`].
    pub fn state(&self) -> ConfigResult<SessionState> {
        Ok(self.store("state")?.current().into())
    }

    /// Register a listener called after every login and logout.
    ///
    /// The listener runs synchronously on the caller's thread once the state
    /// has been updated, with no store lock held.
    pub fn subscribe<F>(&self, listener: F) -> ConfigResult<Subscription>
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let store = self.store("subscribe")?;
        let listener: Listener = Arc::new(listener);
        let id = store.add_listener(listener);
        Ok(Subscription::new(id, &store))
    }

    fn store(&self, operation: &'static str) -> ConfigResult<Arc<SessionStore>> {
        self.store.upgrade().ok_or_else(|| {
            warn!(operation, "session handle used outside a provider");
            ConfigurationError::OutsideProvider { operation }
        })
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("bound", &self.is_bound())
            .finish()
    }
}
