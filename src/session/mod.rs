//! Session state for the signed-in user.
//!
//! A [`SessionProvider`] owns the in-memory store for the application's
//! lifetime. Components get a [`SessionHandle`] injected at construction and
//! use it to log in, log out, read the current session, and subscribe to
//! changes.

mod provider;
mod store;

pub use provider::{SessionHandle, SessionProvider};
pub use store::{Listener, Subscription};
