//! Session record and state.

use super::phone::PhoneNumber;
use serde::{Deserialize, Serialize};

/// The signed-in user.
///
/// Callers are expected to pass an already formatted number; the session
/// itself performs no validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub phone_number: PhoneNumber,
}

impl Session {
    pub fn new(phone_number: PhoneNumber) -> Self {
        Self { phone_number }
    }
}

/// Session state as seen by subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No user is signed in (initial state).
    #[default]
    LoggedOut,
    /// A user is signed in.
    LoggedIn(Session),
}

impl SessionState {
    /// The active session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn(session) => Some(session),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }
}

impl From<Option<Session>> for SessionState {
    fn from(session: Option<Session>) -> Self {
        match session {
            Some(session) => Self::LoggedIn(session),
            None => Self::LoggedOut,
        }
    }
}
