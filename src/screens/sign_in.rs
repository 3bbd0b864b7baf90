//! Sign-in screen.

use super::labels::{Labels, Locale};
use super::Route;
use crate::domain::{phone, Session};
use crate::error::{SessionError, SessionResult};
use crate::session::SessionHandle;
use tracing::{debug, info};

/// State of the phone-number sign-in form.
///
/// The input is validated on every change for live feedback, but the value
/// stored in the session is the formatted one.
#[derive(Debug)]
pub struct SignInScreen {
    session: SessionHandle,
    labels: &'static Labels,
    input: String,
}

impl SignInScreen {
    pub fn new(session: SessionHandle, locale: Locale) -> Self {
        Self {
            session,
            labels: locale.labels(),
            input: String::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.labels.sign_in_title
    }

    pub fn placeholder(&self) -> &'static str {
        self.labels.phone_placeholder
    }

    pub fn submit_label(&self) -> &'static str {
        self.labels.submit
    }

    /// Raw text currently in the phone field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text-change event.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        debug!(valid = self.is_valid(), "phone input changed");
    }

    pub fn is_valid(&self) -> bool {
        phone::is_valid(&self.input)
    }

    pub fn submit_enabled(&self) -> bool {
        self.is_valid()
    }

    /// "Valid"/"invalid" text shown under the field.
    pub fn validation_label(&self) -> &'static str {
        if self.is_valid() {
            self.labels.valid
        } else {
            self.labels.invalid
        }
    }

    /// Submit-press event.
    ///
    /// Formats the input, signs the user in, and routes to the home screen.
    /// Fails with [`SessionError::SubmitDisabled`] while the input is invalid,
    /// leaving the session untouched.
    pub fn submit(&mut self) -> SessionResult<Route> {
        if !self.submit_enabled() {
            return Err(SessionError::SubmitDisabled);
        }

        let phone_number = phone::format(&self.input);
        info!(%phone_number, "signing in");
        self.session.login(Session::new(phone_number))?;

        Ok(Route::Home)
    }
}
