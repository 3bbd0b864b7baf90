//! Home screen.

use super::labels::{Labels, Locale};
use super::Route;
use crate::error::ConfigResult;
use crate::session::SessionHandle;
use tracing::info;

/// What the home screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeView {
    /// Greeting for the signed-in user, with a logout control.
    Welcome { phone_number: String },
    /// "Please sign in" prompt. The go-to-sign-in control is only offered
    /// right after an explicit logout from this screen.
    SignedOutPrompt { show_go_to_sign_in: bool },
}

/// State of the home screen.
#[derive(Debug)]
pub struct HomeScreen {
    session: SessionHandle,
    labels: &'static Labels,
    logged_out: bool,
}

impl HomeScreen {
    pub fn new(session: SessionHandle, locale: Locale) -> Self {
        Self {
            session,
            labels: locale.labels(),
            logged_out: false,
        }
    }

    pub fn title(&self) -> &'static str {
        self.labels.home_title
    }

    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    /// Render the current view from the session state.
    pub fn view(&self) -> ConfigResult<HomeView> {
        let session = self.session.current_session()?;

        let view = if self.logged_out {
            HomeView::SignedOutPrompt {
                show_go_to_sign_in: true,
            }
        } else if let Some(session) = session {
            HomeView::Welcome {
                phone_number: session.phone_number.into_inner(),
            }
        } else {
            HomeView::SignedOutPrompt {
                show_go_to_sign_in: false,
            }
        };

        Ok(view)
    }

    /// Main text line for the current view.
    pub fn message(&self) -> ConfigResult<String> {
        Ok(match self.view()? {
            HomeView::Welcome { phone_number } => self.labels.welcome(&phone_number),
            HomeView::SignedOutPrompt { .. } => self.labels.please_sign_in.to_string(),
        })
    }

    /// Logout-press event.
    pub fn logout(&mut self) -> ConfigResult<()> {
        self.session.logout()?;
        self.logged_out = true;
        info!("signed out from home screen");
        Ok(())
    }

    /// Go-to-sign-in press: reset back to the sign-in screen.
    pub fn go_to_sign_in(&mut self) -> Route {
        self.logged_out = false;
        Route::SignIn
    }
}
