//! View-models for the sign-in and home screens.
//!
//! Screens hold per-screen UI state and translate user events into calls on
//! the phone rules and the injected [`SessionHandle`](crate::session::SessionHandle).
//! Layout and navigation belong to the caller: event handlers return a
//! [`Route`] saying which screen should be shown next.

pub mod home;
pub mod labels;
pub mod sign_in;

pub use home::{HomeScreen, HomeView};
pub use labels::{Labels, Locale};
pub use sign_in::SignInScreen;

/// Screen the caller should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
    Home,
}
