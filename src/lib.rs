//! Phone sign-in - phone-number validation, formatting, and an in-memory session.
//!
//! # Architecture
//!
//! - **domain**: Phone number rules, the canonical `PhoneNumber`, and the `Session` record
//! - **session**: Provider-scoped session store with login/logout and subscriptions
//! - **screens**: View-models for the sign-in and home screens
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod screens;
pub mod session;

pub use config::Config;
pub use domain::{phone, PhoneNumber, Session, SessionState};
pub use error::{ConfigurationError, SessionError};
pub use screens::{HomeScreen, HomeView, Labels, Locale, Route, SignInScreen};
pub use session::{SessionHandle, SessionProvider, Subscription};
