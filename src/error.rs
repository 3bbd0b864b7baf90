//! Error types for the phone sign-in flow.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Wiring and configuration mistakes.
///
/// These signal a programming defect (a session handle used without a live
/// provider) or a bad environment value, never a normal application state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Session accessor used outside an active provider scope
    #[error("{operation} must be used within a SessionProvider")]
    OutsideProvider { operation: &'static str },

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced by the screens when handling user events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Submit pressed while the phone input is invalid
    #[error("Submit is disabled until a valid phone number is entered")]
    SubmitDisabled,

    /// The screen's session handle is not wired to a provider
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Convenience type alias for Results with ConfigurationError
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigurationError::OutsideProvider { operation: "login" };
        assert_eq!(
            err.to_string(),
            "login must be used within a SessionProvider"
        );

        let err = ConfigurationError::InvalidValue {
            var: "PHONE_SIGNIN_LOCALE".to_string(),
            reason: "Must be one of: vi, en".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for PHONE_SIGNIN_LOCALE: Must be one of: vi, en"
        );

        let err = SessionError::SubmitDisabled;
        assert!(err.to_string().contains("valid phone number"));
    }

    #[test]
    fn test_configuration_error_converts() {
        let err: SessionError = ConfigurationError::OutsideProvider { operation: "logout" }.into();
        assert_eq!(err.to_string(), "logout must be used within a SessionProvider");
        assert!(matches!(
            err,
            SessionError::Configuration(ConfigurationError::OutsideProvider { .. })
        ));
    }
}
