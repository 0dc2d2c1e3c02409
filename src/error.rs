use miette::{Diagnostic, Result};
use rust_i18n::t;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Invalid time format: {0:?} (expected HH:MM)")]
    #[diagnostic(code(salon_admin::invalid_format))]
    InvalidFormat(String),

    #[error("Minutes out of range for a clock time: {0}")]
    #[diagnostic(code(salon_admin::out_of_range))]
    OutOfRange(u32),

    #[error("Invalid interval: start {start} must be before end {end}")]
    #[diagnostic(code(salon_admin::invalid_interval))]
    InvalidInterval { start: u32, end: u32 },

    #[error("HTTP error: {0}")]
    #[diagnostic(code(salon_admin::http))]
    Http(#[from] reqwest::Error),

    #[error("API error: HTTP {status} - {message}")]
    #[diagnostic(code(salon_admin::api))]
    Api { status: u16, message: String },

    #[error("Not signed in")]
    #[diagnostic(code(salon_admin::not_signed_in))]
    NotSignedIn,

    #[error("Session expired, please sign in again")]
    #[diagnostic(code(salon_admin::session_expired))]
    SessionExpired,

    #[error("Validation error: {0}")]
    #[diagnostic(code(salon_admin::validation))]
    Validation(#[from] ValidationError),

    #[error("Environment error: {0}")]
    #[diagnostic(code(salon_admin::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(salon_admin::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(salon_admin::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(salon_admin::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(salon_admin::other))]
    Other(String),
}

/// Form-level validation failures, surfaced to the user before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid e-mail address")]
    InvalidEmail,
    #[error("invalid phone number")]
    InvalidPhoneNumber,
    #[error("a deposit amount is required")]
    MissingDeposit,
    #[error("deposit {deposit} exceeds price {price}")]
    DepositExceedsPrice { deposit: u32, price: u32 },
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("access code must be six digits")]
    InvalidAccessCode,
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Config(format!("Invalid URL: {}", err))
    }
}

impl Error {
    /// HTTP status carried by the error, if it came from the API
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the error means the user has to sign in again
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::NotSignedIn | Error::SessionExpired) || self.status() == Some(401)
    }

    /// Localized message suitable for a transient notification
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(v) => v.user_message(),
            Error::InvalidFormat(_) | Error::OutOfRange(_) | Error::InvalidInterval { .. } => {
                t!("error.invalid_time").to_string()
            }
            Error::NotSignedIn | Error::SessionExpired => t!("error.session_expired").to_string(),
            _ => match self.status() {
                Some(401) => t!("error.session_expired").to_string(),
                Some(413) => t!("error.file_too_large").to_string(),
                _ => t!("error.generic").to_string(),
            },
        }
    }
}

impl ValidationError {
    /// Localized message for the validation failure
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingFields(_) => t!("error.required_fields").to_string(),
            ValidationError::InvalidEmail => t!("error.invalid_email").to_string(),
            ValidationError::InvalidPhoneNumber => t!("error.invalid_phone").to_string(),
            ValidationError::MissingDeposit => t!("error.missing_deposit").to_string(),
            ValidationError::DepositExceedsPrice { .. } => {
                t!("error.deposit_exceeds_price").to_string()
            }
            ValidationError::UnsupportedFileType(_) => t!("error.unsupported_file").to_string(),
            ValidationError::InvalidAccessCode => t!("error.invalid_access_code").to_string(),
        }
    }
}

/// Type alias for Result with our Error type
pub type AdminResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create API errors from a status and response body
pub fn api_error(status: u16, message: &str) -> Error {
    Error::Api {
        status,
        message: message.to_string(),
    }
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_unauthorized() {
        let err = api_error(401, "nope");
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());

        let err = api_error(500, "boom");
        assert!(!err.is_unauthorized());
        assert!(Error::SessionExpired.is_unauthorized());
        assert_eq!(Error::NotSignedIn.status(), None);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            api_error(413, "too big").user_message(),
            "The file is too large"
        );
        assert_eq!(
            api_error(500, "boom").user_message(),
            "Something went wrong, please contact support"
        );
        assert_eq!(
            Error::from(ValidationError::InvalidEmail).user_message(),
            "The e-mail address is not valid"
        );
    }

    #[test]
    fn test_missing_fields_display() {
        let err = ValidationError::MissingFields(vec!["name", "price"]);
        assert_eq!(err.to_string(), "missing required fields: name, price");
    }
}
