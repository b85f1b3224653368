//! Error types for the Menuboard plugin.
//!
//! [`MenuboardError`] is the crate-wide error and [`FetchError`] describes why a
//! backend request produced no usable data. Fetch failures are values, not
//! panics: the event handler receives them as `Result`s and decides what to
//! show instead.

use thiserror::Error;

/// Reasons a backend fetch produced no usable data.
///
/// Carried inside events, so it is `Clone + Eq` and stores decode failures as
/// rendered messages rather than the underlying `serde_json::Error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The backend answered with a non-success HTTP status.
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// The response body was not the JSON shape we expect.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The request never reached the backend (DNS, connection refused, TLS).
    #[error("request failed: {0}")]
    Transport(String),

    /// No response arrived before the request timer fired.
    #[error("request timed out")]
    Timeout,

    /// The user did not grant web access to the plugin.
    #[error("web access permission denied")]
    PermissionDenied,
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// The main error type for Menuboard operations.
#[derive(Debug, Error)]
pub enum MenuboardError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A backend request failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// A specialized `Result` type for Menuboard operations.
pub type Result<T> = std::result::Result<T, MenuboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_keep_the_serde_message() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let fetch: FetchError = err.into();
        assert!(matches!(fetch, FetchError::Decode(ref msg) if msg.contains("EOF")));
    }

    #[test]
    fn fetch_errors_wrap_into_crate_error() {
        let err: MenuboardError = FetchError::Status(503).into();
        assert_eq!(err.to_string(), "Fetch error: backend returned HTTP 503");
    }
}
