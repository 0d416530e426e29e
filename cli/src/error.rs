#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use ipa_core::AppError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Generation failed inside the core library.
    #[display("{}", _0)]
    Core(AppError),

    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// The HTTP request for the document failed.
    #[from(ignore)]
    #[display("HTTP Error: {}", _0)]
    Http(String),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

impl From<CliError> for AppError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Core(inner) => inner,
            CliError::Io(inner) => AppError::Io(inner),
            other => AppError::Fetch(other.to_string()),
        }
    }
}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_keep_their_message() {
        let err = CliError::from(AppError::UnresolvedRef("#/definitions/Pet".into()));
        assert_eq!(err.to_string(), "Unresolved reference: #/definitions/Pet");
    }

    #[test]
    fn test_http_error_becomes_fetch_error() {
        let err: AppError = CliError::Http("status code 404".into()).into();
        assert!(matches!(err, AppError::Fetch(ref msg) if msg == "HTTP Error: status code 404"));
    }
}
