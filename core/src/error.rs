//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The document (or a fragment of it) did not match the expected OpenAPI shape.
    #[display("Invalid document: {_0}")]
    Json(serde_json::Error),

    /// Neither `swagger: "2.0"` nor `openapi: "3.x"` was found at the top level.
    #[from(ignore)]
    #[display("Unsupported OpenAPI version: {_0}. Only v2 and v3 are supported.")]
    UnsupportedVersion(String),

    /// A `$ref` that does not name a schema of the document.
    #[from(ignore)]
    #[display("Unresolved reference: {_0}")]
    UnresolvedRef(String),

    /// The document source could not deliver the document.
    #[from(ignore)]
    #[display("Fetch Error: {_0}")]
    Fetch(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String defaults to General, never to one of the ignored variants
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }

    #[test]
    fn test_display_messages() {
        let err = AppError::UnsupportedVersion("1.2".into());
        assert_eq!(
            err.to_string(),
            "Unsupported OpenAPI version: 1.2. Only v2 and v3 are supported."
        );

        let err = AppError::UnresolvedRef("#/components/schemas/Missing".into());
        assert_eq!(
            err.to_string(),
            "Unresolved reference: #/components/schemas/Missing"
        );
    }
}
