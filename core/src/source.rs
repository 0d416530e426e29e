#![deny(missing_docs)]

//! # Document Sources
//!
//! Defines the `DocumentSource` trait used to obtain the raw OpenAPI document
//! before generation. The core crate performs no I/O itself; transports (HTTP,
//! filesystem) are implemented by callers.

use crate::error::AppResult;
use serde_json::Value;

/// Provides the raw JSON value of an OpenAPI document.
pub trait DocumentSource {
    /// Fetches and decodes the document found at `location`.
    ///
    /// # Arguments
    ///
    /// * `location` - A URL, file path or any key the implementation understands.
    fn fetch(&self, location: &str) -> AppResult<Value>;
}

/// A source serving one in-memory document regardless of location.
#[derive(Debug, Clone)]
pub struct StaticSource(pub Value);

impl DocumentSource for StaticSource {
    fn fetch(&self, _location: &str) -> AppResult<Value> {
        Ok(self.0.clone())
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn fetch(&self, location: &str) -> AppResult<Value> {
        (**self).fetch(location)
    }
}
