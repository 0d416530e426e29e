#![deny(missing_docs)]

//! # Document Fetching
//!
//! `DocumentSource` implementations for the CLI.
//!
//! Documents are accepted as JSON or YAML. JSON is tried first; YAML is the
//! fallback so that numeric keys like `200:` end up as strings.

use crate::error::{CliError, CliResult};
use ipa_core::{AppResult, DocumentSource};
use serde_json::Value;
use std::fs;
use tracing::debug;

/// Reads the document from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl DocumentSource for FileSource {
    fn fetch(&self, location: &str) -> AppResult<Value> {
        debug!(path = %location, "reading document");
        let text = fs::read_to_string(location)?;
        Ok(parse_document(&text)?)
    }
}

/// Downloads the document with a blocking GET request.
#[cfg(feature = "client")]
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpSource;

#[cfg(feature = "client")]
impl DocumentSource for HttpSource {
    fn fetch(&self, location: &str) -> AppResult<Value> {
        debug!(url = %location, "downloading document");
        let text = download(location)?;
        Ok(parse_document(&text)?)
    }
}

#[cfg(feature = "client")]
fn download(url: &str) -> CliResult<String> {
    let mut response = ureq::get(url)
        .call()
        .map_err(|e| CliError::Http(format!("{}: {}", url, e)))?;
    response
        .body_mut()
        .read_to_string()
        .map_err(|e| CliError::Http(format!("{}: {}", url, e)))
}

/// Picks HTTP for `http://` and `https://` locations and the filesystem otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoSource;

impl DocumentSource for AutoSource {
    fn fetch(&self, location: &str) -> AppResult<Value> {
        if is_remote(location) {
            fetch_remote(location)
        } else {
            FileSource.fetch(location)
        }
    }
}

#[cfg(feature = "client")]
fn fetch_remote(location: &str) -> AppResult<Value> {
    HttpSource.fetch(location)
}

#[cfg(not(feature = "client"))]
fn fetch_remote(location: &str) -> AppResult<Value> {
    Err(CliError::Http(format!("{}: built without the `client` feature", location)).into())
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Parses document text as JSON, falling back to YAML.
pub fn parse_document(text: &str) -> CliResult<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(text)
        .map_err(|e| CliError::General(format!("Document is neither JSON nor YAML: {}", e)))?;
    serde_json::to_value(yaml)
        .map_err(|e| CliError::General(format!("Failed to convert YAML document: {}", e)))
}
