#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Helpers for mapping local `$ref` pointers onto the named sections of a document.
//! External references (other files, URLs) are never followed.

use percent_encoding::percent_decode_str;

/// Pointer prefixes under which named schemas live (v3 first, then v2).
pub(crate) const SCHEMA_SECTIONS: &[&str] = &["#/components/schemas/", "#/definitions/"];

/// Pointer prefixes for reusable parameters.
pub(crate) const PARAMETER_SECTIONS: &[&str] = &["#/components/parameters/", "#/parameters/"];

/// Pointer prefixes for reusable request bodies.
pub(crate) const REQUEST_BODY_SECTIONS: &[&str] = &["#/components/requestBodies/"];

/// Extracts the schema name from `#/components/schemas/{name}` or `#/definitions/{name}`.
///
/// Returns `None` for external references and for pointers that reach deeper
/// than a single named entry.
pub fn schema_name(pointer: &str) -> Option<String> {
    component_name(pointer, SCHEMA_SECTIONS)
}

/// Extracts the entry name of a pointer that targets one of `sections`.
pub(crate) fn component_name(pointer: &str, sections: &[&str]) -> Option<String> {
    let rest = sections
        .iter()
        .find_map(|prefix| pointer.strip_prefix(prefix))?;

    if rest.is_empty() || rest.contains('/') {
        return None;
    }

    Some(decode_pointer_segment(rest))
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_name_v3() {
        assert_eq!(
            schema_name("#/components/schemas/User").as_deref(),
            Some("User")
        );
    }

    #[test]
    fn test_schema_name_v2() {
        assert_eq!(schema_name("#/definitions/Pet").as_deref(), Some("Pet"));
    }

    #[test]
    fn test_schema_name_rejects_external_and_nested() {
        assert!(schema_name("other.yaml#/components/schemas/User").is_none());
        assert!(schema_name("#/components/schemas/User/properties/id").is_none());
        assert!(schema_name("#/components/schemas/").is_none());
        assert!(schema_name("#/components/responses/NotFound").is_none());
    }

    #[test]
    fn test_component_name_parameters() {
        assert_eq!(
            component_name("#/parameters/limit", PARAMETER_SECTIONS).as_deref(),
            Some("limit")
        );
        assert!(component_name("#/definitions/limit", PARAMETER_SECTIONS).is_none());
    }

    #[test]
    fn test_decode_pointer_segment_percent_encoding() {
        let encoded = "User%20Profile~1details";
        let decoded = decode_pointer_segment(encoded);
        assert_eq!(decoded, "User Profile/details");
    }

    #[test]
    fn test_decoded_slash_is_part_of_the_name() {
        assert_eq!(
            schema_name("#/components/schemas/a~1b").as_deref(),
            Some("a/b")
        );
    }
}
