#![deny(missing_docs)]

//! Domain name casing helpers.

use heck::{ToKebabCase, ToUpperCamelCase};

/// `BookingService` -> `booking-service`. Used for output file names.
pub fn kebab_case(name: &str) -> String {
    name.to_kebab_case()
}

/// `booking-service` -> `BookingService`. Used for the exported type name.
pub fn pascal_case(name: &str) -> String {
    name.to_upper_camel_case()
}
