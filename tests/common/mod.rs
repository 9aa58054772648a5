//! Shared fixtures for integration tests.

#![allow(dead_code)]

pub const VALID_BLOCKS: [&str; 4] = ["1", "123", "123A", "99z"];
pub const VALID_STREETS: [&str; 3] = ["some street", "Jurong West St 42", "x"];
pub const VALID_UNITS: [&str; 3] = ["#01-01", "#12-34", "#3-456"];
pub const VALID_POSTAL_CODES: [&str; 3] = ["520000", "0", "123456789"];

/// Join four fields into a raw address with the usual `", "` separator.
pub fn raw_address(block: &str, street: &str, unit: &str, postal_code: &str) -> String {
    format!("{}, {}, {}, {}", block, street, unit, postal_code)
}
