//! PostalCode value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static POSTAL_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Failed to compile postal code regex"));

/// A person's postal code. Digits only.
///
/// # Example
///
/// ```
/// use address_book_fields::domain::PostalCode;
///
/// assert!(PostalCode::new("520000").is_ok());
/// assert!(PostalCode::new("52A000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Postal code should only contain numbers";

    /// Create a new PostalCode, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPostalCode` unless the code is one or
    /// more ASCII digits.
    pub fn new(postal_code: impl Into<String>) -> Result<Self, ValidationError> {
        let postal_code = postal_code.into();

        if !Self::is_valid(&postal_code) {
            return Err(ValidationError::InvalidPostalCode);
        }

        Ok(Self(postal_code))
    }

    /// Returns true if `postal_code` is a valid postal code.
    pub fn is_valid(postal_code: &str) -> bool {
        POSTAL_CODE_REGEX.is_match(postal_code)
    }

    /// Get the postal code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PostalCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PostalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PostalCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
