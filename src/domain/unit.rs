//! Unit value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static UNIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9]+)-([0-9]+)$").expect("Failed to compile unit regex"));

/// A person's unit number in the form `#<floor>-<apartment>`.
///
/// # Example
///
/// ```
/// use address_book_fields::domain::Unit;
///
/// let unit = Unit::new("#12-34").unwrap();
/// assert_eq!(unit.floor(), "12");
/// assert_eq!(unit.apartment(), "34");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unit(String);

impl Unit {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Unit number should begin with a hash, \
        followed by floor number, followed by a hyphen, followed by apartment number";

    /// Create a new Unit, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidUnit` if the unit is not `#<digits>-<digits>`.
    pub fn new(unit: impl Into<String>) -> Result<Self, ValidationError> {
        let unit = unit.into();

        if !Self::is_valid(&unit) {
            return Err(ValidationError::InvalidUnit);
        }

        Ok(Self(unit))
    }

    /// Returns true if `unit` is a valid unit number.
    pub fn is_valid(unit: &str) -> bool {
        UNIT_REGEX.is_match(unit)
    }

    /// Get the unit as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The floor number (between `#` and `-`).
    pub fn floor(&self) -> &str {
        self.parts().0
    }

    /// The apartment number (after `-`).
    pub fn apartment(&self) -> &str {
        self.parts().1
    }

    fn parts(&self) -> (&str, &str) {
        // Constructor guarantees the `#<digits>-<digits>` shape
        let rest = &self.0[1..];
        rest.split_once('-').unwrap_or((rest, ""))
    }
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Unit::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
