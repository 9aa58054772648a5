//! Street value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A person's street name.
///
/// Any text is accepted as long as it is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Street(String);

impl Street {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Street should not be blank";

    /// Create a new Street, rejecting blank input.
    ///
    /// The value is stored as given; surrounding whitespace is kept.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidStreet` if the street is blank.
    pub fn new(street: impl Into<String>) -> Result<Self, ValidationError> {
        let street = street.into();

        if !Self::is_valid(&street) {
            return Err(ValidationError::InvalidStreet);
        }

        Ok(Self(street))
    }

    /// Returns true if `street` contains anything besides whitespace.
    pub fn is_valid(street: &str) -> bool {
        !street.trim().is_empty()
    }

    /// Get the street as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Street {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Street {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Street::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_valid() {
        let street = Street::new("some street").unwrap();
        assert_eq!(street.as_str(), "some street");
        assert!(Street::new("Jurong West St. 42").is_ok());
        assert!(Street::new("x").is_ok());
    }

    #[test]
    fn test_street_rejects_blank() {
        assert_eq!(Street::new(""), Err(ValidationError::InvalidStreet));
        assert_eq!(Street::new("   "), Err(ValidationError::InvalidStreet));
        assert_eq!(Street::new("\t\n"), Err(ValidationError::InvalidStreet));
    }

    #[test]
    fn test_street_keeps_value_verbatim() {
        let street = Street::new("  padded  ").unwrap();
        assert_eq!(street.as_str(), "  padded  ");
    }

    #[test]
    fn test_street_display() {
        let street = Street::new("Orchard Road").unwrap();
        assert_eq!(format!("{}", street), "Orchard Road");
    }
}
