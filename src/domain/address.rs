//! Address value object.
//!
//! An address is written as `BLOCK, STREET, UNIT, POSTAL CODE`. Parsing
//! splits on commas, trims each field and validates the fields in order,
//! stopping at the first one that fails.

use super::errors::ValidationError;
use super::{Block, PostalCode, Street, Unit};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::{debug, trace};

const ADDRESS_FIELD_COUNT: usize = 4;

/// A person's address, composed of four validated fields.
///
/// Equality and hashing use the raw input string only, so two addresses
/// that differ only in whitespace are not equal.
///
/// # Example
///
/// ```
/// use address_book_fields::domain::Address;
///
/// let address = Address::parse("123, some street, #01-01, 520000", false).unwrap();
/// assert_eq!(address.block().as_str(), "123");
/// assert_eq!(address.street().as_str(), "some street");
/// assert_eq!(address.unit().as_str(), "#01-01");
/// assert_eq!(address.postal_code().as_str(), "520000");
/// assert!(!address.is_private());
/// ```
#[derive(Debug, Clone)]
pub struct Address {
    value: String,
    is_private: bool,
    block: Block,
    street: Street,
    unit: Unit,
    postal_code: PostalCode,
}

/// The four trimmed tokens of a raw address, not yet validated.
struct AddressTokens<'a> {
    block: &'a str,
    street: &'a str,
    unit: &'a str,
    postal_code: &'a str,
}

impl<'a> AddressTokens<'a> {
    fn split(raw: &'a str) -> Result<Self, ValidationError> {
        let tokens: Vec<&str> = raw.split(',').map(str::trim).collect();

        match tokens.as_slice() {
            &[block, street, unit, postal_code] => Ok(Self {
                block,
                street,
                unit,
                postal_code,
            }),
            _ => {
                debug!(
                    found = tokens.len(),
                    expected = ADDRESS_FIELD_COUNT,
                    "Address has wrong number of fields"
                );
                Err(ValidationError::InvalidAddressFormat)
            }
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !Block::is_valid(self.block) {
            return Err(ValidationError::InvalidBlock);
        }
        if !Street::is_valid(self.street) {
            return Err(ValidationError::InvalidStreet);
        }
        if !Unit::is_valid(self.unit) {
            return Err(ValidationError::InvalidUnit);
        }
        if !PostalCode::is_valid(self.postal_code) {
            return Err(ValidationError::InvalidPostalCode);
        }
        Ok(())
    }
}

impl Address {
    /// A well-formed address, suitable for usage hints.
    pub const EXAMPLE: &'static str = "123, some street, #01-01, 520000";

    pub const MESSAGE_ADDRESS_CONSTRAINTS: &'static str =
        "Person addresses should be in the format of BLOCK, STREET, UNIT, POSTAL CODE";

    /// Parse a raw address string.
    ///
    /// The input is split on every `,`, so empty fields count (a trailing
    /// comma makes a fifth field). Each field is trimmed of Unicode
    /// whitespace as defined by [`char::is_whitespace`] before it is
    /// validated; the raw string is stored untouched.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidAddressFormat` if `raw` does not have exactly
    ///   four comma-separated fields. Checked before any field.
    /// - Otherwise the error of the first invalid field, in the order block,
    ///   street, unit, postal code.
    pub fn parse(raw: impl Into<String>, is_private: bool) -> Result<Self, ValidationError> {
        let value = raw.into();
        let tokens = AddressTokens::split(&value)?;

        let block = Block::new(tokens.block).map_err(|e| log_rejected(&value, e))?;
        let street = Street::new(tokens.street).map_err(|e| log_rejected(&value, e))?;
        let unit = Unit::new(tokens.unit).map_err(|e| log_rejected(&value, e))?;
        let postal_code =
            PostalCode::new(tokens.postal_code).map_err(|e| log_rejected(&value, e))?;

        trace!(address = %value, is_private, "Parsed address");

        Ok(Self {
            value,
            is_private,
            block,
            street,
            unit,
            postal_code,
        })
    }

    /// Check a raw address without building it.
    ///
    /// Reports the same error `parse` would.
    pub fn validate(raw: &str) -> Result<(), ValidationError> {
        AddressTokens::split(raw)?.validate()
    }

    /// Returns true if `raw` would parse successfully.
    pub fn is_valid_address(raw: &str) -> bool {
        Self::validate(raw).is_ok()
    }

    /// The raw address as given to `parse`.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn street(&self) -> &Street {
        &self.street
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }
}

fn log_rejected(raw: &str, err: ValidationError) -> ValidationError {
    debug!(address = %raw, error = %err, "Rejected address field");
    err
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl FromStr for Address {
    type Err = ValidationError;

    /// Parses a public address.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, false)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Wire form of an address: the raw string plus the privacy flag.
#[derive(Serialize, Deserialize)]
struct AddressRepr<S> {
    value: S,
    #[serde(default)]
    is_private: bool,
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        AddressRepr {
            value: self.value.as_str(),
            is_private: self.is_private,
        }
        .serialize(serializer)
    }
}

// Serde support - deserialize through `parse` so invalid input is rejected
impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = AddressRepr::<String>::deserialize(deserializer)?;
        Address::parse(repr.value, repr.is_private).map_err(serde::de::Error::custom)
    }
}
