//! Domain validation errors.

use std::fmt;

use super::{Address, Block, PostalCode, Street, Unit};

/// Errors that can occur during address field validation.
///
/// Each variant maps to a fixed, user-facing constraint message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The raw address did not split into exactly four fields.
    InvalidAddressFormat,

    /// The block field is invalid.
    InvalidBlock,

    /// The street field is invalid.
    InvalidStreet,

    /// The unit field is invalid.
    InvalidUnit,

    /// The postal code field is invalid.
    InvalidPostalCode,
}

impl ValidationError {
    /// The constraint message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidAddressFormat => Address::MESSAGE_ADDRESS_CONSTRAINTS,
            Self::InvalidBlock => Block::MESSAGE_CONSTRAINTS,
            Self::InvalidStreet => Street::MESSAGE_CONSTRAINTS,
            Self::InvalidUnit => Unit::MESSAGE_CONSTRAINTS,
            Self::InvalidPostalCode => PostalCode::MESSAGE_CONSTRAINTS,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}
