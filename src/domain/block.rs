//! Block value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static BLOCK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+[A-Za-z]?$").expect("Failed to compile block regex"));

/// A person's block number, e.g. `123` or `123A`.
///
/// # Example
///
/// ```
/// use address_book_fields::domain::Block;
///
/// let block = Block::new("123A").unwrap();
/// assert_eq!(block.number(), "123");
/// assert_eq!(block.suffix(), Some('A'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block(String);

impl Block {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Block should be either numbers only or numbers with a single alphabet at the back";

    /// Create a new Block, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - One or more ASCII digits
    /// - Optionally followed by exactly one ASCII letter
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBlock` if the block is invalid.
    pub fn new(block: impl Into<String>) -> Result<Self, ValidationError> {
        let block = block.into();

        if !Self::is_valid(&block) {
            return Err(ValidationError::InvalidBlock);
        }

        Ok(Self(block))
    }

    /// Returns true if `block` is a valid block.
    pub fn is_valid(block: &str) -> bool {
        BLOCK_REGEX.is_match(block)
    }

    /// Get the block as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The numeric part of the block.
    pub fn number(&self) -> &str {
        self.0.trim_end_matches(|c: char| c.is_ascii_alphabetic())
    }

    /// The trailing letter, if any.
    pub fn suffix(&self) -> Option<char> {
        self.0.chars().last().filter(|c| c.is_ascii_alphabetic())
    }
}

// Serde support - serialize as string
impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Block::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
