//! Contact value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A free-form piece of contact information with a privacy flag.
///
/// Unlike the address fields this is not validated. Equality and hashing
/// use the value only; the privacy flag is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    value: String,
    #[serde(default)]
    is_private: bool,
}

impl Contact {
    pub fn new(value: impl Into<String>, is_private: bool) -> Self {
        Self {
            value: value.into(),
            is_private,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_contact_default_is_empty_and_public() {
        let contact = Contact::default();
        assert_eq!(contact.value(), "");
        assert!(!contact.is_private());
    }

    #[test]
    fn test_contact_equality_ignores_privacy() {
        let a = Contact::new("91234567", true);
        let b = Contact::new("91234567", false);
        assert_eq!(a, b);

        let set: HashSet<Contact> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_ne!(Contact::new("1", false), Contact::new("2", false));
    }

    #[test]
    fn test_contact_deserialization_defaults_privacy() {
        let contact: Contact = serde_json::from_str(r#"{"value": "a@b.c"}"#).unwrap();
        assert_eq!(contact.to_string(), "a@b.c");
        assert!(!contact.is_private());
    }
}
