//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the parts of a person's
//! address: block, street, unit and postal code, plus the composed
//! [`Address`] and the plain [`Contact`] value. Every value object is
//! validated at construction time, so an invalid field can never be
//! represented.

pub mod address;
pub mod block;
pub mod contact;
pub mod errors;
pub mod postal_code;
pub mod street;
pub mod unit;

pub use address::Address;
pub use block::Block;
pub use contact::Contact;
pub use errors::ValidationError;
pub use postal_code::PostalCode;
pub use street::Street;
pub use unit::Unit;
