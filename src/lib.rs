//! Address Book Fields - validated value objects for structured addresses.
//!
//! An address is written as `BLOCK, STREET, UNIT, POSTAL CODE`. Each part is
//! a value object that can only be built from input matching its format, and
//! [`Address`] composes the four after checking them in order.
//!
//! # Architecture
//!
//! - **domain**: Block, Street, Unit, PostalCode, Address and Contact value objects
//! - **error**: Error types for configuration and checking runs
//! - **config**: Configuration for the checker from environment variables
//! - **checker**: Line-oriented address checking used by the `address-check` binary

pub mod checker;
pub mod config;
pub mod domain;
pub mod error;

pub use checker::{AddressChecker, AddressFields, CheckReport, CheckSummary};
pub use config::{Config, OutputFormat};
pub use domain::{Address, Block, Contact, PostalCode, Street, Unit, ValidationError};
pub use error::{CheckError, ConfigError};
