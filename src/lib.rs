//! National Bibliography Number (NBN) identifiers.
//!
//! Parses, validates and mints `urn:nbn:<country>:<free-part>` identifiers
//! with their trailing check digit. Registration and resolution of NBNs are
//! handled elsewhere; this crate only guarantees that an [`NbnIdentifier`]
//! is grammatically valid and checksum-consistent.

pub mod alphabet;
pub mod checksum;
pub mod domain;
pub mod identifier;
pub mod parser;

pub use domain::errors::NbnError;
pub use identifier::{NbnIdentifier, URN_NBN_PREFIX};
pub use parser::{create, is_valid, parse};
