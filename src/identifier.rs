//! The NBN identifier value type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::NbnError;
use crate::parser;

/// Scheme and namespace prefix every NBN carries.
pub const URN_NBN_PREFIX: &str = "urn:nbn:";

/// A parsed, checksum-verified NBN.
///
/// Wraps the canonical lowercase string `urn:nbn:<country>:<free-part><digit>`
/// and is immutable after construction. Only [`parse`](NbnIdentifier::parse)
/// and [`create`](NbnIdentifier::create) (or their free-function equivalents
/// in [`crate::parser`]) can build one, so holding an `NbnIdentifier` means
/// the grammar, alphabet and check digit have all been verified.
///
/// Equality, ordering, hashing and serialization are those of the canonical
/// string, which collaborators treat as an opaque key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NbnIdentifier {
    urn: String,
}

impl NbnIdentifier {
    /// Parse and verify a complete identifier (body plus check digit).
    pub fn parse(input: &str) -> Result<Self, NbnError> {
        parser::parse(input)
    }

    /// Mint an identifier from a body lacking its check digit.
    pub fn create(body: &str) -> Result<Self, NbnError> {
        parser::create(body)
    }

    /// The parser guarantees the invariants before calling this.
    pub(crate) fn from_canonical(urn: String) -> Self {
        Self { urn }
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.urn
    }

    /// Everything except the trailing check digit.
    pub fn body(&self) -> &str {
        &self.urn[..self.urn.len() - 1]
    }

    /// The trailing check digit (0-9).
    pub fn check_digit(&self) -> u8 {
        // Canonical form always ends in an ASCII digit
        self.urn.as_bytes()[self.urn.len() - 1] - b'0'
    }

    /// The country segment between `urn:nbn:` and the next colon, e.g.
    /// `"de"`. Empty when the body carries no further colon.
    pub fn country_code(&self) -> &str {
        let rest = &self.body()[URN_NBN_PREFIX.len()..];
        match rest.find(':') {
            Some(i) => &rest[..i],
            None => "",
        }
    }

    /// The namespace-specific part after the country segment, without the
    /// check digit. Empty when the body carries no further colon.
    pub fn free_part(&self) -> &str {
        let rest = &self.body()[URN_NBN_PREFIX.len()..];
        match rest.find(':') {
            Some(i) => &rest[i + 1..],
            None => "",
        }
    }
}

impl fmt::Display for NbnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.urn)
    }
}

impl FromStr for NbnIdentifier {
    type Err = NbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl TryFrom<String> for NbnIdentifier {
    type Error = NbnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parser::parse(&value)
    }
}

impl From<NbnIdentifier> for String {
    fn from(id: NbnIdentifier) -> Self {
        id.urn
    }
}

impl AsRef<str> for NbnIdentifier {
    fn as_ref(&self) -> &str {
        &self.urn
    }
}
