//! Domain error types
//!
//! These errors are framework-agnostic and represent rejected-input
//! outcomes, not process failures. Callers branch on the variant instead
//! of parsing a message string.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NbnError {
    /// Input lacks the `urn:nbn:` prefix, has nothing after it, or does
    /// not end in a decimal digit
    Malformed,
    /// A character outside the NBN alphabet, with its 1-based position
    InvalidCharacter { character: char, position: usize },
    /// The check-digit formula's divisor is zero; the identifier can be
    /// neither validated nor created
    DegenerateChecksum,
    /// The claimed check digit disagrees with the computed one
    ChecksumMismatch { expected: u8, actual: u8 },
}

impl fmt::Display for NbnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NbnError::Malformed => {
                write!(f, "Not a well-formed urn:nbn identifier")
            }
            NbnError::InvalidCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Invalid character '{}' at position {}",
                    character, position
                )
            }
            NbnError::DegenerateChecksum => {
                write!(f, "Check digit is undefined for this identifier")
            }
            NbnError::ChecksumMismatch { expected, actual } => {
                write!(
                    f,
                    "Check digit mismatch: expected {}, found {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for NbnError {}
