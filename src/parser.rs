//! Grammar and alphabet validation for NBN strings.
//!
//! A single linear pipeline: case-fold, check the `urn:nbn:` grammar,
//! validate the alphabet, then verify or compute the check digit. There is
//! no partial parse; either every step passes and an [`NbnIdentifier`]
//! comes out, or the first failing step's error is returned.

use crate::checksum;
use crate::domain::errors::NbnError;
use crate::identifier::{NbnIdentifier, URN_NBN_PREFIX};

/// Parse and verify a complete identifier string (body plus check digit).
///
/// Uppercase input is folded to lowercase before validation, so the
/// returned identifier's string form is lowercase even when the input was
/// not.
pub fn parse(input: &str) -> Result<NbnIdentifier, NbnError> {
    let urn = input.to_lowercase();

    if !urn.starts_with(URN_NBN_PREFIX) || urn.len() == URN_NBN_PREFIX.len() {
        return Err(NbnError::Malformed);
    }

    // The last character must be the check digit
    let claimed = match urn.as_bytes()[urn.len() - 1] {
        b @ b'0'..=b'9' => b - b'0',
        _ => return Err(NbnError::Malformed),
    };

    let body = &urn[..urn.len() - 1];
    validate_alphabet(body)?;

    let expected = checksum::compute(body)?;
    if expected != claimed {
        return Err(NbnError::ChecksumMismatch {
            expected,
            actual: claimed,
        });
    }

    Ok(NbnIdentifier::from_canonical(urn))
}

/// Mint an identifier from a body lacking its check digit.
///
/// The body must already carry the `urn:nbn:` prefix; the computed digit is
/// appended to form the canonical string.
pub fn create(body: &str) -> Result<NbnIdentifier, NbnError> {
    let mut urn = body.to_lowercase();

    if !urn.starts_with(URN_NBN_PREFIX) || urn.len() == URN_NBN_PREFIX.len() {
        return Err(NbnError::Malformed);
    }

    validate_alphabet(&urn)?;
    let digit = checksum::compute(&urn)?;

    urn.push(char::from(b'0' + digit));
    Ok(NbnIdentifier::from_canonical(urn))
}

/// Non-throwing convenience entry point: `parse` collapsed to a boolean.
pub fn is_valid(input: &str) -> bool {
    match parse(input) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!("Rejected NBN '{}': {}", input, e);
            false
        }
    }
}

fn validate_alphabet(body: &str) -> Result<(), NbnError> {
    for (index, c) in body.chars().enumerate() {
        if !crate::alphabet::is_allowed(c) {
            return Err(NbnError::InvalidCharacter {
                character: c,
                position: index + 1,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_identifier() {
        let id = parse("urn:nbn:de:gbv:28-diss2015-0237-9").expect("valid NBN");
        assert_eq!(id.as_str(), "urn:nbn:de:gbv:28-diss2015-0237-9");
        assert_eq!(id.check_digit(), 9);
    }

    #[test]
    fn test_parse_case_folds_to_lowercase() {
        let id = parse("URN:NBN:DE:GBV:28-DISS2015-0237-9").expect("valid after folding");
        assert_eq!(id.as_str(), "urn:nbn:de:gbv:28-diss2015-0237-9");
    }

    #[test]
    fn test_parse_rejects_wrong_scheme() {
        assert_eq!(parse("urn:isbn:3-86640-001-2"), Err(NbnError::Malformed));
        assert_eq!(parse("nbn:de:gbv:28-diss2015-0237-9"), Err(NbnError::Malformed));
        assert_eq!(parse(""), Err(NbnError::Malformed));
    }

    #[test]
    fn test_parse_rejects_empty_remainder() {
        assert_eq!(parse("urn:nbn:"), Err(NbnError::Malformed));
    }

    #[test]
    fn test_parse_rejects_missing_trailing_digit() {
        assert_eq!(
            parse("urn:nbn:de:gbv:28-diss2015-0237-"),
            Err(NbnError::Malformed)
        );
    }

    #[test]
    fn test_parse_reports_invalid_character() {
        assert_eq!(
            parse("urn:nbn:de:gbv/28-diss-9"),
            Err(NbnError::InvalidCharacter {
                character: '/',
                position: 15
            })
        );
    }

    #[test]
    fn test_parse_reports_checksum_mismatch() {
        assert_eq!(
            parse("urn:nbn:de:gbv:28-diss2015-0237-0"),
            Err(NbnError::ChecksumMismatch {
                expected: 9,
                actual: 0
            })
        );
    }

    #[test]
    fn test_create_appends_computed_digit() {
        let id = create("urn:nbn:de:gbv:28-diss2015-0237-").expect("valid body");
        assert_eq!(id.as_str(), "urn:nbn:de:gbv:28-diss2015-0237-9");
        assert_eq!(id.check_digit(), 9);
    }

    #[test]
    fn test_create_requires_the_prefix() {
        assert_eq!(create("de:gbv:28-diss2015-0237-"), Err(NbnError::Malformed));
        assert_eq!(create("urn:nbn:"), Err(NbnError::Malformed));
    }

    #[test]
    fn test_create_rejects_invalid_character() {
        assert_eq!(
            create("urn:nbn:de:gbv 28"),
            Err(NbnError::InvalidCharacter {
                character: ' ',
                position: 15
            })
        );
    }

    #[test]
    fn test_is_valid_never_propagates_errors() {
        assert!(is_valid("urn:nbn:de:gbv:28-diss2015-0237-9"));
        assert!(!is_valid("urn:nbn:de:gbv:28-diss2015-0237-0"));
        assert!(!is_valid("urn:nbn:"));
        assert!(!is_valid("not an urn at all"));
        assert!(!is_valid(""));
    }
}
