//! NBN check-digit engine.
//!
//! The check digit is computed over the whole body, scheme and separators
//! included, so identical free parts under different namespaces yield
//! different digits. Each character's table value is expanded into its
//! decimal digits, every digit is multiplied by its position in the
//! expanded sequence, and the products are summed. The check digit is the
//! units digit of that sum divided by the last expanded digit.
//!
//! The documented reference examples:
//!
//! - `urn:nbn:de:gbv:28-diss2015-0237-` → 9
//! - `urn:nbn:de:urmel-72c7b252-be9c-427e-84e2-29dd208a2a3a5-00000599-461` → 6
//! - `urn:nbn:de:hbz:464-20150331-150029-` → 3

use crate::alphabet;
use crate::domain::errors::NbnError;

/// Compute the check digit for an identifier body.
///
/// Fails with [`NbnError::InvalidCharacter`] on the first character outside
/// the alphabet and with [`NbnError::DegenerateChecksum`] when the divisor
/// (the last expanded digit) is zero. The current value table contains no
/// zero digits, so the latter cannot fire today, but the engine does not
/// assume the table's shape.
pub fn compute(body: &str) -> Result<u8, NbnError> {
    let mut product_sum: u64 = 0;
    let mut position: u64 = 0;
    let mut last_digit: u64 = 0;

    for (index, c) in body.chars().enumerate() {
        let value = alphabet::char_value(c).ok_or(NbnError::InvalidCharacter {
            character: c,
            position: index + 1,
        })?;

        // Expand the value into its decimal digits (11 -> 1, 1; 8 -> 8)
        let tens = u64::from(value / 10);
        let ones = u64::from(value % 10);
        if tens > 0 {
            position += 1;
            product_sum += tens * position;
        }
        position += 1;
        product_sum += ones * position;
        last_digit = ones;
    }

    if last_digit == 0 {
        return Err(NbnError::DegenerateChecksum);
    }

    Ok(((product_sum / last_digit) % 10) as u8)
}

/// True if `claimed` is the correct check digit for `body`.
///
/// Never fails: any computation error counts as "not verified".
pub fn verify(body: &str, claimed: u8) -> bool {
    match compute(body) {
        Ok(expected) => expected == claimed,
        Err(_) => false,
    }
}
