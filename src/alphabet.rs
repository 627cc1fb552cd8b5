//! Character value table for the NBN check-digit algorithm.
//!
//! Values follow the national-library check-digit convention. Only the
//! characters listed here may appear in an identifier body; everything
//! else (including uppercase, which the parser folds away first) is
//! rejected.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static CHAR_VALUES: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    HashMap::from([
        // Digits
        ('0', 1),
        ('1', 2),
        ('2', 3),
        ('3', 4),
        ('4', 5),
        ('5', 6),
        ('6', 7),
        ('7', 8),
        ('8', 9),
        ('9', 41),
        // Lowercase letters
        ('a', 18),
        ('b', 14),
        ('c', 19),
        ('d', 15),
        ('e', 16),
        ('f', 21),
        ('g', 22),
        ('h', 23),
        ('i', 24),
        ('j', 25),
        ('k', 42),
        ('l', 26),
        ('m', 27),
        ('n', 13),
        ('o', 28),
        ('p', 29),
        ('q', 31),
        ('r', 12),
        ('s', 32),
        ('t', 33),
        ('u', 11),
        ('v', 34),
        ('w', 35),
        ('x', 36),
        ('y', 37),
        ('z', 38),
        // Separators
        ('-', 39),
        (':', 17),
    ])
});

/// Checksum weight of a character, or `None` if it is outside the alphabet.
pub fn char_value(c: char) -> Option<u8> {
    CHAR_VALUES.get(&c).copied()
}

/// True if the character may appear in an identifier body.
pub fn is_allowed(c: char) -> bool {
    CHAR_VALUES.contains_key(&c)
}
