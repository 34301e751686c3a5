//! Conversion between packed `u32` variation tags and their 4-character form.
//!
//! Each character occupies one byte of a big-endian `u32`, most significant
//! first. Characters are mapped through their code point, so bytes above
//! 0x7F decode to U+0080..=U+00FF rather than failing.

use crate::error::{Error, Result};

/// Number of characters in a variation tag.
pub const TAG_LEN: usize = 4;

/// Decode a packed tag into its 4-character string.
///
/// Total over `u32`: every byte maps to the character with the same code point.
///
/// ```
/// use font_variations::decode_tag;
/// assert_eq!(decode_tag(0x7767_6874), "wght");
/// ```
pub fn decode_tag(value: u32) -> String {
    value.to_be_bytes().into_iter().map(char::from).collect()
}

/// Pack a 4-character tag into a `u32`.
///
/// Only the low byte of each code point is kept, so characters above U+00FF
/// do not survive a round trip.
///
/// # Errors
///
/// `Error::InvalidTag` unless `tag` has exactly four characters.
///
/// ```
/// use font_variations::encode_tag;
/// assert_eq!(encode_tag("wdth").unwrap(), 0x7764_7468);
/// assert!(encode_tag("wgt").is_err());
/// ```
pub fn encode_tag(tag: &str) -> Result<u32> {
    let len = tag.chars().count();
    if len != TAG_LEN {
        return Err(Error::InvalidTag { tag: tag.to_owned(), len });
    }
    Ok(tag.chars().fold(0u32, |acc, c| (acc << 8) | (u32::from(c) & 0xFF)))
}
