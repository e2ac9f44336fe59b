//! GSTIN check character: a base-36 weighted sum over the first 14 characters.

use super::error::ChecksumError;

/// The 36 symbols of the checksum alphabet. A symbol's value is its index.
pub const CHECKSUM_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of characters the checksum is computed over.
pub const PAYLOAD_LEN: usize = 14;

const MODULUS: u32 = 36;

/// Alternating 1, 2 weights, starting with 1 at position 0.
const FACTORS: [u32; PAYLOAD_LEN] = [1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2];

/// Compute the check character for a 14-character payload
/// (state code + PAN + entity number + `Z`).
///
/// Every product `value * factor` is folded into base 36 by adding its high
/// and low digits before summing.
///
/// ```
/// use gstin::core::compute_checksum;
///
/// assert_eq!(compute_checksum("27AAPFU0939F1Z").unwrap(), 'V');
/// assert!(compute_checksum("27aapfu0939f1z").is_err());
/// ```
pub fn compute_checksum(payload: &str) -> Result<char, ChecksumError> {
    let actual = payload.chars().count();
    if actual != PAYLOAD_LEN {
        return Err(ChecksumError::InvalidLength {
            expected: PAYLOAD_LEN,
            actual,
        });
    }

    let mut total: u32 = 0;
    for (position, (character, factor)) in payload.chars().zip(FACTORS).enumerate() {
        let value = symbol_value(character).ok_or(ChecksumError::InvalidCharacter {
            character,
            position,
        })?;
        let product = value * factor;
        total += product / MODULUS + product % MODULUS;
    }

    let mut checksum = MODULUS - total % MODULUS;
    if checksum == MODULUS {
        checksum = 0;
    }

    Ok(char::from(CHECKSUM_ALPHABET[checksum as usize]))
}

fn symbol_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' | 'A'..='Z' => c.to_digit(36),
        _ => None,
    }
}
