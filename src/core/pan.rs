//! PAN (Permanent Account Number) format validation.

use super::error::PanFormatError;

/// Length of a PAN.
pub const PAN_LEN: usize = 10;

/// Validate a PAN against `[A-Z]{5}[0-9]{4}[A-Z]`.
///
/// The match is case-sensitive and covers the whole string. Callers that
/// accept lowercase input must upper-case it first.
pub fn validate_pan(pan: &str) -> Result<(), PanFormatError> {
    let len = pan.chars().count();
    if len != PAN_LEN {
        return Err(PanFormatError {
            value: pan.into(),
            reason: format!("expected {PAN_LEN} characters (AAAAA9999A), got {len}"),
        });
    }

    for (i, c) in pan.chars().enumerate() {
        let ok = match i {
            0..=4 | 9 => c.is_ascii_uppercase(),
            _ => c.is_ascii_digit(),
        };
        if !ok {
            let expected = if (5..=8).contains(&i) {
                "a digit"
            } else {
                "an uppercase letter"
            };
            return Err(PanFormatError {
                value: pan.into(),
                reason: format!("expected {expected} at position {}, found '{c}'", i + 1),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_pan() {
        assert!(validate_pan("ABCDE1234F").is_ok());
        assert!(validate_pan("AAPFU0939F").is_ok());
    }

    #[test]
    fn lowercase_rejected() {
        assert!(validate_pan("abcde1234f").is_err());
        assert!(validate_pan("ABCDE1234f").is_err());
    }

    #[test]
    fn too_short() {
        let e = validate_pan("ABCDE123F").unwrap_err();
        assert!(e.reason.contains("got 9"));
    }

    #[test]
    fn too_long() {
        assert!(validate_pan("ABCDE12345F").is_err());
    }

    #[test]
    fn empty() {
        assert!(validate_pan("").is_err());
    }

    #[test]
    fn digit_in_letter_block() {
        let e = validate_pan("ABCD51234F").unwrap_err();
        assert_eq!(e.reason, "expected an uppercase letter at position 5, found '5'");
    }

    #[test]
    fn letter_in_digit_block() {
        let e = validate_pan("ABCDE12X4F").unwrap_err();
        assert_eq!(e.reason, "expected a digit at position 8, found 'X'");
    }

    #[test]
    fn trailing_digit_rejected() {
        assert!(validate_pan("ABCDE12345").is_err());
    }

    #[test]
    fn surrounding_whitespace_not_trimmed() {
        assert!(validate_pan(" ABCDE1234F").is_err());
        assert!(validate_pan("ABCDE1234F ").is_err());
    }

    #[test]
    fn non_ascii_rejected() {
        // Ä is uppercase but not ASCII
        assert!(validate_pan("ÄBCDE1234F").is_err());
        assert!(validate_pan("ABCDE١234F").is_err());
    }
}
