use thiserror::Error;

/// Error returned when a PAN does not match `AAAAA9999A`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid PAN format '{value}': {reason}")]
pub struct PanFormatError {
    /// The rejected input, as given.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

/// Errors from the check character computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// Payload is not exactly 14 characters.
    #[error("checksum payload must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Payload contains a character outside `0-9A-Z`.
    #[error("character '{character}' at position {position} is not in the checksum alphabet")]
    InvalidCharacter { character: char, position: usize },
}

/// Errors that can occur while generating a GSTIN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GenerationError {
    /// The PAN failed format validation.
    #[error(transparent)]
    InvalidPan(#[from] PanFormatError),

    /// The state code is not in the state table.
    #[error("invalid state code '{0}'")]
    InvalidStateCode(String),

    /// The entity number is not an integer in 1..=9.
    #[error("entity number must be between 1 and 9, got '{0}'")]
    InvalidEntityNumber(String),

    /// The assembled payload was rejected by the checksum engine.
    #[error("invalid checksum input: {0}")]
    InvalidChecksumInput(#[from] ChecksumError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_error_message() {
        let e = PanFormatError {
            value: "ABC".into(),
            reason: "expected 10 characters, got 3".into(),
        };
        assert_eq!(
            e.to_string(),
            "invalid PAN format 'ABC': expected 10 characters, got 3"
        );
    }

    #[test]
    fn pan_error_is_transparent_in_generation_error() {
        let e: GenerationError = PanFormatError {
            value: "x".into(),
            reason: "r".into(),
        }
        .into();
        assert!(e.to_string().starts_with("invalid PAN format"));
    }

    #[test]
    fn checksum_error_wraps() {
        let e: GenerationError = ChecksumError::InvalidCharacter {
            character: '-',
            position: 4,
        }
        .into();
        assert!(matches!(e, GenerationError::InvalidChecksumInput(_)));
        assert!(e.to_string().contains("position 4"));
    }
}
