use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{
    Breakdown, ChecksumError, EntityNumber, PAN_LEN, PAYLOAD_LEN, PanFormatError, StateCode,
    Z_CHAR, compute_checksum, validate_pan,
};

/// Length of a complete GSTIN.
pub const GSTIN_LEN: usize = PAYLOAD_LEN + 1;

const PAN_START: usize = 2;
const ENTITY_POS: usize = PAN_START + PAN_LEN;
const Z_POS: usize = ENTITY_POS + 1;

/// Why a GSTIN failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VerifyError {
    #[error("GSTIN must be 15 characters, got {0}")]
    InvalidLength(usize),

    #[error("GSTIN contains non-ASCII character '{0}'")]
    InvalidCharacter(char),

    #[error("unknown state code '{0}'")]
    InvalidStateCode(String),

    #[error(transparent)]
    InvalidPan(#[from] PanFormatError),

    #[error("entity number must be a digit between 1 and 9, got '{0}'")]
    InvalidEntityNumber(char),

    #[error("expected 'Z' at position 14, found '{0}'")]
    MissingZ(char),

    #[error("checksum mismatch: expected '{expected}', found '{found}'")]
    ChecksumMismatch { expected: char, found: char },

    #[error(transparent)]
    Checksum(#[from] ChecksumError),
}

/// A GSTIN whose structure and check character have been verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gstin {
    value: String,
    state: StateCode,
    entity: EntityNumber,
}

impl Gstin {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn state(&self) -> StateCode {
        self.state
    }

    pub fn pan(&self) -> &str {
        &self.value[PAN_START..ENTITY_POS]
    }

    pub fn entity_number(&self) -> EntityNumber {
        self.entity
    }

    pub fn checksum(&self) -> char {
        char::from(self.value.as_bytes()[PAYLOAD_LEN])
    }

    /// Field decomposition, in the same shape the generator returns.
    pub fn breakdown(&self) -> Breakdown {
        Breakdown {
            state_code: self.state.to_string(),
            pan: self.pan().to_string(),
            entity_number: self.entity.to_string(),
            z_char: Z_CHAR,
            checksum: self.checksum(),
        }
    }
}

/// Parse and verify a GSTIN.
///
/// Checks run in positional order: length, state code, PAN, entity digit,
/// the `Z` marker, then the check character. Input is not trimmed or
/// upper-cased.
pub fn parse_gstin(input: &str) -> Result<Gstin, VerifyError> {
    if let Some(c) = input.chars().find(|c| !c.is_ascii()) {
        return Err(VerifyError::InvalidCharacter(c));
    }
    // ASCII from here on, so byte offsets are character offsets
    if input.len() != GSTIN_LEN {
        return Err(VerifyError::InvalidLength(input.len()));
    }

    let code = &input[..PAN_START];
    let state =
        StateCode::lookup(code).ok_or_else(|| VerifyError::InvalidStateCode(code.to_string()))?;

    validate_pan(&input[PAN_START..ENTITY_POS])?;

    let entity_char = char::from(input.as_bytes()[ENTITY_POS]);
    let entity = entity_char
        .to_digit(10)
        .and_then(|d| EntityNumber::try_from(d).ok())
        .ok_or(VerifyError::InvalidEntityNumber(entity_char))?;

    let z = char::from(input.as_bytes()[Z_POS]);
    if z != Z_CHAR {
        return Err(VerifyError::MissingZ(z));
    }

    let expected = compute_checksum(&input[..PAYLOAD_LEN])?;
    let found = char::from(input.as_bytes()[PAYLOAD_LEN]);
    if expected != found {
        tracing::debug!(gstin = input, %expected, %found, "GSTIN checksum mismatch");
        return Err(VerifyError::ChecksumMismatch { expected, found });
    }

    Ok(Gstin {
        value: input.to_string(),
        state,
        entity,
    })
}

/// Whether `input` is a structurally valid GSTIN with a correct checksum.
pub fn is_valid_gstin(input: &str) -> bool {
    parse_gstin(input).is_ok()
}

impl FromStr for Gstin {
    type Err = VerifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_gstin(s)
    }
}

impl TryFrom<String> for Gstin {
    type Error = VerifyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_gstin(&value)
    }
}

impl From<Gstin> for String {
    fn from(value: Gstin) -> Self {
        value.value
    }
}

impl AsRef<str> for Gstin {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
