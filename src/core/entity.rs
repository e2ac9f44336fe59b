use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GenerationError;

/// Registration number of a PAN within one state (1–9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EntityNumber(u8);

impl EntityNumber {
    /// Smallest valid entity number.
    pub const MIN: u32 = 1;
    /// Largest valid entity number.
    pub const MAX: u32 = 9;

    /// The entity number as an integer.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The entity number as the single digit used in a GSTIN.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl Default for EntityNumber {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u32> for EntityNumber {
    type Error = GenerationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(GenerationError::InvalidEntityNumber(value.to_string()))
        }
    }
}

impl From<EntityNumber> for u32 {
    fn from(value: EntityNumber) -> Self {
        u32::from(value.0)
    }
}

/// Parses user input such as `"3"`. Non-integer text is reported as an
/// invalid entity number rather than a parse error.
impl FromStr for EntityNumber {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| GenerationError::InvalidEntityNumber(s.to_string()))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for EntityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
