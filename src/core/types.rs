use std::fmt;

use serde::{Deserialize, Serialize};

/// A generated GSTIN together with its field breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstinResult {
    /// The 15-character identifier.
    pub gstin: String,
    /// Display decomposition of `gstin`.
    pub breakdown: Breakdown,
}

/// Field-by-field decomposition of a GSTIN, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// State code annotated with the state name, e.g. "27 (Maharashtra)".
    pub state_code: String,
    /// The 10-character PAN.
    pub pan: String,
    /// Entity number as a single digit.
    pub entity_number: String,
    /// Always 'Z'.
    pub z_char: char,
    /// The check character.
    pub checksum: char,
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "State Code: {}", self.state_code)?;
        writeln!(f, "Pan: {}", self.pan)?;
        writeln!(f, "Entity Number: {}", self.entity_number)?;
        writeln!(f, "Z Char: {}", self.z_char)?;
        write!(f, "Checksum: {}", self.checksum)
    }
}

impl fmt::Display for GstinResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.gstin.fmt(f)
    }
}
