use std::fmt;

use super::checksum::compute_checksum;
use super::entity::EntityNumber;
use super::error::GenerationError;
use super::pan::validate_pan;
use super::states::{StateCode, normalize_state_code};
use super::types::{Breakdown, GstinResult};

/// Marker character at position 14 of every GSTIN.
pub const Z_CHAR: char = 'Z';

/// Generate a GSTIN from a PAN, a state code, and an entity number.
///
/// `state_code` may be text (`"27"`, `"7"`) or an integer; it is zero-padded
/// to two digits before the table lookup.
///
/// ```
/// use gstin::core::*;
///
/// let r = generate_gstin("AAPFU0939F", 27, 1).unwrap();
/// assert_eq!(r.gstin, "27AAPFU0939F1ZV");
///
/// assert!(matches!(
///     generate_gstin("ABCDE1234F", "99", 1),
///     Err(GenerationError::InvalidStateCode(_))
/// ));
/// ```
pub fn generate_gstin(
    pan: &str,
    state_code: impl fmt::Display,
    entity_number: u32,
) -> Result<GstinResult, GenerationError> {
    GstinBuilder::new(pan, state_code)
        .entity_number(entity_number)
        .build()
}

/// Builder for a single GSTIN.
///
/// Inputs are only checked in [`build`](Self::build), in the order PAN,
/// state code, entity number. The entity number defaults to 1.
///
/// ```
/// use gstin::core::*;
///
/// let r = GstinBuilder::new("ABCDE1234F", "7").build().unwrap();
/// assert_eq!(r.gstin, "07ABCDE1234F1Z2");
/// assert_eq!(r.breakdown.state_code, "07 (Delhi)");
/// ```
#[derive(Debug, Clone)]
pub struct GstinBuilder {
    pan: String,
    state_code: String,
    entity_number: u32,
}

impl GstinBuilder {
    pub fn new(pan: impl Into<String>, state_code: impl fmt::Display) -> Self {
        Self {
            pan: pan.into(),
            state_code: normalize_state_code(state_code),
            entity_number: u32::from(EntityNumber::default()),
        }
    }

    pub fn entity_number(mut self, n: u32) -> Self {
        self.entity_number = n;
        self
    }

    /// Validate the inputs and compose the GSTIN.
    pub fn build(self) -> Result<GstinResult, GenerationError> {
        let result = self.compose();
        if let Err(e) = &result {
            tracing::debug!(pan = %self.pan, state_code = %self.state_code, error = %e, "GSTIN generation rejected");
        }
        result
    }

    fn compose(&self) -> Result<GstinResult, GenerationError> {
        validate_pan(&self.pan)?;

        let state = StateCode::lookup(&self.state_code)
            .ok_or_else(|| GenerationError::InvalidStateCode(self.state_code.clone()))?;

        let entity = EntityNumber::try_from(self.entity_number)?;

        let payload = format!("{}{}{}{}", state.code, self.pan, entity, Z_CHAR);
        let checksum = compute_checksum(&payload)?;

        let mut gstin = payload;
        gstin.push(checksum);
        tracing::debug!(%gstin, state = state.name, "generated GSTIN");

        Ok(GstinResult {
            gstin,
            breakdown: Breakdown {
                state_code: state.to_string(),
                pan: self.pan.clone(),
                entity_number: entity.to_string(),
                z_char: Z_CHAR,
                checksum,
            },
        })
    }
}
