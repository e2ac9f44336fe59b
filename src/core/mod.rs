//! GSTIN generation: state table, PAN format, checksum, and composition.
//!
//! The composer validates in a fixed order (PAN, state code, entity number)
//! and only then assembles the 14-character payload and appends the check
//! character. Nothing is returned on failure except the tagged error.

mod builder;
mod checksum;
mod entity;
mod error;
mod pan;
mod states;
mod types;

pub use builder::*;
pub use checksum::{CHECKSUM_ALPHABET, PAYLOAD_LEN, compute_checksum};
pub use entity::EntityNumber;
pub use error::*;
pub use pan::{PAN_LEN, validate_pan};
pub use states::{StateCode, lookup_state, normalize_state_code, state_codes};
pub use types::*;
