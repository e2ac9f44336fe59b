//! Verification of existing GSTINs.
//!
//! Parses a 15-character identifier back into its fields and recomputes the
//! check character over the first 14 characters. A GSTIN that passes is
//! structurally consistent; it is not necessarily registered.
//!
//! # Example
//!
//! ```
//! use gstin::verify::*;
//!
//! let g: Gstin = "27AAPFU0939F1ZV".parse().unwrap();
//! assert_eq!(g.state().name, "Maharashtra");
//! assert_eq!(g.pan(), "AAPFU0939F");
//!
//! assert!(!is_valid_gstin("27AAPFU0939F1ZW"));
//! ```

mod parse;

pub use parse::{GSTIN_LEN, Gstin, VerifyError, is_valid_gstin, parse_gstin};
