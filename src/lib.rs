//! # gstin
//!
//! Generation and verification of India's GSTIN (Goods and Services Tax
//! Identification Number).
//!
//! A GSTIN is 15 characters: a 2-digit state code, the taxpayer's 10-character
//! PAN, an entity digit (1–9), the literal `Z`, and a base-36 check character.
//! Everything here is pure: one static state table, no I/O, no shared state.
//!
//! ## Quick Start
//!
//! ```rust
//! use gstin::core::*;
//!
//! let result = generate_gstin("ABCDE1234F", "27", 1).unwrap();
//! assert_eq!(result.gstin, "27ABCDE1234F1Z0");
//! assert_eq!(result.breakdown.state_code, "27 (Maharashtra)");
//!
//! assert_eq!(lookup_state("29"), Some("Karnataka"));
//! assert!(validate_pan("abcde1234f").is_err());
//! assert_eq!(compute_checksum("27AAPFU0939F1Z").unwrap(), 'V');
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | State table, PAN validation, checksum, GSTIN generation |
//! | `verify` | Parsing and checksum verification of existing GSTINs |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "verify")]
pub mod verify;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
