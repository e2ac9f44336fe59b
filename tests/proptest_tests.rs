//! Property-based tests for GSTIN generation and the checksum.
//!
//! Run with: `cargo test --features all --test proptest_tests`

use gstin::core::*;
use proptest::prelude::*;

fn arb_pan() -> impl Strategy<Value = String> {
    "[A-Z]{5}[0-9]{4}[A-Z]"
}

fn arb_state() -> impl Strategy<Value = &'static str> {
    prop::sample::select(state_codes()).prop_map(|s| s.code)
}

fn arb_payload() -> impl Strategy<Value = String> {
    "[0-9A-Z]{14}"
}

proptest! {
    /// Valid inputs always produce a 15-character GSTIN with the inputs in place.
    #[test]
    fn generated_layout(pan in arb_pan(), state in arb_state(), entity in 1u32..=9) {
        let r = generate_gstin(&pan, state, entity).unwrap();

        prop_assert_eq!(r.gstin.len(), 15);
        prop_assert_eq!(&r.gstin[0..2], state);
        prop_assert_eq!(&r.gstin[2..12], pan.as_str());
        prop_assert_eq!(&r.gstin[12..13], entity.to_string());
        prop_assert_eq!(&r.gstin[13..14], "Z");
        prop_assert_eq!(r.gstin.chars().last(), Some(r.breakdown.checksum));
    }

    /// Recomputing over the first 14 characters reproduces the 15th.
    #[test]
    fn checksum_round_trip(pan in arb_pan(), state in arb_state(), entity in 1u32..=9) {
        let r = generate_gstin(&pan, state, entity).unwrap();
        let recomputed = compute_checksum(&r.gstin[..14]).unwrap();
        prop_assert_eq!(r.gstin.chars().nth(14), Some(recomputed));
    }

    #[test]
    fn checksum_deterministic_and_in_alphabet(payload in arb_payload()) {
        let a = compute_checksum(&payload).unwrap();
        let b = compute_checksum(&payload).unwrap();
        prop_assert_eq!(a, b);
        prop_assert!(CHECKSUM_ALPHABET.contains(&(a as u8)));
    }

    /// Changing any single payload character changes the check character.
    /// Doubling then folding is a bijection on 0..36, so no substitution cancels out.
    #[test]
    fn single_substitution_detected(payload in arb_payload(), pos in 0usize..14, sym in 0usize..36) {
        let replacement = CHECKSUM_ALPHABET[sym] as char;
        let mut altered: Vec<char> = payload.chars().collect();
        prop_assume!(altered[pos] != replacement);
        altered[pos] = replacement;
        let altered: String = altered.into_iter().collect();

        prop_assert_ne!(compute_checksum(&payload).unwrap(), compute_checksum(&altered).unwrap());
    }

    /// Any lowercase letter in the PAN is rejected.
    #[test]
    fn lowercase_pan_rejected(pan in "[a-z]{5}[0-9]{4}[a-z]") {
        prop_assert!(validate_pan(&pan).is_err());
    }

    #[test]
    fn entity_out_of_range_rejected(pan in arb_pan(), entity in 10u32..1000) {
        let is_entity_error = matches!(
            generate_gstin(&pan, "27", entity),
            Err(GenerationError::InvalidEntityNumber(_))
        );
        prop_assert!(is_entity_error);
    }

    /// Random text never panics the checksum engine.
    #[test]
    fn checksum_total_on_any_input(s in "\\PC{0,20}") {
        let _ = compute_checksum(&s);
    }
}
