#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything that parses must survive a generate round trip.
        if let Ok(g) = gstin::verify::parse_gstin(s) {
            let r = gstin::core::generate_gstin(g.pan(), g.state().code, g.entity_number().into())
                .expect("verified GSTIN fields must regenerate");
            assert_eq!(r.gstin, s);
        }
    }
});
