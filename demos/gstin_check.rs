use gstin::core::*;
use gstin::verify::*;

fn main() {
    // Generation (no network required)
    println!("=== GSTIN Generation ===\n");

    let requests: [(&str, &str, u32); 5] = [
        ("ABCDE1234F", "27", 1),
        ("AAPFU0939F", "27", 1),
        ("AAACR5055K", "7", 1),  // padded to 07
        ("ABCDE1234F", "99", 1), // unknown state
        ("ABCDE1234F", "27", 0), // entity out of range
    ];

    for (pan, state, entity) in &requests {
        match generate_gstin(pan, state, *entity) {
            Ok(r) => println!("  {pan} / {state} / {entity} => {}", r.gstin),
            Err(e) => println!("  {pan} / {state} / {entity} => ERROR: {e}"),
        }
    }

    println!("\n=== GSTIN Verification ===\n");

    let ids = [
        "27AAPFU0939F1ZV",
        "29AAGCB7383J1Z4",
        "29AAGCB7383J1Z5", // wrong checksum
        "28AAGCB7383J1Z4", // unknown state
        "27AAPFU0939F1Z",  // too short
    ];

    for id in &ids {
        match parse_gstin(id) {
            Ok(g) => println!("  {id} => valid ({}, PAN {})", g.state(), g.pan()),
            Err(e) => println!("  {id} => INVALID: {e}"),
        }
    }
}
