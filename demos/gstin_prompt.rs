//! Interactive GSTIN generator.
//!
//! Run with: `cargo run --example gstin_prompt`
//! Set `RUST_LOG=gstin=debug` to see the library's trace events.

use std::io::{self, BufRead, Write};

use gstin::core::*;
use tracing_subscriber::EnvFilter;

fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("\n=== GSTIN Generator ===");
        let Some(pan) = prompt(&mut input, "Enter PAN number (format AAAAA9999A): ")? else {
            break;
        };
        let pan = pan.to_uppercase();

        println!("\nAvailable State Codes:");
        for s in state_codes() {
            println!("{}: {}", s.code, s.name);
        }

        let Some(state) = prompt(&mut input, "\nEnter state code: ")? else {
            break;
        };
        let Some(entity) = prompt(&mut input, "Enter entity number (1-9): ")? else {
            break;
        };

        // PAN and state code errors take precedence over a non-numeric entity
        let result = match entity.parse::<EntityNumber>() {
            Ok(e) => generate_gstin(&pan, &state, e.into()),
            Err(e) => generate_gstin(&pan, &state, 1).and(Err(e)),
        };

        match result {
            Ok(r) => {
                println!("\nGenerated GSTIN Details:");
                println!("GSTIN: {}", r.gstin);
                println!("\nBreakdown:");
                println!("{}", r.breakdown);
            }
            Err(e) => println!("\nError: {e}"),
        }

        let again = prompt(&mut input, "\nGenerate another GSTIN? (y/n): ")?;
        if again.map(|a| a.to_lowercase()).as_deref() != Some("y") {
            break;
        }
    }

    Ok(())
}
