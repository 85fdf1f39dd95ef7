//! Parsing a pair line and inspecting the result.
//!
//! Run with: cargo run --example simple

use pairline::parse_str;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let line = "host=db.local port=5432 verbose label='staging box'";

    let pairs = parse_str(line)?;
    println!("Parsed {} pairs from: {line}\n", pairs.len());

    for pair in &pairs {
        match pair.value() {
            Some(value) => println!("  {} = {value:?}", pair.key()),
            None => println!("  {} (no value)", pair.key()),
        }
    }

    // Structured projection: absent values become explicit nulls.
    let map = pairs.to_map();
    let json = serde_json::to_string_pretty(&map)?;
    println!("\nAs JSON:\n{json}");

    Ok(())
}
