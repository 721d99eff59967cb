//! Renaming the keys of a JSON payload.
//!
//! Run with: cargo run --example simple

use serde_rekey::{format, KeyPairs, SymbolTable, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let payload: Value = serde_json::from_str(
        r#"{
            "usr": {"nm": "Alice", "eml": "alice@example.com"},
            "ords": [
                {"no": 1, "amt": 9.5},
                {"no": 2, "amt": 12.0}
            ],
            "v": 2
        }"#,
    )?;

    // One-off mapping, parsed on the call
    let renamed = format(
        payload.clone(),
        [
            ("usr", "user"),
            ("usr.nm", "user.name"),
            ("usr.eml", "user.email"),
            ("ords", "orders"),
            ("ords.no", "orders.number"),
            ("ords.amt", "orders.amount"),
        ],
    )?;
    println!("Renamed:\n{}\n", serde_json::to_string_pretty(&renamed)?);

    // Prebuilt registry, reused in both directions
    let pairs = KeyPairs::build([("usr", "user"), ("v", "version")], &SymbolTable::new())?;
    let there = format(payload.clone(), &pairs)?;
    let back = format(there.clone(), &pairs.reverse())?;
    println!("Forward: {}", there);
    println!("Round trip matches: {}", back == payload);

    Ok(())
}
