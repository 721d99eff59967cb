//! Loading a mapping from configuration and applying it to many payloads.
//!
//! Run with: cargo run --example json_mapping

use serde_rekey::{format_with_options, KeyPairs, RekeyOptions, Value};
use std::error::Error;

const MAPPING: &str = r#"{
    "evt": "event",
    "evt.ts": "event.timestamp",
    "evt.src\\.host": "event.source_host",
    "evt.tags.k": "event.tags.key"
}"#;

const EVENTS: [&str; 2] = [
    r#"{"evt": {"ts": 1700000000, "src.host": "db-1", "tags": [{"k": "env", "v": "prod"}]}}"#,
    r#"{"evt": {"ts": 1700000060, "src.host": "db-2", "tags": []}, "seq": 2}"#,
];

fn main() -> Result<(), Box<dyn Error>> {
    let options = RekeyOptions::new().with_max_depth(32);

    let config: Value = serde_json::from_str(MAPPING)?;
    let pairs = KeyPairs::from_value(&config, &options.symbols)?;
    println!("Loaded {} rules:", pairs.len());
    for pair in &pairs {
        println!("  {}", pair);
    }

    for raw in EVENTS {
        let event: Value = serde_json::from_str(raw)?;
        let renamed = format_with_options(event, &pairs, &options)?;
        println!("{}", serde_json::to_string(&renamed)?);
    }

    // Invalid configuration is rejected before any payload is touched
    let broken: Value = serde_json::from_str(r#"{"evt.ts": "timestamp"}"#)?;
    match KeyPairs::from_value(&broken, &options.symbols) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(err) => println!("Rejected ({}): {}", err.kind(), err),
    }

    Ok(())
}
