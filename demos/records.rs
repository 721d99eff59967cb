//! Adapting a wire-format record into a domain type.
//!
//! Run with: cargo run --example records

use serde::{Deserialize, Serialize};
use serde_rekey::{rekey, rekey_into, RekeyOptions, SymbolTable};
use std::error::Error;

#[derive(Debug, Serialize)]
struct WireUser {
    uid: u64,
    fnm: String,
    addr: WireAddress,
}

#[derive(Debug, Serialize)]
struct WireAddress {
    zip: String,
    cty: String,
}

#[derive(Debug, Deserialize)]
struct User {
    id: u64,
    full_name: String,
    address: Address,
}

#[derive(Debug, Deserialize)]
struct Address {
    zip: String,
    city: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let wire = WireUser {
        uid: 7,
        fnm: "Ada Lovelace".to_string(),
        addr: WireAddress {
            zip: "W1".to_string(),
            cty: "London".to_string(),
        },
    };

    // Struct fields are symbolic keys, addressed as :name
    let symbols = SymbolTable::from_iter(["uid", "fnm", "addr", "zip", "cty"]);
    let options = RekeyOptions::new().with_symbols(symbols);
    let mapping = [
        (":uid", "id"),
        (":fnm", "full_name"),
        (":addr", "address"),
        (":addr.:cty", "address.city"),
    ];

    let value = rekey(&wire, mapping, &options)?;
    println!("Intermediate tree: {}", value);

    let user: User = rekey_into(&wire, mapping, &options)?;
    println!("Domain record: {:?}", user);
    println!("{} lives in {} ({})", user.full_name, user.address.city, user.address.zip);
    println!("id = {}", user.id);

    Ok(())
}
