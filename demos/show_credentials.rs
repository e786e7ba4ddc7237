//! Example: Loading credentials from .env and showing what was found
//!
//! Run with: cargo run --example show_credentials
//!
//! Optionally pass a path to read a specific file instead of searching
//! for .env from the current directory upwards:
//!   cargo run --example show_credentials -- ./config/dev.env
//!
//! Set RUST_LOG=debug to see which keys came from the file.

use llmkeys::{Credential, EnvLoader};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (optional)
    llmkeys::use_logging();

    let loader = match env::args().nth(1) {
        Some(path) => EnvLoader::new().path(path),
        None => EnvLoader::new(),
    };

    let (config, report) = loader.load();

    println!("=== Credentials ===\n");
    for (cred, value) in config.iter() {
        let status = if value.is_some() { "set" } else { "not set" };
        println!("  {:<26} {}", cred.env_key(), status);
    }

    println!("\n=== Load report ===\n");
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Err(e) = config.require(Credential::OpenAI) {
        println!("\n{}", e);
    }

    Ok(())
}
