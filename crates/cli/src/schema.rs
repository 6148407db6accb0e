use dotnetdomain_core::{BuildConfig, RegistryEntry};
use schemars::schema_for;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Configuration file (dotnetdomain.json):");
    println!("{}", serde_json::to_string_pretty(&schema_for!(BuildConfig))?);

    println!("\nRegistry entry (build --json):");
    println!("{}", serde_json::to_string_pretty(&schema_for!(RegistryEntry))?);
    Ok(())
}
