//! Prints the JSON schema of `config.toml`, or writes it to the path given as
//! the first argument.

use anyhow::{Context, Result};
use std::fs;

fn main() -> Result<()> {
    let schema = asciidraw::Config::json_schema();
    let json = serde_json::to_string_pretty(&schema)?;

    match std::env::args_os().nth(1) {
        Some(path) => fs::write(&path, format!("{json}\n"))
            .with_context(|| format!("Failed to write schema to {}", path.to_string_lossy()))?,
        None => println!("{json}"),
    }
    Ok(())
}
