use std::error::Error;

use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit JSON with the supported layer bounds.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    min_layer_size: usize,
    max_layer_size: usize,
    brick_parts: usize,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        min_layer_size: brick_core::MIN_LAYER_SIZE,
        max_layer_size: brick_core::MAX_LAYER_SIZE,
        brick_parts: brick_core::BRICK_PARTS,
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
