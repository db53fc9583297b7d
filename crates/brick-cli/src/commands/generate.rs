use std::error::Error;
use std::path::PathBuf;

use brick_core::Dimensions;
use brick_layer::{gen_block_layer, gen_flip_layer, layer_to_json, layer_to_text};
use clap::Args;

use crate::config::OutputFormat;
use crate::files::emit;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of rows; must be even.
    #[arg(long, default_value_t = 2)]
    pub rows: usize,
    /// Number of columns; must be even.
    #[arg(long, default_value_t = 4)]
    pub columns: usize,
    /// Seed for the block layout and id shuffle.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Random 2×2 flips applied to running rows; `0` uses the block layout instead.
    #[arg(long, default_value_t = 0)]
    pub flips: usize,
    /// Layer file format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the layer here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let dims = Dimensions::new(args.rows, args.columns);
    let layer = if args.flips == 0 {
        gen_block_layer(dims, args.seed)?
    } else {
        gen_flip_layer(dims, args.seed, args.flips)?
    };
    let content = match args.format {
        OutputFormat::Text => layer_to_text(&layer).trim_end().to_string(),
        OutputFormat::Json => layer_to_json(&layer)?,
    };
    emit(args.out.as_deref(), &content)
}
