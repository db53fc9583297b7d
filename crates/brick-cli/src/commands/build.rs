use std::error::Error;
use std::path::PathBuf;

use brick_offset::{build_offset_layer, offset_to_json, OffsetLayer};
use brick_render::{render_wall, RenderOptions};
use clap::Args;
use tracing::info;

use crate::config::{load_config, OutputFormat};
use crate::files::{emit, load_layer};

pub const NO_SOLUTION: &str = "No solution exists!";

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Layer file, text or `.json`.
    #[arg(long)]
    pub input: PathBuf,
    /// Output format; overrides the config file.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Write the result here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Optional YAML config with render symbols and the default format.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &BuildArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref())?;
    let layer = load_layer(&args.input)?;
    let offset = build_offset_layer(&layer);
    info!(solved = offset.solved, input = %args.input.display(), "build finished");

    let format = args.format.unwrap_or(config.output.format);
    let rendered = format_offset(&offset, format, &config.render)?;
    emit(args.out.as_deref(), &rendered)
}

/// Formats a build result; unsolved courses render as the no-solution message in text mode.
pub fn format_offset(
    offset: &OffsetLayer,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, Box<dyn Error>> {
    match format {
        OutputFormat::Json => Ok(offset_to_json(offset)?),
        OutputFormat::Text if offset.solved => Ok(render_wall(&offset.grid, options)),
        OutputFormat::Text => Ok(NO_SOLUTION.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn args(dir: &std::path::Path, layer: &str) -> BuildArgs {
        let input = dir.join("layer.txt");
        fs::write(&input, layer).unwrap();
        BuildArgs {
            input,
            format: None,
            out: Some(dir.join("out/result.txt")),
            config: None,
        }
    }

    #[test]
    fn text_build_writes_the_diagram() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path(), "2 4\n1 1 2 2\n3 3 4 4\n");
        run(&args).unwrap();
        let written = fs::read_to_string(dir.path().join("out/result.txt")).unwrap();
        assert_eq!(written, "*********\n*2*1 1*4*\n* ***** *\n*2*3 3*4*\n*********\n");
    }

    #[test]
    fn config_selects_json_and_flag_wins() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("brickwork.yaml");
        fs::write(&config, "output:\n  format: json\n").unwrap();
        let mut args = args(dir.path(), "2 4\n1 2 3 3\n1 2 4 4\n");
        args.config = Some(config);
        run(&args).unwrap();
        let written = fs::read_to_string(dir.path().join("out/result.txt")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["solved"], serde_json::Value::Bool(false));
        assert_eq!(value["grid"][0][0], serde_json::json!(0));

        args.format = Some(OutputFormat::Text);
        run(&args).unwrap();
        let written = fs::read_to_string(dir.path().join("out/result.txt")).unwrap();
        assert_eq!(written.trim_end(), NO_SOLUTION);
    }

    #[test]
    fn invalid_layer_aborts_the_build() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path(), "2 4\n1 1 2 2\n");
        assert!(run(&args).is_err());
        assert!(!dir.path().join("out/result.txt").exists());
    }
}
