use std::error::Error;
use std::path::PathBuf;

use brick_layer::{audit_tiling, AuditViolation, Layer, TilingAudit};
use clap::Args;

use crate::files::load_layer;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Layer file, text or `.json`.
    #[arg(long)]
    pub input: PathBuf,
    /// Print the audit as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let layer = load_layer(&args.input)?;
    let audit = audit_tiling(layer.state());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&audit)?);
    } else {
        println!("{}", summary(&layer, &audit));
    }
    if !audit.is_valid() {
        return Err("layer failed the tiling audit".into());
    }
    Ok(())
}

fn summary(layer: &Layer, audit: &TilingAudit) -> String {
    let mut lines = vec![format!(
        "layer {}x{}: {} of {} bricks, {}",
        layer.rows(),
        layer.columns(),
        audit.bricks,
        layer.target_brick_count(),
        if audit.is_valid() { "valid" } else { "invalid" }
    )];
    for violation in &audit.violations {
        lines.push(match violation {
            AuditViolation::WrongPartCount { id, cells } => {
                format!("  brick {id} has {} parts", cells.len())
            }
            AuditViolation::NotAdjacent { id, cells } => {
                format!("  brick {id} parts are not adjacent: {cells:?}")
            }
            AuditViolation::Unfilled { cells } => format!("  {} unfilled cells", cells.len()),
        });
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use brick_layer::layer_from_text;

    use super::*;

    #[test]
    fn summary_of_a_valid_layer() {
        let layer = layer_from_text("2 4\n1 1 2 2\n3 3 4 4\n").unwrap();
        let audit = audit_tiling(layer.state());
        assert_eq!(summary(&layer, &audit), "layer 2x4: 4 of 4 bricks, valid");
    }

    #[test]
    fn check_reads_json_layers() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("layer.json");
        fs::write(&input, r#"{"rows":2,"columns":2,"state":[[1,2],[1,2]]}"#).unwrap();
        run(&CheckArgs { input, json: true }).unwrap();
    }
}
