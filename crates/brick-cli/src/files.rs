use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::Path;

use brick_layer::{layer_from_json, layer_from_text, Layer};
use tracing::debug;

/// Loads a complete layer, choosing the format from the file extension.
pub fn load_layer(path: &Path) -> Result<Layer, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    debug!(path = %path.display(), is_json, "loading layer");
    let layer = if is_json {
        layer_from_json(&text)?
    } else {
        layer_from_text(&text)?
    };
    Ok(layer)
}

/// Writes `content` to `out`, or to stdout when no path is given.
pub fn emit(out: Option<&Path>, content: &str) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let mut file = fs::File::create(path)?;
            writeln!(file, "{content}")?;
        }
        None => println!("{content}"),
    }
    Ok(())
}
