use std::error::Error;
use std::fs;
use std::path::Path;

use brick_render::RenderOptions;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// YAML-configurable settings shared by the `brickwork` commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Diagram symbols.
    #[serde(default)]
    pub render: RenderOptions,
    /// Output settings for batch commands.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
}

/// How batch results are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Framed text diagram.
    #[default]
    Text,
    /// Pretty JSON.
    Json,
}

/// Loads the YAML config at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };
    let text = fs::read_to_string(path)?;
    let config: CliConfig = serde_yaml::from_str(&text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: CliConfig = serde_yaml::from_str("render:\n  edge: '#'\n").unwrap();
        assert_eq!(config.render.edge, '#');
        assert_eq!(config.render.joint, ' ');
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn output_format_is_lowercase() {
        let config: CliConfig = serde_yaml::from_str("output:\n  format: json\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn missing_path_means_defaults() {
        assert_eq!(load_config(None).unwrap(), CliConfig::default());
    }
}
