use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    build::{self, BuildArgs},
    check::{self, CheckArgs},
    generate::{self, GenerateArgs},
    interactive::{self, InteractiveArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod files;

#[derive(Parser, Debug)]
#[command(name = "brickwork", about = "Brick layer validator and running-bond builder")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enter a layer row by row and draw the course laid on top of it.
    Interactive(InteractiveArgs),
    /// Build the offset course for a layer file.
    Build(BuildArgs),
    /// Validate a layer file and print a tiling summary.
    Check(CheckArgs),
    /// Write a random legal layer.
    Generate(GenerateArgs),
    /// Print the crate version.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        None => interactive::run(&InteractiveArgs::default()),
        Some(Command::Interactive(args)) => interactive::run(&args),
        Some(Command::Build(args)) => build::run(&args),
        Some(Command::Check(args)) => check::run(&args),
        Some(Command::Generate(args)) => generate::run(&args),
        Some(Command::Version(args)) => version::run(&args),
    }
}
