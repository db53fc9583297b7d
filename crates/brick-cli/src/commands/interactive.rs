use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use brick_core::{MAX_LAYER_SIZE, MIN_BRICK_ID};
use brick_layer::{create_layer, Layer, LayerSession, RowState};
use brick_offset::build_offset_layer;
use brick_render::{render_wall, RenderOptions};
use clap::Args;
use tracing::debug;

use super::build::NO_SOLUTION;
use crate::config::load_config;

const BUILDING: &str = "Please wait. Layer is under construction!";
const PROCEED: &str = "Do you want to proceed? (yes/no)";

#[derive(Args, Debug, Default)]
pub struct InteractiveArgs {
    /// Optional YAML config with render symbols.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InteractiveArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut stdin.lock(), &mut stdout.lock(), &config.render)?;
    Ok(())
}

/// Words accepted at any prompt instead of layer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    /// Quit the program.
    End,
    /// Drop the layer and ask for dimensions again.
    Restart,
    /// Keep the dimensions and enter the rows from the first one.
    Repeat,
}

fn control(line: &str) -> Option<Control> {
    match line.to_ascii_lowercase().as_str() {
        "end" => Some(Control::End),
        "restart" => Some(Control::Restart),
        "repeat" => Some(Control::Repeat),
        _ => None,
    }
}

enum Step<T> {
    Ready(T),
    Restart,
    End,
}

/// Runs prompt rounds until the user ends the program or declines to proceed.
///
/// Input ending early is treated like `end`.
pub fn play<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &RenderOptions,
) -> io::Result<()> {
    loop {
        let session = match read_dimensions(input, output)? {
            Step::Ready(session) => session,
            Step::Restart => continue,
            Step::End => return Ok(()),
        };
        let layer = match read_rows(input, output, session)? {
            Step::Ready(layer) => layer,
            Step::Restart => continue,
            Step::End => return Ok(()),
        };

        writeln!(output, "{BUILDING}")?;
        let offset = build_offset_layer(&layer);
        if offset.solved {
            writeln!(output, "{}", render_wall(&offset.grid, options))?;
        } else {
            writeln!(output, "{NO_SOLUTION}")?;
        }

        if !ask_proceed(input, output)? {
            return Ok(());
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn read_dimensions<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Step<LayerSession>> {
    loop {
        write!(
            output,
            "Enter layer dimensions \"rows and columns\" separated by space (both must be an even positive number less than {MAX_LAYER_SIZE}): "
        )?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(Step::End);
        };
        match control(&line) {
            Some(Control::End) => return Ok(Step::End),
            Some(Control::Restart) => return Ok(Step::Restart),
            Some(Control::Repeat) => continue,
            None => {}
        }
        match create_layer(&line) {
            Ok(session) => return Ok(Step::Ready(session)),
            Err(err) => {
                debug!(code = %err.info().code, "dimensions rejected");
                writeln!(output, "{err}")?;
            }
        }
    }
}

fn read_rows<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mut session: LayerSession,
) -> io::Result<Step<Layer>> {
    writeln!(
        output,
        "Please enter on the next {} lines, {} brick ids. Each brick has two equal numbers. Possible numbers between {} and {}",
        session.rows(),
        session.columns(),
        MIN_BRICK_ID,
        session.target_brick_count()
    )?;
    while let RowState::AwaitingRow(index) = session.row_state() {
        write!(output, "Enter line {}: ", index + 1)?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(Step::End);
        };
        match control(&line) {
            Some(Control::End) => return Ok(Step::End),
            Some(Control::Restart) => return Ok(Step::Restart),
            Some(Control::Repeat) => {
                session = session.restarted();
                continue;
            }
            None => {}
        }
        match session.ingest_row(&line) {
            Ok(next) => session = next,
            Err(err) => {
                debug!(code = %err.info().code, row = index, "row rejected");
                writeln!(output, "{err}")?;
            }
        }
    }
    Ok(session.into_layer().map_or(Step::Restart, Step::Ready))
}

fn ask_proceed<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    loop {
        writeln!(output, "{PROCEED}")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        match line.to_ascii_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" | "end" => return Ok(false),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        play(&mut input, &mut output, &RenderOptions::default()).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn full_round_draws_the_offset_course() {
        let out = session("2 4\n1 1 2 2\n3 3 4 4\nno\n");
        assert!(out.contains("Possible numbers between 1 and 4"));
        assert!(out.contains(BUILDING));
        assert!(out.contains("*2*1 1*4*\n* ***** *\n*2*3 3*4*"));
        assert_eq!(out.matches(PROCEED).count(), 1);
    }

    #[test]
    fn rejected_row_is_asked_again() {
        let out = session("2 4\n1 1 2 2\n1 1 2 2\n3 3 4 4\nno\n");
        assert!(out.contains("brick full error"));
        assert_eq!(out.matches("Enter line 2: ").count(), 2);
        assert!(out.contains("*2*1 1*4*"));
    }

    #[test]
    fn repeat_clears_the_rows() {
        let out = session("2 4\n1 1 2 2\nREPEAT\n3 3 4 4\n1 1 2 2\nno\n");
        assert_eq!(out.matches("Enter line 1: ").count(), 2);
        assert!(out.contains("*4*3 3*2*"));
    }

    #[test]
    fn restart_goes_back_to_dimensions() {
        let out = session("2 4\nrestart\n2 2\n1 2\n1 2\nno\n");
        assert_eq!(out.matches("Enter layer dimensions").count(), 2);
        assert!(out.contains("*****\n*1 1*\n*****\n*2 2*\n*****"));
    }

    #[test]
    fn unsolved_layer_reports_and_continues() {
        let out = session("2 4\n1 2 3 3\n1 2 4 4\nmaybe\nyes\nend\n");
        assert!(out.contains(NO_SOLUTION));
        assert_eq!(out.matches(PROCEED).count(), 2);
        assert_eq!(out.matches("Enter layer dimensions").count(), 2);
    }

    #[test]
    fn bad_dimensions_are_reported() {
        let out = session("3 4\n2 102\nend\n");
        assert!(out.contains("dimension format error"));
        assert!(out.contains("dimension range error"));
        assert!(!out.contains("Enter line"));
    }

    #[test]
    fn input_ending_mid_layer_stops_quietly() {
        let out = session("2 4\n1 1 2 2\n");
        assert!(out.ends_with("Enter line 2: "));
    }

    #[test]
    fn control_words_ignore_case() {
        assert_eq!(control("End"), Some(Control::End));
        assert_eq!(control("restart"), Some(Control::Restart));
        assert_eq!(control("1 1 2 2"), None);
    }
}
