//! jsonfmt CLI.
//!
//! Thin wrapper around the library pipeline: resolves input/output
//! streams, decides whether color is appropriate, and maps errors to a
//! nonzero exit status. All diagnostics go to stderr; stdout carries only
//! JSON.

use clap::{Parser, ValueEnum};
use colored::Colorize;
use jsonfmt::{FormatOptions, Pipeline, Summary};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "jsonfmt")]
#[command(about = "Pretty-print, minify, sort and highlight JSON streams", long_about = None)]
#[command(version)]
struct Cli {
    /// Input JSON file (stdin if omitted)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted); writing to a file disables color
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Indentation unit (spaces or tabs)
    #[arg(long, default_value = "  ", value_name = "STR")]
    indent: String,

    /// Prefix for each output line
    #[arg(long, default_value = "", value_name = "STR")]
    prefix: String,

    /// Compact JSON (minify); indent and prefix are ignored
    #[arg(short = 'c', long)]
    compact: bool,

    /// Sort object keys alphabetically at every nesting depth
    #[arg(short = 's', long = "sort-keys")]
    sort_keys: bool,

    /// When to colorize output written to stdout
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,

    /// Validate input only; no JSON output, report the value count
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    /// Color when stdout is a terminal
    Auto,
    /// Color whenever writing to stdout
    Always,
    /// Never color
    Never,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            print_error(&message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let reader: Box<dyn Read> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("Error opening file {}: {}", path.display(), e))?;
            print_info(&format!("Processing: {}", path.display()));
            Box::new(BufReader::new(file))
        }
        None => {
            if io::stdin().is_terminal() {
                return Err("No input provided. Use -i or pipe data.".to_string());
            }
            Box::new(io::stdin().lock())
        }
    };

    let colorize = match cli.color {
        ColorMode::Never => false,
        ColorMode::Always => cli.output.is_none(),
        ColorMode::Auto => cli.output.is_none() && io::stdout().is_terminal(),
    };

    let options = FormatOptions::new()
        .with_indent(cli.indent.clone())
        .with_prefix(cli.prefix.clone())
        .with_compact(cli.compact)
        .with_sort_keys(cli.sort_keys)
        .with_colorize(colorize)
        .with_validate_only(cli.validate);

    let pipeline = Pipeline::new(options);

    let summary: Summary = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Error creating output file {}: {}", path.display(), e))?;
            let mut writer = BufWriter::new(file);
            let summary = pipeline.run(reader, &mut writer).map_err(|e| e.to_string())?;
            writer.flush().map_err(|e| e.to_string())?;
            summary
        }
        None => {
            let stdout = io::stdout();
            pipeline
                .run(reader, stdout.lock())
                .map_err(|e| e.to_string())?
        }
    };

    if cli.validate {
        print_success(&format!("Validated {} JSON value(s)", summary.processed));
    } else if let Some(path) = &cli.output {
        print_success(&format!("Saved to: {}", path.display()));
    }

    Ok(())
}

fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message.red());
}

fn print_success(message: &str) {
    eprintln!("{} {}", "[✓]".green().bold(), message.green());
}

fn print_info(message: &str) {
    eprintln!("{} {}", "[→]".blue(), message);
}
