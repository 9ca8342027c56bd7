//! `convert` - turn a PNG into a raw RGB565 blob for firmware.
//!
//! ```text
//! convert <input.png> <output.bin>
//! ```
//!
//! Exits 0 on success and 1 on a usage error or a failed conversion.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use log::{debug, LevelFilter};
use rgb565_core::{convert_source, decode_file, render_snippet, ConvertReport, ImageSource, SnippetOptions};

#[derive(Debug, Parser)]
#[command(version, about = "Convert a PNG to raw RGB565 data for embedding in firmware")]
struct Cli {
    /// Image to convert
    input: PathBuf,

    /// Where to write the RGB565 blob
    output: PathBuf,

    /// Constant name used in the printed embedding snippet
    #[arg(long, default_value = "EMBEDDED_IMAGE")]
    const_name: String,

    /// Don't print the embedding snippet
    #[arg(long)]
    no_snippet: bool,

    /// Print the conversion report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn snippet_options(&self) -> SnippetOptions {
        SnippetOptions {
            const_name: self.const_name.clone(),
            enabled: !self.no_snippet && !self.json,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .try_init();

    match run(&cli) {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("Conversion successful!");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("Conversion failed!");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ConvertReport> {
    let image = decode_file(&cli.input)
        .with_context(|| format!("failed to decode {}", cli.input.display()))?;
    if !cli.json {
        println!(
            "Converting {}: {}x{}",
            cli.input.display(),
            image.width(),
            image.height()
        );
    }

    let report = convert_source(&image, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    debug!("output file is {} bytes", report.file_len());

    if !cli.json {
        println!(
            "Wrote {} pixels ({} bytes) to {}",
            report.pixel_count,
            report.byte_count,
            cli.output.display()
        );
    }

    let options = cli.snippet_options();
    if options.enabled {
        println!("Add this to your Rust code:");
        print!("{}", render_snippet(&cli.output, &options));
    }

    Ok(report)
}
