use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use locgen::{GenerateOptions, generate};

/// Generate localization accessor code from a tree of translation source
/// files (JSON, YAML, TOML, CSV, zipped bundles).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input localizations folder
    #[arg(short, long)]
    input: PathBuf,

    /// Where to output the generated module
    #[arg(short, long, default_value = locgen::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let options = GenerateOptions::new(args.input, Some(args.output));

    match generate(&options) {
        Ok(report) => {
            for warning in &report.warnings {
                eprintln!("warning: {warning}");
            }
            println!(
                "Generated {} key(s) from {} file(s) into {}",
                report.key_names,
                report.files,
                options.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
