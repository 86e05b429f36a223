use std::process::ExitCode;

use barcodegen::symbology::Symbology;
use barcodegen::validate::{validate, ValidationResult};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Check barcode input against the rules of its symbology.
#[derive(Parser)]
#[command(name = "barcodegen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate TEXT for a barcode format. Exits with 1 if it is rejected.
    Validate {
        /// The text to encode. Taken as-is, without trimming.
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Barcode format identifier (see `formats`).
        #[arg(short, long, default_value_t = Symbology::Code128)]
        format: Symbology,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the supported barcode formats and their input rules.
    Formats {
        /// Print the list as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct FormatInfo {
    id: Symbology,
    label: &'static str,
    rule: Option<&'static str>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}

fn run(command: Command) -> Result<ExitCode, serde_json::Error> {
    match command {
        Command::Validate { text, format, json } => {
            let result = validate(&text, format);
            debug!(%format, accepted = result.is_accepted(), "validated input");
            if json {
                println!("{}", serde_json::to_string(&result)?);
            } else {
                match &result {
                    ValidationResult::Accepted => println!("ok"),
                    ValidationResult::Rejected(reason) => println!("{reason}"),
                }
            }
            Ok(if result.is_accepted() { ExitCode::SUCCESS } else { ExitCode::from(1) })
        }
        Command::Formats { json } => {
            let formats: Vec<FormatInfo> = Symbology::ALL
                .into_iter()
                .map(|id| FormatInfo { id, label: id.label(), rule: id.rule().map(|rule| rule.message()) })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&formats)?);
            } else {
                for info in &formats {
                    println!("{:<12}{:<12}{}", info.id.id(), info.label, info.rule.unwrap_or("any input"));
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
