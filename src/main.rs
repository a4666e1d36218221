//! Binary entry point for paddock.
//!
//! This binary provides the CLI interface for the zoo placement advisor.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print macros in the main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use paddock::config::{OutputFormat, PaddockConfig};
use paddock::services::PlacementService;
use paddock::{Catalog, rendering};
use std::path::PathBuf;
use std::process::ExitCode;

/// Paddock - a zoo enclosure placement advisor.
#[derive(Parser)]
#[command(name = "paddock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to a TOML catalog file (defaults to the built-in zoo).
    #[arg(long, global = true, env = "PADDOCK_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Find enclosures that can take the requested animals.
    Place {
        /// Species name (lowercase). Prompts on stdin when omitted.
        species: Option<String>,

        /// Number of animals to place.
        quantity: Option<i64>,

        /// Output format: table or json.
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show the enclosure and species tables.
    Catalog {
        /// Output format: table or json.
        #[arg(short, long)]
        format: Option<String>,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    paddock::observability::init(cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    match run_command(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration.
fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<PaddockConfig> {
    path.map_or_else(
        || Ok(PaddockConfig::load_default()),
        |p| PaddockConfig::load_from_file(p).context("loading config file"),
    )
}

/// Runs the selected command.
fn run_command(cli: Cli, config: PaddockConfig) -> anyhow::Result<()> {
    let catalog = load_catalog(cli.catalog.as_ref().or(config.catalog_path.as_ref()))?;

    match cli.command {
        Commands::Place {
            species,
            quantity,
            format,
        } => cmd_place(
            &catalog,
            species,
            quantity,
            output_format(format, &config),
        ),
        Commands::Catalog { format } => cmd_catalog(&catalog, output_format(format, &config)),
    }
}

/// Resolves the output format from the flag or the config default.
fn output_format(flag: Option<String>, config: &PaddockConfig) -> OutputFormat {
    flag.as_deref()
        .map_or(config.default_format, OutputFormat::parse)
}

/// Loads the catalog from a file, or the built-in reference zoo.
fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    path.map_or_else(
        || Ok(Catalog::reference()),
        |p| Catalog::load_from_file(p).context("loading catalog file"),
    )
}

/// Place command.
fn cmd_place(
    catalog: &Catalog,
    species: Option<String>,
    quantity: Option<i64>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let (species, quantity) = match (species, quantity) {
        (Some(s), Some(q)) => (s.to_lowercase(), q),
        (Some(s), None) => {
            anyhow::bail!(paddock::Error::InvalidInput(format!(
                "missing quantity for '{s}'"
            )))
        },
        _ => {
            let (s, q) = read_request_line()?;
            // Interactive mode shows the exhibit tables before the verdict.
            if format == OutputFormat::Table {
                println!("{}", rendering::enclosure_table(catalog));
                println!("{}", rendering::species_table(catalog));
            }
            (s, q)
        },
    };

    let report = PlacementService::new(catalog).find_placements(&species, quantity)?;

    match format {
        OutputFormat::Table => print!("{}", rendering::report_table(&report)),
        OutputFormat::Json => println!("{}", rendering::report_json(&report)),
    }

    Ok(())
}

/// Catalog command.
fn cmd_catalog(catalog: &Catalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", rendering::enclosure_table(catalog));
            print!("{}", rendering::species_table(catalog));
        },
        OutputFormat::Json => println!("{}", rendering::catalog_json(catalog)),
    }
    Ok(())
}

/// Prompts for and reads one `<species> <quantity>` line from stdin.
fn read_request_line() -> anyhow::Result<(String, i64)> {
    use std::io::Write as _;

    print!("Enter the species and quantity (separated by a space): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    parse_request_line(&line).map_err(Into::into)
}

/// Splits an input line into a lowercase species name and a quantity.
///
/// Malformed text is the input layer's problem and reported as
/// `InvalidInput`; the core only ever sees a well-typed request.
fn parse_request_line(line: &str) -> paddock::Result<(String, i64)> {
    let mut parts = line.split_whitespace();
    let (Some(species), Some(quantity), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(paddock::Error::InvalidInput(format!(
            "expected '<species> <quantity>', got '{}'",
            line.trim()
        )));
    };

    let quantity: i64 = quantity.parse().map_err(|_| {
        paddock::Error::InvalidInput(format!("'{quantity}' is not a whole number"))
    })?;

    Ok((species.to_lowercase(), quantity))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_request_line() {
        assert_eq!(
            parse_request_line("Monkey 2\n").unwrap(),
            ("monkey".to_string(), 2)
        );
        assert_eq!(
            parse_request_line("  crocodile   1  ").unwrap(),
            ("crocodile".to_string(), 1)
        );
        // Negative quantities parse here; the core rejects them later.
        assert_eq!(
            parse_request_line("lion -1").unwrap(),
            ("lion".to_string(), -1)
        );
    }

    #[test]
    fn test_parse_request_line_rejects_malformed_input() {
        assert!(parse_request_line("").is_err());
        assert!(parse_request_line("monkey").is_err());
        assert!(parse_request_line("monkey two").is_err());
        assert!(parse_request_line("monkey 2 extra").is_err());
    }

    #[test]
    fn test_output_format_resolution() {
        let config = PaddockConfig {
            default_format: OutputFormat::Json,
            ..PaddockConfig::default()
        };
        assert_eq!(
            output_format(Some("table".to_string()), &config),
            OutputFormat::Table
        );
        assert_eq!(output_format(None, &config), OutputFormat::Json);
    }
}
