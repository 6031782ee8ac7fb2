//! unitwise CLI — the main entry point.
//!
//! Usage:
//! - `unitwise [--json] <VALUE> <SRC_UNIT> <TGT_UNIT>` — convert a value
//! - `unitwise units`  — list supported units
//! - `unitwise ask`    — ask the conversational agent
//! - `unitwise config` — inspect configuration
//! - `unitwise doctor` — diagnose setup

use clap::{Args, CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "unitwise",
    about = "unitwise — unit conversion helper",
    version,
    args_conflicts_with_subcommands = true,
    allow_negative_numbers = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct ConvertArgs {
    /// Numeric value to convert
    value: Option<f64>,

    /// Source unit, e.g. 'km'
    src_unit: Option<String>,

    /// Target unit, e.g. 'm'
    tgt_unit: Option<String>,

    /// Emit the result as a JSON object (value + metadata)
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported units by category
    Units,

    /// Ask the conversational agent (needs an orchestration backend)
    Ask {
        /// The request, e.g. "how many feet are in a mile?"
        message: String,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Diagnose setup
    Doctor,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Validate the config file
    Validate,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Some(Commands::Units) => commands::units::run(),
        Some(Commands::Ask { message }) => commands::ask::run(&message).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config_cmd::show(),
            ConfigAction::Path => commands::config_cmd::path(),
            ConfigAction::Validate => commands::config_cmd::validate(),
        },
        Some(Commands::Doctor) => commands::doctor::run().await,
        None => {
            let ConvertArgs {
                value,
                src_unit,
                tgt_unit,
                json,
            } = cli.convert;
            match (value, src_unit, tgt_unit) {
                (Some(value), Some(src_unit), Some(tgt_unit)) => {
                    commands::convert::run(value, &src_unit, &tgt_unit, json)
                }
                _ => Cli::command()
                    .error(
                        clap::error::ErrorKind::MissingRequiredArgument,
                        "expected <VALUE> <SRC_UNIT> <TGT_UNIT> or a subcommand",
                    )
                    .exit(),
            }
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_conversion() {
        let cli = Cli::try_parse_from(["unitwise", "1", "km", "m", "--json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.convert.value, Some(1.0));
        assert_eq!(cli.convert.src_unit.as_deref(), Some("km"));
        assert_eq!(cli.convert.tgt_unit.as_deref(), Some("m"));
        assert!(cli.convert.json);
    }

    #[test]
    fn parses_negative_value() {
        let cli = Cli::try_parse_from(["unitwise", "-40", "lb", "kg"]).unwrap();
        assert_eq!(cli.convert.value, Some(-40.0));
    }

    #[test]
    fn rejects_non_numeric_value() {
        assert!(Cli::try_parse_from(["unitwise", "ten", "km", "m"]).is_err());
    }

    #[test]
    fn parses_subcommand() {
        let cli = Cli::try_parse_from(["unitwise", "ask", "1 mile in km?"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Ask { .. })));
    }
}
