use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use common::{init_logging, AppConfig, LoggingConfig, Translator};
use tracing::debug;

mod commands;

/// Translation file probed when --i18n is not given
const DEFAULT_I18N_FILE: &str = "i18n.json";

#[derive(Parser)]
#[command(name = "fuzzyheat")]
#[command(about = "Trapezoidal fuzzy membership visualizer for a heating system")]
#[command(version)]
struct Cli {
    /// Variables configuration file (JSON); built-in heating-system
    /// defaults when omitted
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Translation file (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    i18n: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chart view with a live membership query box (default)
    Tui,
    /// Print the aggregated membership value for one reading
    Query {
        /// The reading to look up, e.g. 60
        point: String,
        /// Variable title; the configured query variable when omitted
        #[arg(long)]
        variable: Option<String>,
    },
    /// Print the aggregated point table of a variable
    Table {
        /// Variable title; the configured query variable when omitted
        #[arg(long)]
        variable: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the log stream away from the alternate screen
    let logging = match cli.command {
        None | Some(Commands::Tui) => LoggingConfig::quiet(),
        _ => LoggingConfig::default(),
    };
    init_logging(&logging)?;

    let config = match &cli.config {
        Some(path) => AppConfig::from_path(path)?,
        None => AppConfig::default(),
    };
    let translator = load_translator(cli.i18n.as_deref());

    let variables = config.build_variables()?;
    debug!(count = variables.len(), "Built and aggregated variables");

    match cli.command {
        None | Some(Commands::Tui) => {
            commands::tui::run(variables, translator, &config.query_variable)
        }
        Some(Commands::Query { point, variable }) => commands::query::run(
            &variables,
            &translator,
            variable.as_deref().unwrap_or(&config.query_variable),
            &point,
        ),
        Some(Commands::Table { variable }) => commands::table::run(
            &variables,
            &translator,
            variable.as_deref().unwrap_or(&config.query_variable),
        ),
    }
}

/// An explicit --i18n path is loaded with a warning on failure; without
/// the flag the conventional file is only consulted when present.
fn load_translator(path: Option<&Path>) -> Translator {
    match path {
        Some(path) => Translator::from_path(path),
        None => {
            let conventional = Path::new(DEFAULT_I18N_FILE);
            if conventional.exists() {
                Translator::from_path(conventional)
            } else {
                Translator::empty()
            }
        }
    }
}
