// ABOUTME: Dipper CLI - shopping guide and recipe availability from the command line
// ABOUTME: Loads a catalog, seeds the pump selection, and prints the derived views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors
//!
//! Usage:
//! ```bash
//! # Shopping guide with gin already loaded, then try adding tonic
//! dipper-cli --catalog cocktails.json guide --stock gin --toggle tonic
//!
//! # Every recipe with what it is missing
//! dipper-cli --catalog cocktails.json available --stock vodka,"orange juice"
//!
//! # Can one recipe be poured?
//! dipper-cli --catalog cocktails.json can-make "Screwdriver" --stock vodka
//!
//! # How many recipes use each ingredient
//! dipper-cli --catalog cocktails.yaml usage
//!
//! # Report catalog precondition violations
//! dipper-cli --catalog cocktails.yaml lint
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dipper::catalog::{CatalogSource, FileCatalogSource};
use dipper::config::AppConfig;
use dipper::errors::{AppError, ErrorCode};
use dipper::intelligence::ConfigError;
use dipper::logging::LoggingConfig;
use tracing::debug;

use helpers::display::display_error;

#[derive(Parser)]
#[command(
    name = "dipper-cli",
    about = "Dipper ingredient planner",
    long_about = "Work out which cocktails the loaded pumps can pour and which ingredient to load next."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog file (.json, .yaml, .yml); defaults to DIPPER_CATALOG_PATH
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Pump capacity override; defaults to DIPPER_PUMP_CAPACITY or 8
    #[arg(long, global = true)]
    capacity: Option<usize>,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Ranked ingredient list with unlock and usage counts
    Guide {
        /// Ingredients already loaded on the pumps (comma-separated)
        #[arg(long, value_delimiter = ',')]
        stock: Vec<String>,

        /// Toggle an ingredient after seeding; repeat to apply several in order
        #[arg(long)]
        toggle: Vec<String>,
    },

    /// Availability of every recipe with its missing ingredients
    Available {
        /// Ingredients loaded on the pumps (comma-separated)
        #[arg(long, value_delimiter = ',')]
        stock: Vec<String>,

        /// Only list recipes that can be poured
        #[arg(long)]
        only_available: bool,
    },

    /// Availability of a single recipe
    CanMake {
        /// Exact recipe name
        name: String,

        /// Ingredients loaded on the pumps (comma-separated)
        #[arg(long, value_delimiter = ',')]
        stock: Vec<String>,
    },

    /// Number of recipes using each ingredient
    Usage,

    /// Report catalog precondition violations
    Lint,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error, json);
            let code = error.downcast_ref::<AppError>().map_or_else(
                || {
                    error
                        .downcast_ref::<ConfigError>()
                        .map_or(1, |_| ErrorCode::ConfigInvalid.exit_code())
                },
                |app_error| app_error.code.exit_code(),
            );
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = AppConfig::from_env_with_capacity(cli.capacity)?;
    debug!("{}", config.summary());

    let path = cli
        .catalog
        .or_else(|| config.catalog_path.clone())
        .ok_or_else(|| {
            AppError::new(
                ErrorCode::ConfigMissing,
                "no catalog given; pass --catalog or set DIPPER_CATALOG_PATH",
            )
        })?;
    let source = FileCatalogSource::new(path);
    debug!(source = %source.describe(), "Loading catalog");
    let catalog = source.load()?;

    match cli.command {
        Command::Guide { stock, toggle } => {
            commands::guide::show(catalog, &config.planner, stock, &toggle, cli.json)?;
        }
        Command::Available {
            stock,
            only_available,
        } => {
            commands::recipes::available(&catalog, &config.planner, stock, only_available, cli.json)?;
        }
        Command::CanMake { name, stock } => {
            commands::recipes::can_make(&catalog, &config.planner, stock, &name, cli.json)?;
        }
        Command::Usage => commands::ingredients::usage(&catalog, cli.json)?,
        Command::Lint => commands::ingredients::lint(&catalog, cli.json)?,
    }

    Ok(())
}
