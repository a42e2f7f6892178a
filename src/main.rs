// src/main.rs

use anyhow::{Context as _, Result};
use clap::Parser;
use platter::{load_config, DataSource};
use tracing::debug;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::Context;

fn init_tracing(verbose: u8) {
    // Default to warnings only so command output stays readable
    let filter = match verbose {
        0 => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        1 => tracing_subscriber::EnvFilter::new("info"),
        _ => tracing_subscriber::EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let source = match &cli.source {
        Some(source) => DataSource::parse(source)?,
        None => config.data_source()?,
    };
    debug!("Using data source {}", source);

    let ctx = Context { config, source };

    match cli.command {
        Commands::Search {
            query,
            ingredients,
            appliances,
            ustensils,
            format,
        } => commands::cmd_search(&ctx, &query, &ingredients, &appliances, &ustensils, format),
        Commands::Facets { facet, filter } => commands::cmd_facets(&ctx, facet, filter.as_deref()),
        Commands::Show { id, format } => commands::cmd_show(&ctx, id, format),
        Commands::Browse => commands::cmd_browse(&ctx),
    }
}
