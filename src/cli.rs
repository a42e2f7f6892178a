// src/cli.rs
//! CLI definitions for the platter recipe browser
//!
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use platter::{Facet, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "platter")]
#[command(author, version)]
#[command(about = "Browse a recipe collection with free-text search and facet filters", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./platter.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Recipe dataset: local path, file:// URL or http(s):// URL
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search recipes by text and facets
    Search {
        /// Text matched against names, ingredients and descriptions
        #[arg(default_value = "")]
        query: String,

        /// Required ingredient (repeatable, all must be present)
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,

        /// Accepted appliance (repeatable, any may match)
        #[arg(short, long = "appliance")]
        appliances: Vec<String>,

        /// Required utensil (repeatable, all must be present)
        #[arg(short, long = "ustensil", visible_alias = "utensil")]
        ustensils: Vec<String>,

        /// Output format: text, html, json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List facet choices of the whole collection
    Facets {
        /// Only this facet (ingredients, appliances, ustensils)
        facet: Option<Facet>,

        /// Keep only choices containing this text
        #[arg(long)]
        filter: Option<String>,
    },

    /// Show a single recipe
    Show {
        /// Recipe id
        id: u32,

        /// Output format: text, html, json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Interactive browsing: read events from stdin, one per line
    ///
    /// Events: `query <text>`, `clear`, `add <facet> <value>`,
    /// `remove <facet> <value>`, `quit`.
    Browse,
}
