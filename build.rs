// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: output format
fn format_arg() -> Arg {
    Arg::new("format")
        .short('f')
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .help("Output format: text, html, json")
}

fn build_cli() -> Command {
    Command::new("platter")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Platter Contributors")
        .about("Browse a recipe collection with free-text search and facet filters")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Configuration file (default: ./platter.toml when present)"),
        )
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("SOURCE")
                .global(true)
                .help("Recipe dataset: local path, file:// URL or http(s):// URL"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("search")
                .about("Search recipes by text and facets")
                .arg(Arg::new("query").help("Text matched against names, ingredients and descriptions"))
                .arg(
                    Arg::new("ingredient")
                        .short('i')
                        .long("ingredient")
                        .action(ArgAction::Append)
                        .help("Required ingredient (repeatable, all must be present)"),
                )
                .arg(
                    Arg::new("appliance")
                        .short('a')
                        .long("appliance")
                        .action(ArgAction::Append)
                        .help("Accepted appliance (repeatable, any may match)"),
                )
                .arg(
                    Arg::new("ustensil")
                        .short('u')
                        .long("ustensil")
                        .action(ArgAction::Append)
                        .help("Required utensil (repeatable, all must be present)"),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("facets")
                .about("List facet choices of the whole collection")
                .arg(Arg::new("facet").help("Only this facet (ingredients, appliances, ustensils)"))
                .arg(Arg::new("filter").long("filter").help("Keep only choices containing this text")),
        )
        .subcommand(
            Command::new("show")
                .about("Show a single recipe")
                .arg(Arg::new("id").required(true).help("Recipe id"))
                .arg(format_arg()),
        )
        .subcommand(Command::new("browse").about("Interactive browsing: read events from stdin, one per line"))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // CARGO_MANIFEST_DIR is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("platter.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
