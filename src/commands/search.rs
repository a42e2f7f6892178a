// src/commands/search.rs
//! Recipe search command

use super::Context;
use anyhow::Result;
use platter::{count_label, filter, renderer_for, Facet, OutputFormat, SelectionState};
use tracing::info;

/// Filter the collection and print the matching recipes
pub fn cmd_search(
    ctx: &Context,
    query: &str,
    ingredients: &[String],
    appliances: &[String],
    ustensils: &[String],
    format: OutputFormat,
) -> Result<()> {
    let selection = build_selection(ingredients, appliances, ustensils);
    info!(
        "Searching for '{}' with {} selected facet values",
        query,
        selection.len()
    );

    let store = ctx.load_store();
    let matches = filter(store.recipes(), query, &selection);

    let display = &ctx.config.display;
    let output = renderer_for(format, display).render(&matches)?;

    if format == OutputFormat::Json {
        println!("{}", output);
    } else {
        println!("{}", count_label(matches.len(), &display.singular, &display.plural));
        if !output.is_empty() {
            println!();
            print!("{}", output);
        }
    }
    Ok(())
}

fn build_selection(ingredients: &[String], appliances: &[String], ustensils: &[String]) -> SelectionState {
    let mut selection = SelectionState::new();
    for (facet, values) in [
        (Facet::Ingredients, ingredients),
        (Facet::Appliances, appliances),
        (Facet::Ustensils, ustensils),
    ] {
        for value in values {
            selection.add(facet, value);
        }
    }
    selection
}
