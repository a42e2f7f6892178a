// src/commands/facets.rs
//! Facet vocabulary listing

use super::Context;
use anyhow::Result;
use platter::{capitalize_first, extract_facets, Facet};
use strum::IntoEnumIterator;

/// Print the choices of one facet, or of all of them
pub fn cmd_facets(ctx: &Context, facet: Option<Facet>, needle: Option<&str>) -> Result<()> {
    let store = ctx.load_store();
    let vocabulary = extract_facets(store.recipes());
    let needle = needle.unwrap_or("");

    let facets: Vec<Facet> = match facet {
        Some(facet) => vec![facet],
        None => Facet::iter().collect(),
    };

    for (i, facet) in facets.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        let choices = vocabulary.search(facet, needle);
        println!("{} ({}):", capitalize_first(facet.as_ref()), choices.len());
        for choice in choices {
            println!("  {}", capitalize_first(choice));
        }
    }
    Ok(())
}
