// src/filter/mod.rs

//! Filter Engine: free-text search plus facet filtering
//!
//! [`filter`] is a pure function of the recipe collection, the query and the
//! selection. It keeps the input order and never fails; no match simply
//! yields an empty result.
//!
//! A recipe passes when both hold:
//!
//! - **Text match**: the lowercased query is a substring of the name, of any
//!   single ingredient name, or of the description. An empty query matches
//!   everything.
//! - **Facet match**: every selected ingredient and every selected utensil is
//!   present in the recipe (AND), and, when any appliance is selected, the
//!   recipe's appliance is one of them.

mod facets;

pub use facets::{extract_facets, FacetVocabulary};

use crate::recipe::Recipe;
use crate::selection::{normalize, Facet, SelectionState};
use tracing::debug;

/// Recipes matching `query` and `selection`, in collection order
pub fn filter<'a>(recipes: &'a [Recipe], query: &str, selection: &SelectionState) -> Vec<&'a Recipe> {
    let query = query.to_lowercase();

    let matched: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| matches_query(recipe, &query) && matches_selection(recipe, selection))
        .collect();

    debug!(
        "Filter '{}' with {} selected values: {}/{} recipes",
        query,
        selection.len(),
        matched.len(),
        recipes.len()
    );

    matched
}

/// Text match against an already-lowercased query
pub fn matches_query(recipe: &Recipe, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    recipe.name.to_lowercase().contains(query)
        || recipe
            .ingredient_names()
            .any(|name| name.to_lowercase().contains(query))
        || recipe.description.to_lowercase().contains(query)
}

/// Facet match: AND across ingredients and utensils, membership for appliance
pub fn matches_selection(recipe: &Recipe, selection: &SelectionState) -> bool {
    let ingredients_match = selection
        .values(Facet::Ingredients)
        .iter()
        .all(|wanted| recipe.ingredient_names().any(|name| normalize(name) == *wanted));

    let appliances = selection.values(Facet::Appliances);
    let appliance_match = appliances.is_empty() || appliances.contains(&normalize(&recipe.appliance));

    let ustensils_match = selection
        .values(Facet::Ustensils)
        .iter()
        .all(|wanted| recipe.ustensils.iter().any(|u| normalize(u) == *wanted));

    ingredients_match && appliance_match && ustensils_match
}
