// src/filter/facets.rs

//! Facet vocabulary: the choices offered for each facet

use crate::recipe::Recipe;
use crate::selection::{normalize, Facet};
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct lowercased facet values of a recipe collection
///
/// Built once from the full, unfiltered collection. Filtering recipes never
/// shrinks the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetVocabulary {
    pub ingredients: BTreeSet<String>,
    pub appliances: BTreeSet<String>,
    pub ustensils: BTreeSet<String>,
}

/// Collect the vocabulary of `recipes`
pub fn extract_facets(recipes: &[Recipe]) -> FacetVocabulary {
    let mut vocabulary = FacetVocabulary::default();

    for recipe in recipes {
        for name in recipe.ingredient_names() {
            insert_normalized(&mut vocabulary.ingredients, name);
        }
        insert_normalized(&mut vocabulary.appliances, &recipe.appliance);
        for ustensil in &recipe.ustensils {
            insert_normalized(&mut vocabulary.ustensils, ustensil);
        }
    }

    vocabulary
}

fn insert_normalized(set: &mut BTreeSet<String>, value: &str) {
    let value = normalize(value);
    if !value.is_empty() {
        set.insert(value);
    }
}

impl FacetVocabulary {
    /// Choices for one facet, sorted
    pub fn values(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Ingredients => &self.ingredients,
            Facet::Appliances => &self.appliances,
            Facet::Ustensils => &self.ustensils,
        }
    }

    /// Choices of one facet containing `needle`, case-insensitively
    ///
    /// This narrows a facet's option list as the user types into it; an
    /// empty needle keeps every option.
    pub fn search(&self, facet: Facet, needle: &str) -> Vec<&str> {
        let needle = needle.to_lowercase();
        self.values(facet)
            .iter()
            .filter(|value| value.contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Total number of choices across all facets
    pub fn len(&self) -> usize {
        self.ingredients.len() + self.appliances.len() + self.ustensils.len()
    }

    /// Whether there are no choices at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
