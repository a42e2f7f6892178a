// src/selection.rs

//! Facets and the user's current facet selection

use serde::Serialize;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A categorical filter dimension
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Facet {
    #[strum(to_string = "ingredients", serialize = "ingredient")]
    Ingredients,
    #[strum(to_string = "appliances", serialize = "appliance")]
    Appliances,
    #[strum(
        to_string = "ustensils",
        serialize = "ustensil",
        serialize = "utensils",
        serialize = "utensil"
    )]
    Ustensils,
}

/// Chosen facet values, one set per facet
///
/// Values are lowercased on the way in, so membership is case-insensitive.
/// The sets are ordered so that selected values always list the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    ingredients: BTreeSet<String>,
    appliances: BTreeSet<String>,
    ustensils: BTreeSet<String>,
}

/// Canonical form of a facet value: trimmed and lowercased
///
/// Selection, vocabulary extraction and facet matching all compare values in
/// this form, so every vocabulary option selects its own source recipes.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

impl SelectionState {
    /// Empty selection: every facet unconstrained
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`add`](Self::add)
    pub fn with(mut self, facet: Facet, value: &str) -> Self {
        self.add(facet, value);
        self
    }

    /// Select a value
    ///
    /// Returns `false` for a blank value or one that was already selected.
    pub fn add(&mut self, facet: Facet, value: &str) -> bool {
        let value = normalize(value);
        if value.is_empty() {
            return false;
        }
        self.set_mut(facet).insert(value)
    }

    /// Deselect a value, returning whether it was selected
    pub fn remove(&mut self, facet: Facet, value: &str) -> bool {
        self.set_mut(facet).remove(&normalize(value))
    }

    /// Whether a value is selected (case-insensitive)
    pub fn contains(&self, facet: Facet, value: &str) -> bool {
        self.values(facet).contains(&normalize(value))
    }

    /// Selected values of one facet, lowercased
    pub fn values(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Ingredients => &self.ingredients,
            Facet::Appliances => &self.appliances,
            Facet::Ustensils => &self.ustensils,
        }
    }

    fn set_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Ingredients => &mut self.ingredients,
            Facet::Appliances => &mut self.appliances,
            Facet::Ustensils => &mut self.ustensils,
        }
    }

    /// All selected values as `(facet, value)` pairs, facet by facet
    pub fn iter(&self) -> impl Iterator<Item = (Facet, &str)> {
        Facet::iter().flat_map(move |facet| self.values(facet).iter().map(move |v| (facet, v.as_str())))
    }

    /// Total number of selected values
    pub fn len(&self) -> usize {
        self.ingredients.len() + self.appliances.len() + self.ustensils.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
