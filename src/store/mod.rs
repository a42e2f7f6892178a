// src/store/mod.rs

//! Recipe Store: the read-only recipe collection
//!
//! The store is filled once, at startup, from a [`DataSource`] and is never
//! modified afterwards. Two loading flavors exist:
//!
//! - [`RecipeStore::try_load`] returns a typed error on failure
//! - [`RecipeStore::load`] logs the failure and yields an empty store, so a
//!   broken dataset shows up as "no results" rather than a crash

mod client;
mod source;

pub use client::RecipeClient;
pub use source::DataSource;

use crate::error::Result;
use crate::recipe::{parse_dataset_file, validate_dataset, Dataset, Recipe};
use tracing::{error, info, warn};

/// Ordered, immutable recipe collection
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Build a store from already-decoded recipes
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// An empty store
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from a decoded dataset, logging validation warnings
    pub fn from_dataset(dataset: Dataset) -> Self {
        for warning in validate_dataset(&dataset) {
            warn!("{}", warning);
        }
        Self::new(dataset.recipes)
    }

    /// Load the dataset, failing on any fetch or decode error
    pub fn try_load(source: &DataSource) -> Result<Self> {
        let dataset = match source {
            DataSource::Url(url) => RecipeClient::new()?.fetch_dataset(url)?,
            DataSource::Path(path) => {
                info!("Reading recipe dataset from {}", path.display());
                parse_dataset_file(path)?
            }
        };

        let store = Self::from_dataset(dataset);
        info!("Loaded {} recipes from {}", store.len(), source);
        Ok(store)
    }

    /// Load the dataset, falling back to an empty store on failure
    pub fn load(source: &DataSource) -> Self {
        match Self::try_load(source) {
            Ok(store) => store,
            Err(e) => {
                error!("Failed to load recipes from {}: {}", source, e);
                Self::empty()
            }
        }
    }

    /// All recipes in dataset order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by id
    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Number of recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the store holds no recipes
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
