// src/commands/mod.rs
//! Command handlers for the platter CLI

mod browse;
mod facets;
mod search;
mod show;

pub use browse::cmd_browse;
pub use facets::cmd_facets;
pub use search::cmd_search;
pub use show::cmd_show;

use platter::{Config, DataSource, RecipeStore};

/// Settings shared by every command
pub struct Context {
    pub config: Config,
    pub source: DataSource,
}

impl Context {
    /// Load the recipe store, falling back to an empty one on failure
    pub fn load_store(&self) -> RecipeStore {
        RecipeStore::load(&self.source)
    }
}
