// src/lib.rs

//! Platter recipe browser
//!
//! Loads a static recipe dataset once and narrows it with a free-text query
//! and three multi-select facets (ingredients, appliances, utensils).
//!
//! # Architecture
//!
//! - Recipe Store: read-only collection, loaded once from a file or URL
//! - Filter Engine: pure, order-preserving filter over the collection
//! - Selection State: per-facet sets of lowercased values
//! - Search Session: explicit owner of query and selection, driven by typed events
//! - Renderers: text, HTML and JSON output plus the result count label

pub mod config;
mod error;
pub mod filter;
pub mod recipe;
pub mod render;
pub mod selection;
pub mod session;
pub mod store;

pub use config::{load_config, Config, ConfigError, DataConfig, DisplayConfig, DEFAULT_CONFIG_PATH};
pub use error::{Error, Result};
pub use filter::{extract_facets, filter, matches_query, matches_selection, FacetVocabulary};
pub use recipe::{Dataset, Ingredient, Recipe};
pub use render::{
    capitalize_first, count_label, escape_html, renderer_for, truncate_description, HtmlRenderer,
    JsonRenderer, OutputFormat, Renderer, TextRenderer,
};
pub use selection::{normalize, Facet, SelectionState};
pub use session::{SearchSession, SessionEvent};
pub use store::{DataSource, RecipeClient, RecipeStore};
