// src/recipe/parser.rs

//! Dataset parsing

use crate::error::{Error, Result};
use crate::recipe::format::Dataset;
use std::collections::HashSet;
use std::path::Path;

/// Parse a dataset from a JSON string
///
/// Fails when the document is not JSON or has no top-level `recipes` array.
pub fn parse_dataset(content: &str) -> Result<Dataset> {
    serde_json::from_str(content).map_err(|e| Error::ParseError(format!("Invalid recipe dataset: {}", e)))
}

/// Parse a dataset from a file
pub fn parse_dataset_file(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::IoError(format!("Failed to read {}: {}", path.display(), e)))?;

    parse_dataset(&content)
}

/// Check a dataset for problems that do not prevent browsing it
///
/// Returns one warning per duplicate id and per unnamed recipe.
pub fn validate_dataset(dataset: &Dataset) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for recipe in &dataset.recipes {
        if !seen.insert(recipe.id) {
            warnings.push(format!("Duplicate recipe id {}", recipe.id));
        }
        if recipe.name.trim().is_empty() {
            warnings.push(format!("Recipe {} has no name", recipe.id));
        }
    }

    warnings
}
