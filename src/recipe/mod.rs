// src/recipe/mod.rs

//! Recipe records and dataset decoding
//!
//! A dataset is a JSON document with a single top-level `recipes` array:
//!
//! ```json
//! {
//!   "recipes": [
//!     {
//!       "id": 1,
//!       "name": "Limonade de Coco",
//!       "servings": 1,
//!       "ingredients": [
//!         { "ingredient": "Lait de coco", "quantity": 400, "unit": "ml" },
//!         { "ingredient": "Glaçons" }
//!       ],
//!       "time": 10,
//!       "description": "Mettre les glaçons à votre goût dans le blender...",
//!       "appliance": "Blender",
//!       "ustensils": ["cuillère à Soupe", "verres", "presse citron"],
//!       "image": "Recette01.jpg"
//!     }
//!   ]
//! }
//! ```
//!
//! Every record field is optional on the wire. Missing, `null` or mistyped
//! fields decode to their empty value, and entries that are not records at
//! all are skipped, so one sloppy record never sinks the whole dataset.

mod format;
mod lenient;
pub mod parser;

pub use format::{Dataset, Ingredient, Recipe};
pub use parser::{parse_dataset, parse_dataset_file, validate_dataset};
