// src/recipe/format.rs

//! Recipe record definitions

use super::lenient;
use serde::{Deserialize, Serialize};

/// Top-level dataset document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// All recipes, in display order
    #[serde(deserialize_with = "lenient::records")]
    pub recipes: Vec<Recipe>,
}

/// A single recipe card
///
/// Recipes are never mutated once loaded; the filter engine only reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    /// Identifier, unique within a dataset
    #[serde(deserialize_with = "lenient::or_default")]
    pub id: u32,

    /// Display name
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,

    /// Preparation text, possibly several newline-separated paragraphs
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: String,

    /// Total time in minutes
    #[serde(deserialize_with = "lenient::or_default")]
    pub time: u32,

    /// Number of servings
    #[serde(deserialize_with = "lenient::or_default")]
    pub servings: u32,

    /// Ingredients in display order
    #[serde(deserialize_with = "lenient::list")]
    pub ingredients: Vec<Ingredient>,

    /// The one appliance the recipe needs
    #[serde(deserialize_with = "lenient::or_default")]
    pub appliance: String,

    /// Utensils in display order
    #[serde(deserialize_with = "lenient::list")]
    pub ustensils: Vec<String>,

    /// Image filename, resolved against the configured image base
    #[serde(deserialize_with = "lenient::or_default")]
    pub image: String,
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingredient {
    /// Ingredient name
    #[serde(deserialize_with = "lenient::or_default")]
    pub ingredient: String,

    /// Amount, when the recipe gives one
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::quantity")]
    pub quantity: Option<f64>,

    /// Unit for the amount ("ml", "grammes", ...)
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::or_default")]
    pub unit: Option<String>,
}

impl Ingredient {
    /// Create an ingredient with no quantity
    pub fn new(ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            quantity: None,
            unit: None,
        }
    }

    /// Create an ingredient with a quantity and optional unit
    pub fn with_quantity(ingredient: impl Into<String>, quantity: f64, unit: Option<&str>) -> Self {
        Self {
            ingredient: ingredient.into(),
            quantity: Some(quantity),
            unit: unit.map(str::to_string),
        }
    }

    /// Quantity worth showing; a zero quantity counts as unspecified
    pub fn shown_quantity(&self) -> Option<f64> {
        self.quantity.filter(|q| *q != 0.0)
    }

    /// Quantity and unit as shown under the ingredient name, e.g. `"400 ml"`
    ///
    /// Integral quantities print without a decimal part. Returns an empty
    /// string when neither is set.
    pub fn amount(&self) -> String {
        match (self.shown_quantity(), self.unit.as_deref()) {
            (Some(q), Some(u)) if !u.is_empty() => format!("{} {}", q, u),
            (Some(q), _) => q.to_string(),
            (None, Some(u)) => u.to_string(),
            (None, None) => String::new(),
        }
    }
}

impl Recipe {
    /// Ingredient list as one line: `"Lait de coco: 400 ml, Glaçons"`
    pub fn formatted_ingredients(&self) -> String {
        self.ingredients
            .iter()
            .map(|ing| {
                let quantity = ing.shown_quantity().map(|q| format!(": {}", q)).unwrap_or_default();
                let unit = match ing.unit.as_deref() {
                    Some(u) if !u.is_empty() => format!(" {}", u),
                    _ => String::new(),
                };
                format!("{}{}{}", ing.ingredient, quantity, unit)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Utensil list as one line
    pub fn formatted_ustensils(&self) -> String {
        self.ustensils.join(", ")
    }

    /// Iterate over ingredient names
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|ing| ing.ingredient.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limonade() -> Recipe {
        Recipe {
            id: 1,
            name: "Limonade de Coco".to_string(),
            ingredients: vec![
                Ingredient::with_quantity("Lait de coco", 400.0, Some("ml")),
                Ingredient::with_quantity("Jus de citron", 2.0, None),
                Ingredient::new("Glaçons"),
            ],
            ustensils: vec!["cuillère à Soupe".to_string(), "verres".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_formatted_ingredients() {
        assert_eq!(
            limonade().formatted_ingredients(),
            "Lait de coco: 400 ml, Jus de citron: 2, Glaçons"
        );
    }

    #[test]
    fn test_formatted_ustensils() {
        assert_eq!(limonade().formatted_ustensils(), "cuillère à Soupe, verres");
    }

    #[test]
    fn test_amount() {
        assert_eq!(Ingredient::with_quantity("Sucre", 0.5, Some("kg")).amount(), "0.5 kg");
        assert_eq!(Ingredient::with_quantity("Oeuf", 3.0, None).amount(), "3");
        assert_eq!(Ingredient::new("Sel").amount(), "");
    }

    #[test]
    fn test_zero_quantity_is_hidden() {
        let recipe = Recipe {
            ingredients: vec![
                Ingredient::with_quantity("Sel", 0.0, None),
                Ingredient::with_quantity("Farine", 0.0, Some("grammes")),
            ],
            ..Default::default()
        };
        assert_eq!(recipe.formatted_ingredients(), "Sel, Farine grammes");
        assert_eq!(recipe.ingredients[0].amount(), "");
        assert_eq!(recipe.ingredients[1].amount(), "grammes");
    }

    #[test]
    fn test_mistyped_fields_default() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": 4, "name": null, "time": "soon", "ustensils": null,
                "ingredients": [{"ingredient": "Oeuf", "quantity": "1/2", "unit": 3}, 42]}"#,
        )
        .unwrap();
        assert_eq!(recipe.id, 4);
        assert_eq!(recipe.name, "");
        assert_eq!(recipe.time, 0);
        assert!(recipe.ustensils.is_empty());
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].quantity, Some(0.5));
        assert_eq!(recipe.ingredients[0].unit, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let recipe: Recipe = serde_json::from_str(r#"{"id": 7, "name": "Bare"}"#).unwrap();
        assert_eq!(recipe.id, 7);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.ustensils.is_empty());
        assert_eq!(recipe.appliance, "");
        assert_eq!(recipe.description, "");
    }

    #[test]
    fn test_ingredient_names() {
        let recipe = limonade();
        let names: Vec<&str> = recipe.ingredient_names().collect();
        assert_eq!(names, vec!["Lait de coco", "Jus de citron", "Glaçons"]);
    }
}
