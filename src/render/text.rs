// src/render/text.rs

//! Plain-text recipe cards

use super::{truncate_description, Renderer};
use crate::error::{Error, Result};
use crate::recipe::Recipe;
use std::fmt::Write;

/// Renders each recipe as an indented text block
#[derive(Debug, Clone)]
pub struct TextRenderer {
    description_lines: usize,
}

impl TextRenderer {
    pub fn new(description_lines: usize) -> Self {
        Self { description_lines }
    }

    fn card<W: Write>(&self, out: &mut W, recipe: &Recipe) -> std::fmt::Result {
        writeln!(out, "{} [#{}] - {} min", recipe.name, recipe.id, recipe.time)?;
        if recipe.servings > 0 {
            writeln!(out, "  Servings:   {}", recipe.servings)?;
        }
        if !recipe.appliance.is_empty() {
            writeln!(out, "  Appliance:  {}", recipe.appliance)?;
        }
        if !recipe.ustensils.is_empty() {
            writeln!(out, "  Ustensils:  {}", recipe.formatted_ustensils())?;
        }
        if !recipe.ingredients.is_empty() {
            writeln!(out, "  Ingredients:")?;
            for ingredient in &recipe.ingredients {
                let amount = ingredient.amount();
                if amount.is_empty() {
                    writeln!(out, "    - {}", ingredient.ingredient)?;
                } else {
                    writeln!(out, "    - {} ({})", ingredient.ingredient, amount)?;
                }
            }
        }
        if !recipe.description.is_empty() {
            writeln!(out, "  Recipe:")?;
            let description = truncate_description(&recipe.description, self.description_lines);
            for line in description.lines() {
                writeln!(out, "    {}", line)?;
            }
        }
        Ok(())
    }

    /// Write the cards of `recipes` to `out`, separated by blank lines
    pub fn write_to<W: Write>(&self, out: &mut W, recipes: &[&Recipe]) -> Result<()> {
        for (i, recipe) in recipes.iter().enumerate() {
            if i > 0 {
                out.write_char('\n')
                    .map_err(|e| Error::RenderError(format!("Failed to write card separator: {e}")))?;
            }
            self.card(out, recipe)
                .map_err(|e| Error::RenderError(format!("Failed to write recipe {}: {e}", recipe.id)))?;
        }
        Ok(())
    }
}

impl Renderer for TextRenderer {
    fn render(&self, recipes: &[&Recipe]) -> Result<String> {
        let mut out = String::new();
        self.write_to(&mut out, recipes)?;
        Ok(out)
    }
}
