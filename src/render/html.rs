// src/render/html.rs

//! HTML recipe card fragments
//!
//! Every piece of recipe text goes through [`escape_html`] before it reaches
//! the markup, including attribute values.

use super::{escape_html, truncate_description, Renderer};
use crate::error::{Error, Result};
use crate::recipe::Recipe;
use std::fmt::Write;

/// Renders each recipe as an `<article>` card
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    description_lines: usize,
    image_base: String,
}

impl HtmlRenderer {
    pub fn new(description_lines: usize, image_base: impl Into<String>) -> Self {
        Self {
            description_lines,
            image_base: image_base.into(),
        }
    }

    fn image_src(&self, image: &str) -> String {
        let base = self.image_base.trim_end_matches('/');
        if base.is_empty() {
            image.to_string()
        } else {
            format!("{}/{}", base, image)
        }
    }

    fn card<W: Write>(&self, out: &mut W, recipe: &Recipe) -> std::fmt::Result {
        let name = escape_html(&recipe.name);
        writeln!(out, r#"<article class="recipe-card" data-id="{}">"#, recipe.id)?;
        writeln!(
            out,
            r#"  <img src="{}" alt="{}" class="recipe-image"/>"#,
            escape_html(&self.image_src(&recipe.image)),
            name
        )?;
        writeln!(out, r#"  <div class="recipe-time">{}min</div>"#, recipe.time)?;
        writeln!(out, r#"  <div class="recipe-body">"#)?;
        writeln!(out, "    <h2>{}</h2>", name)?;
        writeln!(out, "    <h3>Recette</h3>")?;
        writeln!(
            out,
            "    <p>{}</p>",
            escape_html(&truncate_description(&recipe.description, self.description_lines))
        )?;
        writeln!(out, "    <h3>Ingrédients</h3>")?;
        writeln!(out, r#"    <div class="recipe-ingredients">"#)?;
        for ingredient in &recipe.ingredients {
            writeln!(out, r#"      <div class="ingredient">"#)?;
            writeln!(out, "        <span>{}</span>", escape_html(&ingredient.ingredient))?;
            writeln!(out, "        <span>{}</span>", escape_html(&ingredient.amount()))?;
            writeln!(out, "      </div>")?;
        }
        writeln!(out, "    </div>")?;
        writeln!(out, "  </div>")?;
        writeln!(out, "</article>")
    }

    /// Write one `<article>` per recipe to `out`
    pub fn write_to<W: Write>(&self, out: &mut W, recipes: &[&Recipe]) -> Result<()> {
        for recipe in recipes {
            self.card(out, recipe)
                .map_err(|e| Error::RenderError(format!("Failed to write recipe {}: {e}", recipe.id)))?;
        }
        Ok(())
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, recipes: &[&Recipe]) -> Result<String> {
        let mut out = String::new();
        self.write_to(&mut out, recipes)?;
        Ok(out)
    }
}
