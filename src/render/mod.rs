// src/render/mod.rs

//! Renderer: turns filtered recipes into output
//!
//! The filter engine hands over an ordered list of recipe references; the
//! renderers here only format it. Three output modes are available:
//! - `TextRenderer`: terminal-friendly cards
//! - `HtmlRenderer`: escaped `<article>` card fragments
//! - `JsonRenderer`: the matching records as a JSON array

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::recipe::Recipe;
use strum_macros::{Display, EnumString};

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Formats a list of recipes
pub trait Renderer {
    /// Render recipes in the given order
    fn render(&self, recipes: &[&Recipe]) -> Result<String>;
}

/// JSON array of the matching recipe records
#[derive(Debug, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, recipes: &[&Recipe]) -> Result<String> {
        serde_json::to_string_pretty(recipes)
            .map_err(|e| Error::RenderError(format!("Failed to serialize recipes: {}", e)))
    }
}

/// Build the renderer for `format`
pub fn renderer_for(format: OutputFormat, display: &DisplayConfig) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(display.description_lines)),
        OutputFormat::Html => Box::new(HtmlRenderer::new(
            display.description_lines,
            display.image_base.clone(),
        )),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Human-readable result count
///
/// `0` and `1` take the singular noun, larger counts the plural noun with the
/// number zero-padded to two digits: `"0 recipe"`, `"1 recipe"`, `"07 recipes"`.
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    match count {
        0 | 1 => format!("{} {}", count, singular),
        n => format!("{:02} {}", n, plural),
    }
}

/// Keep at most `max_lines` lines of a description
///
/// Longer descriptions have their first `max_lines` lines joined with spaces
/// and end in `"..."`.
pub fn truncate_description(description: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = description.split('\n').collect();
    if lines.len() <= max_lines {
        return description.to_string();
    }
    format!("{}...", lines[..max_lines].join(" "))
}

/// Escape text for inclusion in HTML content or attribute values
pub fn escape_html(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for ch in unsafe_text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Uppercase the first character, for showing lowercased facet values
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
