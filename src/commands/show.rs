// src/commands/show.rs
//! Single recipe display

use super::Context;
use anyhow::Result;
use platter::{renderer_for, OutputFormat};

/// Render one recipe by id
pub fn cmd_show(ctx: &Context, id: u32, format: OutputFormat) -> Result<()> {
    let store = ctx.load_store();
    let recipe = store
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Recipe {} not found in {}", id, ctx.source))?;

    let output = renderer_for(format, &ctx.config.display).render(&[recipe])?;
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
