// src/commands/browse.rs
//! Interactive browsing over stdin
//!
//! Each input line is one [`SessionEvent`]. After every event the current
//! result count and the matching recipe names are printed, the way a page
//! re-renders after each keystroke or facet click.

use super::Context;
use anyhow::Result;
use platter::{capitalize_first, count_label, DisplayConfig, SearchSession, SessionEvent};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run a browsing session on stdin/stdout
pub fn cmd_browse(ctx: &Context) -> Result<()> {
    let session = SearchSession::new(ctx.load_store());
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_browse(session, stdin.lock(), stdout.lock(), &ctx.config.display)
}

/// Drive `session` from `input`, writing results to `output`
///
/// Stops at end of input or on `quit`/`exit`. Unparseable lines are reported
/// and skipped.
fn run_browse<R: BufRead, W: Write>(
    mut session: SearchSession,
    input: R,
    mut output: W,
    display: &DisplayConfig,
) -> Result<()> {
    writeln!(
        output,
        "{}",
        count_label(session.results().len(), &display.singular, &display.plural)
    )?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        let event: SessionEvent = match trimmed.parse() {
            Ok(event) => event,
            Err(e) => {
                writeln!(output, "error: {}", e)?;
                continue;
            }
        };

        if !session.apply(event) {
            debug!("Event left the session unchanged");
        }
        write_state(&session, &mut output, display)?;
    }

    output.flush()?;
    Ok(())
}

fn write_state<W: Write>(session: &SearchSession, output: &mut W, display: &DisplayConfig) -> Result<()> {
    let results = session.results();

    let selected: Vec<String> = session
        .selection()
        .iter()
        .map(|(facet, value)| format!("{}:{}", facet, capitalize_first(value)))
        .collect();
    if !selected.is_empty() {
        writeln!(output, "selected: {}", selected.join(", "))?;
    }

    writeln!(output, "{}", count_label(results.len(), &display.singular, &display.plural))?;
    for recipe in results {
        writeln!(output, "  {}", recipe.name)?;
    }
    Ok(())
}
