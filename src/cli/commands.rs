//! CLI commands implementation.

use console::style;

use orgmark::config::Settings;

use super::helpers::{build_annotator, read_input};
use super::InputArgs;

/// Annotate the input text and print it.
pub async fn cmd_annotate(settings: &Settings, args: &InputArgs, verbose: bool) -> anyhow::Result<()> {
    let text = read_input(args)?;
    let annotator = build_annotator(args, settings)?;
    let result = annotator.annotate(&text).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", result.text);
    if verbose {
        eprintln!(
            "{} {} organization span(s) via {}",
            style("✓").green(),
            result.spans.len(),
            annotator.backend_id()
        );
    }
    Ok(())
}

/// Print reconstructed spans, one per line.
pub async fn cmd_spans(settings: &Settings, args: &InputArgs) -> anyhow::Result<()> {
    let text = read_input(args)?;
    let annotator = build_annotator(args, settings)?;
    let result = annotator.annotate(&text).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.spans)?);
        return Ok(());
    }

    if result.spans.is_empty() {
        eprintln!("{}", style("No organizations found").dim());
        return Ok(());
    }

    for span in &result.spans {
        let source = span.source_text(&text).unwrap_or_default();
        println!(
            "{:>3}  {:>5}..{:<5}  {}  {}",
            span.id,
            span.start,
            span.end,
            style(&span.text).cyan().bold(),
            style(format!("({:?})", source)).dim()
        );
    }

    let distinct = result.spans.distinct_names();
    if distinct.len() < result.spans.len() {
        eprintln!(
            "{} {} occurrence(s) of {} distinct name(s)",
            style("i").blue(),
            result.spans.len(),
            distinct.len()
        );
    }
    Ok(())
}

/// Print the effective settings as TOML, with secrets masked.
pub fn cmd_config(settings: &Settings) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(&settings.redacted())?);
    Ok(())
}
