//! Shared helper functions for CLI commands.

use std::io::Read;

use anyhow::Context;

use orgmark::classifier::{HttpClassifier, StaticClassifier, TokenClassifier};
use orgmark::config::Settings;
use orgmark::services::{AnnotationOptions, OrgAnnotator};

use super::InputArgs;

/// Read the input text from the argument, a file, or stdin.
///
/// One trailing newline from files and stdin is dropped so token offsets
/// computed on the bare sentence still line up.
pub fn read_input(args: &InputArgs) -> anyhow::Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }

    let raw = match args.file {
        Some(ref path) => std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read input file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Cannot read text from stdin")?;
            buf
        }
    };

    let trimmed = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(&raw);
    Ok(trimmed.to_string())
}

/// Build the classifier the arguments and settings ask for.
pub fn build_classifier(
    args: &InputArgs,
    settings: &Settings,
) -> anyhow::Result<Box<dyn TokenClassifier>> {
    if let Some(ref path) = args.tokens {
        let classifier = StaticClassifier::from_json_file(path)?;
        tracing::info!(
            "Loaded {} token(s) from {}",
            classifier.tokens().len(),
            path.display()
        );
        return Ok(Box::new(classifier));
    }

    let classifier = HttpClassifier::new(&settings.classifier).context(
        "No --tokens file given and no classifier endpoint configured \
         (set ORGMARK_CLASSIFIER_ENDPOINT or [classifier] endpoint)",
    )?;
    tracing::info!("Using classifier endpoint {}", classifier.endpoint());
    Ok(Box::new(classifier))
}

/// Assemble the annotator for a command invocation.
pub fn build_annotator(args: &InputArgs, settings: &Settings) -> anyhow::Result<OrgAnnotator> {
    let options: AnnotationOptions = settings
        .annotation_options()
        .context("Invalid marker configuration")?;
    let classifier = build_classifier(args, settings)?;
    Ok(OrgAnnotator::new(classifier, options))
}
