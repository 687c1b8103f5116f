//! orgmark - mark organization names in text.
//!
//! Reads text plus token-classification output (from a JSON file or a remote
//! inference endpoint) and prints the text with markers around organizations.

mod cli;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ORGMARK_* overrides and HF_TOKEN may live in .env
    let _ = dotenvy::dotenv();
    init_logging(cli::is_verbose());

    cli::run().await
}

/// Filter used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "orgmark=debug"
    } else {
        "orgmark=warn"
    }
}

/// Diagnostics go to stderr; stdout carries only annotated text.
fn init_logging(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_verbosity() {
        assert_eq!(default_directive(false), "orgmark=warn");
        assert_eq!(default_directive(true), "orgmark=debug");
    }
}
