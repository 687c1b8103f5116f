//! Command-line interface.

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use orgmark::config::load_settings;

#[derive(Parser)]
#[command(name = "orgmark")]
#[command(about = "Mark organization names in text using token-classification output")]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true, env = "ORGMARK_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Insert markers around every organization in the input text
    Annotate(InputArgs),

    /// Print the reconstructed organization spans
    Spans(InputArgs),

    /// Print the effective settings
    Config,
}

/// Where the text and its tokens come from.
#[derive(Args)]
pub(crate) struct InputArgs {
    /// Text to process (reads --file or stdin when omitted)
    text: Option<String>,

    /// Read text from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// JSON token file (uses the configured classifier endpoint when omitted)
    #[arg(short, long)]
    tokens: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long)]
    json: bool,
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?.with_env_overrides();

    match cli.command {
        Commands::Annotate(args) => commands::cmd_annotate(&settings, &args, cli.verbose).await,
        Commands::Spans(args) => commands::cmd_spans(&settings, &args).await,
        Commands::Config => commands::cmd_config(&settings),
    }
}
