//! markpoint CLI - hookable HTML markup composition.
//!
//! Provides commands for:
//! - `render`: Render a JSON page description to HTML
//! - `hooks`: List the hook names of markup identities

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{HooksArgs, RenderArgs};
use output::Output;

/// markpoint - hookable HTML markup composition.
#[derive(Parser)]
#[command(name = "markpoint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page description to HTML.
    Render(RenderArgs),
    /// List the hook names of markup identities.
    Hooks(HooksArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Hooks(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
