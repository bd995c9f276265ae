//! # DocSnip Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! DocSnip renders the code blocks of a static documentation site. Given a
//! snippet and its language tag it picks a rendering strategy, highlights
//! shell commands with a small ordered set of regex rules, hands everything
//! else to a general-purpose highlighter, and wraps the result in a container
//! with a copy-to-clipboard button.
//!
//! This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - `core`: errors, configuration, templates
//! - `snippet`: classification, shell highlighting, line splitting, delegate, container
//! - `copy`: clipboard writer and copy-button feedback state
//! - `commands`: one module per subcommand
//! - `common`: file I/O helpers
//!
//! ## Examples
//!
//! ```bash
//! docsnip render -l bash -c "npm run build"
//! docsnip render -m installation.toml --page -o site/installation.html
//! docsnip classify -f setup.sh
//! docsnip -v copy -l bash -c "go install ./cmd/godeps"
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand handlers (render, classify, copy)
mod common; // Shared helpers (file I/O)
mod copy; // Copy-to-clipboard feedback
mod core; // Errors, configuration, templates
mod snippet; // Snippet rendering engine

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "docsnip",
    about = "Render documentation code snippets with shell highlighting and copy feedback",
    long_about = "Classify code snippets, highlight shell commands, delegate other languages\n\
                  to a syntax highlighter, and render HTML code blocks with a copy button.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Render snippets to HTML code blocks.
    #[command(alias = "r")]
    Render(commands::render::RenderArgs),
    /// Print the rendering strategy chosen for a snippet.
    Classify(commands::classify::ClassifyArgs),
    /// Copy a snippet's code to the clipboard and show the button feedback.
    Copy(commands::copy::CopyArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Render(args) => commands::render::handle_render(args).await,
        Commands::Classify(args) => commands::classify::handle_classify(args).await,
        Commands::Copy(args) => commands::copy::handle_copy(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
