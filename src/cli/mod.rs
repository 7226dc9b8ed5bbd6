//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - bundle: Bundle command arguments
//! - publish: Publish command arguments
//! - replay: Replay command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bundle;
pub mod completions;
pub mod publish;
pub mod replay;

pub use bundle::BundleArgs;
pub use completions::CompletionsArgs;
pub use publish::PublishArgs;
pub use replay::ReplayArgs;

/// gameshell - content delivery for the Neon Hoopz shell
///
/// Builds the embedded game artifact, publishes the static mirror and
/// exercises the shell's source fallback.
#[derive(Parser, Debug)]
#[command(
    name = "gameshell",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build and delivery tooling for a remote-or-embedded game shell",
    long_about = "gameshell inlines the compiled game into a self-contained embedded artifact, \
                  publishes a static-hosting mirror of the build, and replays renderer events \
                  through the shell's remote/embedded fallback state machine.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  gameshell bundle                       \x1b[90m# Write the embedded artifact module\x1b[0m\n   \
                  gameshell publish                      \x1b[90m# Publish index.html, 404.html and assets/\x1b[0m\n   \
                  gameshell replay events.yaml           \x1b[90m# Run renderer events through the shell\x1b[0m\n   \
                  gameshell bridge-script                \x1b[90m# Print the injected bridge observers\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "GAMESHELL_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inline the compiled game into the embedded artifact module
    Bundle(BundleArgs),

    /// Publish the compiled game as a static site
    Publish(PublishArgs),

    /// Replay renderer and user events through the fallback state machine
    Replay(ReplayArgs),

    /// Print the bridge observer script injected into hosted content
    BridgeScript,

    /// Show version information and the configured delivery setup
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
