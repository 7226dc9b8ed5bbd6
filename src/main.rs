//! gameshell - build and delivery tooling for a remote-or-embedded game shell

use clap::Parser;

use gameshell::cli::{Cli, Commands};
use gameshell::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Bundle(args) => commands::bundle::run(cli.workspace, args),
        Commands::Publish(args) => commands::publish::run(cli.workspace, args),
        Commands::Replay(args) => commands::replay::run(cli.workspace, args),
        Commands::BridgeScript => commands::bridge_script::run(cli.workspace),
        Commands::Version => commands::version::run(cli.workspace),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
