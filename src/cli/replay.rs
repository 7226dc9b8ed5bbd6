use clap::Parser;
use std::path::PathBuf;

/// Arguments for the replay command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Replay an event script:\n    gameshell replay events.yaml\n\n\
                  Print only the final state as JSON:\n    gameshell replay events.yaml --json\n\n\
                  EVENT SCRIPT:\n  \
                  - start_load\n  \
                  - load_failed: timeout\n  \
                  - http_error: { status: 503, description: Service Unavailable }\n  \
                  - message: '{\"type\":\"runtime_error\",\"payload\":{\"message\":\"boom\"}}'\n  \
                  - reload\n  \
                  - switch: remote")]
pub struct ReplayArgs {
    /// YAML file with the event sequence
    pub events: PathBuf,

    /// Print the final state as JSON instead of a transition log
    #[arg(long)]
    pub json: bool,

    /// Embedded artifact module to load (overrides artifact_path)
    #[arg(long)]
    pub artifact: Option<PathBuf>,
}
