//! Replay command implementation
//!
//! Feeds a scripted sequence of renderer callbacks, bridge messages and
//! user actions through a [`Host`] with a recording renderer, and reports
//! every transition.

use std::fmt;
use std::path::{Path, PathBuf};

use console::style;
use serde::Deserialize;

use crate::bridge;
use crate::bundler;
use crate::cli::ReplayArgs;
use crate::commands::helpers::{load_workspace, override_or};
use crate::error::{Result, ShellError};
use crate::shell::{
    ContentRenderer, EmbeddedContent, Host, LifecycleEvent, LoadFailure, RecordingRenderer,
    ShellState, SourceMode, StateSnapshot,
};

/// One entry of an event script
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayEvent {
    StartLoad,
    LoadEnd,
    LoadFailed(String),
    HttpError {
        #[serde(default)]
        status: Option<u16>,
        #[serde(default)]
        description: Option<String>,
    },
    Message(MessageEvent),
    Reload,
    Switch(SourceMode),
}

/// A raw bridge message, from the current instance unless an epoch is given
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MessageEvent {
    Current(String),
    Stamped { data: String, epoch: u64 },
}

impl fmt::Display for ReplayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayEvent::StartLoad => write!(f, "start_load"),
            ReplayEvent::LoadEnd => write!(f, "load_end"),
            ReplayEvent::LoadFailed(reason) => write!(f, "load_failed: {reason}"),
            ReplayEvent::HttpError {
                status,
                description,
            } => write!(
                f,
                "http_error: {}",
                LoadFailure::http(*status, description.as_deref())
            ),
            ReplayEvent::Message(MessageEvent::Current(data)) => write!(f, "message: {data}"),
            ReplayEvent::Message(MessageEvent::Stamped { data, epoch }) => {
                write!(f, "message@{epoch}: {data}")
            }
            ReplayEvent::Reload => write!(f, "reload"),
            ReplayEvent::Switch(mode) => write!(f, "switch: {mode}"),
        }
    }
}

/// Outcome of one replayed event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep {
    pub event: ReplayEvent,
    pub state: StateSnapshot,
    pub remounted: bool,
    /// The event never reached the reducer, or the reducer discarded it
    pub ignored: bool,
}

/// Parse an event script
pub fn parse_events(yaml: &str) -> std::result::Result<Vec<ReplayEvent>, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

fn load_events(path: &Path) -> Result<Vec<ReplayEvent>> {
    let content = std::fs::read_to_string(path).map_err(|e| ShellError::ReplayFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_events(&content).map_err(|e| ShellError::ReplayFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Apply `events` to `host` in order
pub fn replay<R: ContentRenderer>(host: &mut Host<R>, events: &[ReplayEvent]) -> Vec<ReplayStep> {
    events
        .iter()
        .map(|event| {
            let epoch = host.state().epoch();
            let transition = match event {
                ReplayEvent::StartLoad => host.on_lifecycle(epoch, LifecycleEvent::LoadStart),
                ReplayEvent::LoadEnd => host.on_lifecycle(epoch, LifecycleEvent::LoadEnd),
                ReplayEvent::LoadFailed(reason) => host.on_lifecycle(
                    epoch,
                    LifecycleEvent::Error(LoadFailure::network(Some(reason))),
                ),
                ReplayEvent::HttpError {
                    status,
                    description,
                } => host.on_lifecycle(
                    epoch,
                    LifecycleEvent::Error(LoadFailure::http(*status, description.as_deref())),
                ),
                ReplayEvent::Message(MessageEvent::Current(data)) => host.on_message(epoch, data),
                ReplayEvent::Message(MessageEvent::Stamped { data, epoch }) => {
                    host.on_message(*epoch, data)
                }
                ReplayEvent::Reload => Some(host.reload()),
                ReplayEvent::Switch(mode) => Some(host.switch_source(*mode)),
            };

            let (remounted, ignored) = transition
                .as_ref()
                .map_or((false, true), |t| (t.remount, t.ignored));

            ReplayStep {
                event: event.clone(),
                state: host.state().snapshot(),
                remounted,
                ignored,
            }
        })
        .collect()
}

/// Run replay command
pub fn run(workspace: Option<PathBuf>, args: ReplayArgs) -> Result<()> {
    let (root, config) = load_workspace(workspace)?;
    let events = load_events(&root.join(&args.events))?;

    let artifact_path = override_or(&root, args.artifact, config.resolve(&root).artifact_path);
    let document = if artifact_path.is_file() {
        bundler::load_embedded_document(&artifact_path)?
    } else {
        tracing::warn!(
            path = %artifact_path.display(),
            "embedded artifact not found, replaying with an empty document"
        );
        String::new()
    };

    let state = ShellState::new(
        config.source_policy(),
        EmbeddedContent::new(document, config.embedded_base_url.clone()),
    );
    let mut host = Host::new(
        state,
        RecordingRenderer::default(),
        bridge::observer_script(config.boot_ping_delay_ms),
    );

    let initial = host.state().snapshot();
    let steps = replay(&mut host, &events);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&host.state().snapshot())?);
        return Ok(());
    }

    print_state("initial", &initial, false, false);
    for (i, step) in steps.iter().enumerate() {
        print_state(
            &format!("{}. {}", i + 1, step.event),
            &step.state,
            step.remounted,
            step.ignored,
        );
    }
    println!(
        "\n{} renderer mount{}",
        host.renderer().mounts.len(),
        if host.renderer().mounts.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

fn print_state(label: &str, state: &StateSnapshot, remounted: bool, ignored: bool) {
    println!("{}", style(label).bold());

    let mut line = format!(
        "   {} | {} | epoch {}",
        state.source_mode, state.load_status, state.epoch
    );
    if remounted {
        line.push_str(" | remount");
    }
    if ignored {
        line.push_str(" | ignored");
    }
    println!("{line}");

    if let Some(uri) = &state.uri {
        println!("   {}", style(uri).dim());
    }
    if !state.error_text.is_empty() {
        println!("   {} {}", style("!").red().bold(), state.error_text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{LoadStatus, SourcePolicy};

    fn host() -> Host<RecordingRenderer> {
        let state = ShellState::new(
            SourcePolicy::FullFallback {
                remote_url: "https://example.github.io/game/".to_string(),
                client_tag: "shell".to_string(),
            },
            EmbeddedContent::new("<html></html>", "https://neonhoopz.local/"),
        );
        Host::new(state, RecordingRenderer::default(), "")
    }

    #[test]
    fn test_parse_event_script() {
        let events = parse_events(
            r#"
- start_load
- load_failed: timeout
- http_error: { status: 404, description: Not Found }
- message: '{"type":"boot_ping","payload":{"href":"x"}}'
- message: { data: '{"type":"runtime_error","payload":{}}', epoch: 0 }
- reload
- switch: remote
"#,
        )
        .unwrap();

        assert_eq!(events.len(), 7);
        assert_eq!(events[1], ReplayEvent::LoadFailed("timeout".to_string()));
        assert!(matches!(
            events[4],
            ReplayEvent::Message(MessageEvent::Stamped { epoch: 0, .. })
        ));
        assert_eq!(events[6], ReplayEvent::Switch(SourceMode::Remote));
    }

    #[test]
    fn test_parse_rejects_unknown_event() {
        assert!(parse_events("- explode").is_err());
    }

    #[test]
    fn test_replay_timeout_then_blocked() {
        let mut host = host();
        let events = parse_events("- start_load\n- load_failed: timeout\n- load_failed: blocked\n")
            .unwrap();
        let steps = replay(&mut host, &events);

        assert!(steps[1].remounted);
        assert_eq!(steps[1].state.source_mode, SourceMode::Embedded);
        assert_eq!(steps[1].state.epoch, 1);
        assert_eq!(
            steps[1].state.error_text,
            "Remote load failed (timeout). Switched to embedded build."
        );
        assert_eq!(
            steps[2].state.load_status,
            LoadStatus::Failed("blocked".to_string())
        );
        assert_eq!(steps[2].state.error_text, "Embedded load failed (blocked).");
    }

    #[test]
    fn test_replay_stale_message_marked_ignored() {
        let mut host = host();
        let events = parse_events(
            "- reload\n- load_end\n- message: { data: '{\"type\":\"runtime_error\",\"payload\":{\"message\":\"old\"}}', epoch: 0 }\n",
        )
        .unwrap();
        let steps = replay(&mut host, &events);

        assert!(steps[2].ignored);
        assert_eq!(steps[2].state.load_status, LoadStatus::Loaded);
    }

    #[test]
    fn test_replay_http_error_reason() {
        let mut host = host();
        let events =
            parse_events("- http_error: { status: 503, description: Service Unavailable }\n")
                .unwrap();
        let steps = replay(&mut host, &events);
        assert_eq!(
            steps[0].state.error_text,
            "Remote load failed (503 Service Unavailable). Switched to embedded build."
        );
    }

    #[test]
    fn test_event_display() {
        assert_eq!(
            ReplayEvent::LoadFailed("dns".to_string()).to_string(),
            "load_failed: dns"
        );
        assert_eq!(
            ReplayEvent::Switch(SourceMode::Embedded).to_string(),
            "switch: embedded"
        );
    }
}
