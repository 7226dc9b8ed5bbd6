//! Shell state and its reducer

use std::fmt;

use serde::Serialize;

use super::source::{ContentSource, EmbeddedContent, LoadFailure, SourceMode, SourcePolicy};

/// Load progress of the current renderer instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Idle => write!(f, "idle"),
            LoadStatus::Loading => write!(f, "loading"),
            LoadStatus::Loaded => write!(f, "loaded"),
            LoadStatus::Failed(reason) => write!(f, "failed ({reason})"),
        }
    }
}

/// Inputs to the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// The renderer began fetching or executing the current source
    StartLoad,
    LoadSucceeded,
    LoadFailed(LoadFailure),
    /// A `runtime_error` bridge message from the instance mounted at `epoch`
    RuntimeErrorReceived { epoch: u64, message: String },
    ManualReload,
    ManualSwitch(SourceMode),
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ShellState,
    /// The epoch changed: tear down the renderer and mount `state.source()`
    pub remount: bool,
    /// The event was discarded (stale epoch, or a source outside the policy)
    pub ignored: bool,
}

/// Everything the shell knows about the content it shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    policy: SourcePolicy,
    embedded: EmbeddedContent,
    source: ContentSource,
    load_status: LoadStatus,
    error_text: String,
    epoch: u64,
}

impl ShellState {
    /// Initial state: the policy's first source, idle, epoch 0
    pub fn new(policy: SourcePolicy, embedded: EmbeddedContent) -> Self {
        let source = ContentSource::build(&policy, policy.initial_mode(), 0, &embedded);
        Self {
            policy,
            embedded,
            source,
            load_status: LoadStatus::Idle,
            error_text: String::new(),
            epoch: 0,
        }
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    pub fn source_mode(&self) -> SourceMode {
        self.source.mode()
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn error_text(&self) -> &str {
        &self.error_text
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn policy(&self) -> &SourcePolicy {
        &self.policy
    }

    /// Apply `event`, producing the next state.
    ///
    /// Pure: `self` is left untouched and nothing outside the returned
    /// transition is affected.
    pub fn apply(&self, event: &ShellEvent) -> Transition {
        let mut next = self.clone();
        let mut ignored = false;

        match event {
            ShellEvent::StartLoad => {
                next.load_status = LoadStatus::Loading;
                next.error_text.clear();
            }
            ShellEvent::LoadSucceeded => {
                next.load_status = LoadStatus::Loaded;
                next.error_text.clear();
            }
            ShellEvent::LoadFailed(failure) => match self.source_mode() {
                SourceMode::Remote => {
                    next.enter(SourceMode::Embedded);
                    next.error_text = format!(
                        "Remote load failed ({failure}). Switched to embedded build."
                    );
                }
                SourceMode::Embedded => {
                    next.load_status = LoadStatus::Failed(failure.reason.clone());
                    next.error_text = format!("Embedded load failed ({failure}).");
                }
            },
            ShellEvent::RuntimeErrorReceived { epoch, message } => {
                if *epoch == self.epoch {
                    next.load_status = LoadStatus::Failed(message.clone());
                    next.error_text = format!("Runtime error: {message}");
                } else {
                    ignored = true;
                }
            }
            ShellEvent::ManualReload => {
                next.enter(self.source_mode());
                next.error_text.clear();
            }
            ShellEvent::ManualSwitch(mode) => {
                if self.policy.allows(*mode) {
                    next.enter(*mode);
                    next.error_text.clear();
                } else {
                    ignored = true;
                }
            }
        }

        let remount = next.epoch != self.epoch;
        Transition {
            state: next,
            remount,
            ignored,
        }
    }

    /// Start a new renderer generation showing `mode`
    fn enter(&mut self, mode: SourceMode) {
        self.epoch += 1;
        self.source = ContentSource::build(&self.policy, mode, self.epoch, &self.embedded);
        self.load_status = LoadStatus::Loading;
    }

    /// Serializable view for reports
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            source_mode: self.source_mode(),
            load_status: self.load_status.clone(),
            error_text: self.error_text.clone(),
            epoch: self.epoch,
            uri: self.source.uri(),
        }
    }
}

/// Plain-data copy of a [`ShellState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub source_mode: SourceMode,
    pub load_status: LoadStatus,
    pub error_text: String,
    pub epoch: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}
