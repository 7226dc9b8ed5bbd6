//! Host driver tying a content renderer to the shell state
//!
//! The renderer is an external engine: it is told what to mount and calls
//! back with lifecycle events and raw bridge messages, each stamped with
//! the epoch of the instance that produced it. Everything from a
//! superseded instance is dropped here before it reaches the reducer.

use super::source::{ContentSource, LoadFailure, SourceMode};
use super::state::{ShellEvent, ShellState, Transition};
use super::view::ShellView;
use crate::bridge::BridgeMessage;

/// A content rendering engine
pub trait ContentRenderer {
    /// Tear down the current instance, if any, and mount `source` as
    /// generation `epoch`, injecting `bridge_script` before content loads.
    fn mount(&mut self, source: &ContentSource, epoch: u64, bridge_script: &str);
}

/// Load lifecycle callbacks of a renderer instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    LoadStart,
    LoadEnd,
    Error(LoadFailure),
}

/// Drives a [`ShellState`] from renderer callbacks and user actions
pub struct Host<R: ContentRenderer> {
    state: ShellState,
    renderer: R,
    bridge_script: String,
}

impl<R: ContentRenderer> Host<R> {
    /// Create a host and mount the initial source
    pub fn new(state: ShellState, mut renderer: R, bridge_script: impl Into<String>) -> Self {
        let bridge_script = bridge_script.into();
        renderer.mount(state.source(), state.epoch(), &bridge_script);
        tracing::info!(
            mode = %state.source_mode(),
            epoch = state.epoch(),
            "mounted initial source"
        );
        Self {
            state,
            renderer,
            bridge_script,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn view(&self) -> ShellView {
        ShellView::from_state(&self.state)
    }

    /// Lifecycle callback from the instance mounted at `epoch`
    pub fn on_lifecycle(&mut self, epoch: u64, event: LifecycleEvent) -> Option<Transition> {
        if epoch != self.state.epoch() {
            tracing::debug!(
                epoch,
                current = self.state.epoch(),
                ?event,
                "dropping lifecycle event from superseded instance"
            );
            return None;
        }

        let event = match event {
            LifecycleEvent::LoadStart => ShellEvent::StartLoad,
            LifecycleEvent::LoadEnd => ShellEvent::LoadSucceeded,
            LifecycleEvent::Error(failure) => {
                tracing::warn!(
                    mode = %self.state.source_mode(),
                    reason = %failure,
                    "content load failed"
                );
                ShellEvent::LoadFailed(failure)
            }
        };
        Some(self.dispatch(&event))
    }

    /// Raw bridge message from the instance mounted at `epoch`
    pub fn on_message(&mut self, epoch: u64, raw: &str) -> Option<Transition> {
        let message = BridgeMessage::parse(raw)?;

        match &message {
            BridgeMessage::DomReady { href } => {
                tracing::debug!(epoch, href = %href, "content ready");
                None
            }
            BridgeMessage::BootPing { href } => {
                tracing::debug!(epoch, href = %href, "boot ping");
                None
            }
            BridgeMessage::RuntimeError {
                source, line, col, ..
            } => {
                let text = message.runtime_error_message().unwrap_or_default();
                tracing::warn!(
                    epoch,
                    error = text,
                    source = source.as_deref().unwrap_or(""),
                    line = line.unwrap_or(0),
                    col = col.unwrap_or(0),
                    "runtime error in content"
                );
                Some(self.dispatch(&ShellEvent::RuntimeErrorReceived {
                    epoch,
                    message: text.to_string(),
                }))
            }
        }
    }

    /// User pressed reload
    pub fn reload(&mut self) -> Transition {
        self.dispatch(&ShellEvent::ManualReload)
    }

    /// User picked a source
    pub fn switch_source(&mut self, mode: SourceMode) -> Transition {
        self.dispatch(&ShellEvent::ManualSwitch(mode))
    }

    fn dispatch(&mut self, event: &ShellEvent) -> Transition {
        let transition = self.state.apply(event);

        if transition.ignored {
            tracing::debug!(?event, epoch = self.state.epoch(), "event ignored");
        }

        if transition.remount {
            self.renderer.mount(
                transition.state.source(),
                transition.state.epoch(),
                &self.bridge_script,
            );
            tracing::info!(
                mode = %transition.state.source_mode(),
                epoch = transition.state.epoch(),
                "remounted renderer"
            );
        }

        self.state = transition.state.clone();
        transition
    }
}

/// Renderer that only records what it was asked to mount
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub mounts: Vec<(u64, ContentSource)>,
}

impl ContentRenderer for RecordingRenderer {
    fn mount(&mut self, source: &ContentSource, epoch: u64, _bridge_script: &str) {
        self.mounts.push((epoch, source.clone()));
    }
}
