//! Fallback state machine for the content renderer
//!
//! The shell decides which content source the renderer shows: the remote
//! site, or the embedded artifact produced by [`crate::bundler`]. It is
//! organized as:
//! - [`source`]: content sources and the construction-time source policy
//! - [`state`]: the state, its events and the pure reducer
//! - [`host`]: the driver that owns a renderer and feeds it events
//! - [`view`]: chrome state derived from the shell state

pub mod host;
pub mod source;
pub mod state;
pub mod view;

pub use host::{ContentRenderer, Host, LifecycleEvent, RecordingRenderer};
pub use source::{ContentSource, EmbeddedContent, LoadFailure, SourceMode, SourcePolicy};
pub use state::{LoadStatus, ShellEvent, ShellState, StateSnapshot, Transition};
pub use view::ShellView;
