//! gameshell - resilient content delivery for an embedded game
//!
//! A host shell shows the game either from its remote site or from an
//! embedded, fully self-contained document, and falls back from the first
//! to the second when the remote load fails. This crate holds:
//! - [`shell`]: the fallback/reload state machine and its renderer driver
//! - [`bridge`]: the message contract between hosted content and the shell
//! - [`bundler`]: the build step producing the embedded artifact
//! - [`publish`]: the build step producing the static-hosting mirror

pub mod bridge;
pub mod bundler;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod hash;
pub mod logging;
pub mod progress;
pub mod publish;
pub mod shell;
