//! Command implementations for gameshell CLI

pub mod bridge_script;
pub mod bundle;
pub mod completions;
pub mod helpers;
pub mod publish;
pub mod replay;
pub mod version;
