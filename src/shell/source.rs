//! Content sources

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Which kind of source is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    Remote,
    Embedded,
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::Remote => write!(f, "remote"),
            SourceMode::Embedded => write!(f, "embedded"),
        }
    }
}

/// Which sources a shell may use, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourcePolicy {
    /// Remote first, with a one-shot downgrade to the embedded build
    FullFallback {
        remote_url: String,
        client_tag: String,
    },
    /// Only the embedded build is ever shown
    EmbeddedOnly,
}

impl SourcePolicy {
    /// Mode a fresh shell starts in
    pub fn initial_mode(&self) -> SourceMode {
        match self {
            SourcePolicy::FullFallback { .. } => SourceMode::Remote,
            SourcePolicy::EmbeddedOnly => SourceMode::Embedded,
        }
    }

    /// Whether `mode` is part of this policy's source set
    pub fn allows(&self, mode: SourceMode) -> bool {
        match self {
            SourcePolicy::FullFallback { .. } => true,
            SourcePolicy::EmbeddedOnly => mode == SourceMode::Embedded,
        }
    }
}

/// The embedded document and the base URL it is rendered under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedContent {
    pub document: Arc<str>,
    pub base_url: String,
}

impl EmbeddedContent {
    pub fn new(document: impl Into<Arc<str>>, base_url: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            base_url: base_url.into(),
        }
    }
}

/// The source handed to a renderer instance.
///
/// Built from the shell state and never mutated; a transition produces a
/// new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Remote {
        base_url: String,
        cache_bust_token: String,
        client_tag: String,
    },
    Embedded {
        document: Arc<str>,
        base_url: String,
    },
}

impl ContentSource {
    /// Source for `mode` at `epoch`.
    ///
    /// Falls back to the embedded content when the policy has no remote
    /// location.
    pub fn build(
        policy: &SourcePolicy,
        mode: SourceMode,
        epoch: u64,
        embedded: &EmbeddedContent,
    ) -> Self {
        match (mode, policy) {
            (
                SourceMode::Remote,
                SourcePolicy::FullFallback {
                    remote_url,
                    client_tag,
                },
            ) => ContentSource::Remote {
                base_url: remote_url.clone(),
                cache_bust_token: epoch.to_string(),
                client_tag: client_tag.clone(),
            },
            _ => ContentSource::Embedded {
                document: Arc::clone(&embedded.document),
                base_url: embedded.base_url.clone(),
            },
        }
    }

    pub fn mode(&self) -> SourceMode {
        match self {
            ContentSource::Remote { .. } => SourceMode::Remote,
            ContentSource::Embedded { .. } => SourceMode::Embedded,
        }
    }

    /// URI a renderer should navigate to, `None` for inline documents
    pub fn uri(&self) -> Option<String> {
        match self {
            ContentSource::Remote {
                base_url,
                cache_bust_token,
                client_tag,
            } => {
                let sep = if base_url.contains('?') { '&' } else { '?' };
                Some(format!(
                    "{base_url}{sep}from={client_tag}&t={cache_bust_token}"
                ))
            }
            ContentSource::Embedded { .. } => None,
        }
    }
}

/// A source load failure reported by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub reason: String,
}

impl LoadFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Network-level failure (DNS, offline, blocked, ...)
    pub fn network(description: Option<&str>) -> Self {
        Self::new(
            description
                .filter(|d| !d.is_empty())
                .unwrap_or("unknown"),
        )
    }

    /// The document loaded with an HTTP error status
    pub fn http(status: Option<u16>, description: Option<&str>) -> Self {
        let status = status.map_or_else(|| "http".to_string(), |s| s.to_string());
        let reason = format!("{} {}", status, description.unwrap_or(""));
        Self::new(reason.trim())
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}
