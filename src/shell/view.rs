//! Chrome state derived from the shell state

use serde::Serialize;

use super::source::SourceMode;
use super::state::{LoadStatus, ShellState};

/// What the shell chrome shows on top of the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellView {
    /// Highlighted source button
    pub active_mode: SourceMode,
    /// Source buttons offered to the user
    pub modes: Vec<SourceMode>,
    /// Loading overlay label, shown while a load is in flight
    pub loading_label: Option<&'static str>,
    /// Error banner text; the banner carries a reload button
    pub error_banner: Option<String>,
}

impl ShellView {
    pub fn from_state(state: &ShellState) -> Self {
        let active_mode = state.source_mode();
        let modes = [SourceMode::Remote, SourceMode::Embedded]
            .into_iter()
            .filter(|mode| state.policy().allows(*mode))
            .collect();

        let loading_label = (*state.load_status() == LoadStatus::Loading).then_some(
            match active_mode {
                SourceMode::Remote => "Loading online simulator...",
                SourceMode::Embedded => "Loading local embedded build...",
            },
        );

        let error_banner =
            (!state.error_text().is_empty()).then(|| state.error_text().to_string());

        Self {
            active_mode,
            modes,
            loading_label,
            error_banner,
        }
    }

    /// Whether the reload affordance is offered
    pub fn offers_reload(&self) -> bool {
        self.error_banner.is_some()
    }
}
