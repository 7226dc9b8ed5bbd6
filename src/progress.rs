//! Progress display for asset copying

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the asset tree is mirrored.
///
/// Draws to stderr and stays hidden when stderr is not a terminal.
pub struct CopyProgress {
    pb: ProgressBar,
}

impl CopyProgress {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {pos} files {msg}")
        {
            pb.set_style(style);
        }
        Self { pb }
    }

    /// Record one copied file
    pub fn copied(&self, path: &Path) {
        let display = path.display().to_string();
        // Truncate long paths for display
        let display = if display.len() > 50 {
            let cut = display.len() - 47;
            let cut = (cut..display.len())
                .find(|i| display.is_char_boundary(*i))
                .unwrap_or(cut);
            format!("...{}", &display[cut..])
        } else {
            display
        };
        self.pb.set_message(display);
        self.pb.inc(1);
    }

    /// Finish and clear the spinner
    pub fn finish(&self, total: usize) {
        self.pb.finish_and_clear();
        tracing::debug!(total, "asset copy finished");
    }
}

impl Default for CopyProgress {
    fn default() -> Self {
        Self::new()
    }
}
