//! Progress display for batch identicon generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}} {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advanced once per generated identicon
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    /// Visible progress bar for `total` identifiers
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Progress bar that tracks position without drawing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Record that the identicon for `id` is done
    pub fn advance(&self, id: &str) {
        self.bar.set_message(id.to_string());
        self.bar.inc(1);
    }

    /// Number of identicons recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar, leaving it on screen
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}
