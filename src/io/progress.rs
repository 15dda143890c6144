//! Progress display for batch sprite generation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Sprites: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar wrapper for batch generation runs
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized for `sprite_count` sprites
    pub fn new(sprite_count: usize) -> Self {
        let bar = ProgressBar::new(sprite_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Record one completed sprite
    pub fn complete_sprite(&self) {
        self.bar.inc(1);
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
