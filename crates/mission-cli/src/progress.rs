use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Spinner shown while waiting on a network call. A no-op when stdout is
/// not a terminal or quiet mode is on.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_clear(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
