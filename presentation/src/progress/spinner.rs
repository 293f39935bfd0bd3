//! Spinner shown while an image upload is in flight

use colored::Colorize;
use composer_application::UploadOutcome;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for a single upload.
pub struct UploadSpinner {
    bar: ProgressBar,
}

impl UploadSpinner {
    /// Start spinning with the file name as the message.
    pub fn start(file_name: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_prefix("Uploading");
        bar.set_message(file_name.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    #[cfg(test)]
    fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Stop the spinner and leave a one-line summary.
    pub fn finish(self, outcome: &UploadOutcome) {
        let message = match outcome {
            UploadOutcome::Inserted(image) => {
                format!("{} {} -> {}", "v".green(), image.file_name, image.url)
            }
            UploadOutcome::Failed => format!("{} upload failed (see log)", "x".red()),
        };
        self.bar.finish_with_message(message);
    }

    /// Stop the spinner without a summary.
    pub fn abandon(self) {
        self.bar.finish_and_clear();
    }
}
