//! Loading spinner for one-shot commands

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the datasets load.
///
/// A disabled spinner (quiet mode, JSON output) prints nothing.
pub struct LoadingSpinner {
    bar: Option<ProgressBar>,
}

impl LoadingSpinner {
    pub fn start(message: impl Into<String>, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    pub fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    pub fn finish(&self, message: impl AsRef<str>) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("{} {}", "v".green(), message.as_ref()));
        }
    }

    pub fn fail(&self, message: impl AsRef<str>) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(format!("{} {}", "x".red(), message.as_ref()));
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}
