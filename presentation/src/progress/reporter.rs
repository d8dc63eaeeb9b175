//! Progress reporting while a quiz is generated

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use learnpal_application::FetchProgressNotifier;
use learnpal_domain::{FetchResolution, Topic};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner for the duration of a fetch
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn resolution_message(resolution: &FetchResolution) -> String {
        match resolution {
            FetchResolution::Installed { questions } => {
                format!("{} {} questions ready", "v".green(), questions)
            }
            FetchResolution::Failed => format!("{} generation failed", "x".red()),
            FetchResolution::Stale => format!("{} superseded by a newer topic", "-".dimmed()),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchProgressNotifier for ProgressReporter {
    fn on_fetch_start(&self, topic: &Topic) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_prefix("Generating");
        spinner.set_message(format!("quiz on \"{}\"", topic));
        spinner.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(spinner)
        {
            previous.finish_and_clear();
        }
    }

    fn on_fetch_complete(&self, _topic: &Topic, resolution: &FetchResolution) {
        let spinner = self.spinner.lock().ok().and_then(|mut slot| slot.take());
        if let Some(spinner) = spinner {
            spinner.finish_with_message(Self::resolution_message(resolution));
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl FetchProgressNotifier for SimpleProgress {
    fn on_fetch_start(&self, topic: &Topic) {
        println!("{} Generating quiz on \"{}\"...", "->".cyan(), topic);
    }

    fn on_fetch_complete(&self, _topic: &Topic, resolution: &FetchResolution) {
        println!("  {}", ProgressReporter::resolution_message(resolution));
    }
}
