//! Progress notification port
//!
//! Defines the interface for reporting quiz fetch progress.

use learnpal_domain::{FetchResolution, Topic};

/// Callback for progress updates while a quiz is fetched
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, etc.)
pub trait FetchProgressNotifier: Send + Sync {
    /// Called once the request for `topic` has been issued
    fn on_fetch_start(&self, topic: &Topic);

    /// Called when the fetch for `topic` has resolved
    fn on_fetch_complete(&self, topic: &Topic, resolution: &FetchResolution);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl FetchProgressNotifier for NoProgress {
    fn on_fetch_start(&self, _topic: &Topic) {}
    fn on_fetch_complete(&self, _topic: &Topic, _resolution: &FetchResolution) {}
}
