// Events that flow between the fetch task and the TUI
//
// Using enums for both directions keeps the channel traffic type-safe:
// the UI sends FetchCommands, the fetch task answers with GalleryEvents.

use crate::api::models::Artwork;
use std::time::Duration;

/// Request for one page of artworks, sent from the UI to the fetch task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchCommand {
    /// 1-based page number
    pub page: u32,
    /// Rows per page
    pub limit: u32,
}

/// Outcome of a page load, sent from the fetch task to the UI
#[derive(Debug, Clone)]
pub enum GalleryEvent {
    /// A page arrived; replaces the current page window
    PageLoaded {
        page: u32,
        artworks: Vec<Artwork>,
        total: u64,
        elapsed: Duration,
    },

    /// The fetch or parse failed; the UI keeps its prior state
    FetchFailed { page: u32 },
}

/// Session counters for the status bar
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub pages_loaded: usize,
    pub fetch_failures: usize,
    pub total_fetch_time: Duration,
}

impl Stats {
    pub fn record_load(&mut self, elapsed: Duration) {
        self.pages_loaded += 1;
        self.total_fetch_time += elapsed;
    }

    pub fn record_failure(&mut self) {
        self.fetch_failures += 1;
    }

    /// Mean page-load latency over the session
    pub fn avg_fetch_time(&self) -> Duration {
        if self.pages_loaded == 0 {
            Duration::default()
        } else {
            self.total_fetch_time / self.pages_loaded as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avg_fetch_time_handles_zero_loads() {
        let stats = Stats::default();
        assert_eq!(stats.avg_fetch_time(), Duration::default());
    }

    #[test]
    fn avg_fetch_time_is_mean_of_loads() {
        let mut stats = Stats::default();
        stats.record_load(Duration::from_millis(100));
        stats.record_load(Duration::from_millis(300));
        assert_eq!(stats.avg_fetch_time(), Duration::from_millis(200));
    }
}
