//! Best-effort analytics.
//!
//! Callers always go through an [`AnalyticsSink`]. When no log is
//! configured, or the log cannot be opened, the sink is [`NoopAnalytics`],
//! so page code never checks availability itself.
//!
//! ```text
//! analytics/
//! ├── 2025-07-01_main.jsonl
//! └── 2025-07-02_main.jsonl
//! ```

pub mod event;
pub mod writer;

use std::path::Path;
use std::sync::Arc;

pub use event::{AnalyticsEvent, AnalyticsRecord};
pub use writer::{read_records, JsonlAnalytics};

use crate::error::LandingResult;

/// Receiver of named page events.
pub trait AnalyticsSink: Send + Sync {
    fn log_event(&self, event: AnalyticsEvent) -> LandingResult<()>;
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn log_event(&self, event: AnalyticsEvent) -> LandingResult<()> {
        tracing::trace!(%event, "Analytics disabled, dropping event");
        Ok(())
    }
}

/// Open a JSONL sink under `dir`, or fall back to [`NoopAnalytics`].
pub fn open_sink(dir: Option<&Path>, session: &str) -> Arc<dyn AnalyticsSink> {
    let Some(dir) = dir else {
        return Arc::new(NoopAnalytics);
    };

    match JsonlAnalytics::new(dir, session) {
        Ok(sink) => {
            tracing::info!("Recording analytics to {:?}", sink.path());
            Arc::new(sink)
        }
        Err(e) => {
            tracing::warn!("Analytics unavailable ({}), continuing without it", e);
            Arc::new(NoopAnalytics)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_noop_accepts_everything() {
        assert!(NoopAnalytics.log_event(AnalyticsEvent::PageView).is_ok());
    }

    #[test]
    fn test_open_sink_without_dir_is_noop() {
        let sink = open_sink(None, "main");
        assert!(sink.log_event(AnalyticsEvent::WaitlistClick).is_ok());
    }

    #[test]
    fn test_open_sink_falls_back_when_dir_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "").unwrap();

        let sink = open_sink(Some(&blocker), "main");
        assert!(sink.log_event(AnalyticsEvent::PageView).is_ok());
        assert!(read_records(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_open_sink_records_to_dir() {
        let dir = TempDir::new().unwrap();
        let sink = open_sink(Some(dir.path()), "main");
        sink.log_event(AnalyticsEvent::PageView).unwrap();

        let records = read_records(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].event, AnalyticsEvent::PageView);
    }
}
