//! Analytics event types.
//!
//! Each recorded event is one self-contained JSON object per line.

use serde::{Deserialize, Serialize};

/// Named page events. No payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsEvent {
    PageView,
    WaitlistClick,
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::PageView => "page_view",
            AnalyticsEvent::WaitlistClick => "waitlist_click",
        }
    }
}

impl std::fmt::Display for AnalyticsEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One line in an analytics log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    /// RFC 3339 timestamp with milliseconds (e.g., "2025-07-01T09:30:00.123Z")
    pub ts: String,

    /// Session name the event belongs to
    pub session: String,

    pub event: AnalyticsEvent,
}

impl AnalyticsRecord {
    /// Create a record stamped with the current time.
    pub fn new(session: impl Into<String>, event: AnalyticsEvent) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            session: session.into(),
            event,
        }
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
