//! Call-to-action handlers.
//!
//! The waitlist button records an event and opens the signup form; the
//! footer button opens the project submission form. Analytics is never
//! allowed to block navigation.

use std::sync::Arc;
use std::time::Duration;

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::config::LandingConfig;
use crate::error::{LandingError, LandingResult};

/// How long the particle trigger is held high after a waitlist click.
pub const TRIGGER_PULSE: Duration = Duration::from_millis(100);

/// Opens a URL in a new browsing context.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> LandingResult<()>;
}

/// The user's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> LandingResult<()> {
        open::that(url).map_err(|e| LandingError::LinkOpen {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Page actions bound to their external capabilities.
#[derive(Clone)]
pub struct LandingActions {
    analytics: Arc<dyn AnalyticsSink>,
    opener: Arc<dyn LinkOpener>,
    config: Arc<LandingConfig>,
}

impl LandingActions {
    pub fn new(
        analytics: Arc<dyn AnalyticsSink>,
        opener: Arc<dyn LinkOpener>,
        config: Arc<LandingConfig>,
    ) -> Self {
        Self {
            analytics,
            opener,
            config,
        }
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    /// Record that the page is showing.
    pub fn page_view(&self) {
        self.record(AnalyticsEvent::PageView);
    }

    /// Record the click, then open the waitlist form.
    pub fn join_waitlist(&self) -> LandingResult<()> {
        self.record(AnalyticsEvent::WaitlistClick);
        self.open(&self.config.waitlist_url)
    }

    /// Open the project submission form.
    pub fn publish_project(&self) -> LandingResult<()> {
        self.open(&self.config.publish_url)
    }

    /// Open the author's profile.
    pub fn visit_author(&self) -> LandingResult<()> {
        self.open(&self.config.author_url)
    }

    fn record(&self, event: AnalyticsEvent) {
        if let Err(e) = self.analytics.log_event(event) {
            tracing::warn!(%event, "Failed to record analytics event: {}", e);
        }
    }

    fn open(&self, url: &str) -> LandingResult<()> {
        tracing::debug!(url, "Opening external link");
        self.opener.open(url)
    }
}
