//! Page configuration.
//!
//! Everything has a compiled-in default; the desktop binary may override
//! the countdown target and analytics location from the command line.

use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::countdown::{parse_target, Countdown};
use crate::error::LandingResult;

/// Launch instant, local wall-clock time.
pub const DEFAULT_COUNTDOWN_TARGET: &str = "2025-07-10T12:00:00";

/// Waitlist signup form.
pub const WAITLIST_URL: &str = "https://tally.so/r/wAYgXW";

/// Project submission form.
pub const PUBLISH_URL: &str = "https://tally.so/r/n0Y9pP";

/// Author link in the footer.
pub const AUTHOR_URL: &str = "https://www.linkedin.com/in/tarun-kumar-uttam/";

/// Session name used for analytics files when none is given.
pub const DEFAULT_SESSION: &str = "main";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingConfig {
    pub countdown_target: NaiveDateTime,
    pub waitlist_url: String,
    pub publish_url: String,
    pub author_url: String,
    /// Where analytics are recorded. `None` disables analytics.
    pub analytics_dir: Option<PathBuf>,
    pub session: String,
}

impl LandingConfig {
    /// Defaults with an optional countdown target override.
    pub fn with_target(target: Option<&str>) -> LandingResult<Self> {
        let countdown_target = parse_target(target.unwrap_or(DEFAULT_COUNTDOWN_TARGET))?;
        Ok(Self {
            countdown_target,
            ..Self::default()
        })
    }

    pub fn countdown(&self) -> Countdown {
        Countdown::new(self.countdown_target)
    }
}

impl Default for LandingConfig {
    fn default() -> Self {
        let countdown_target = NaiveDateTime::parse_from_str(
            DEFAULT_COUNTDOWN_TARGET,
            crate::countdown::TARGET_FORMAT,
        )
        .unwrap_or_default();

        Self {
            countdown_target,
            waitlist_url: WAITLIST_URL.to_string(),
            publish_url: PUBLISH_URL.to_string(),
            author_url: AUTHOR_URL.to_string(),
            analytics_dir: None,
            session: DEFAULT_SESSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LandingError;

    #[test]
    fn test_default_target_parses() {
        let config = LandingConfig::default();
        assert_eq!(
            config.countdown_target,
            parse_target(DEFAULT_COUNTDOWN_TARGET).unwrap()
        );
        assert_eq!(config.waitlist_url, WAITLIST_URL);
        assert!(config.analytics_dir.is_none());
    }

    #[test]
    fn test_target_override() {
        let config = LandingConfig::with_target(Some("2030-01-01T00:00:00")).unwrap();
        assert_eq!(config.countdown().target(), parse_target("2030-01-01T00:00:00").unwrap());
        assert_eq!(config.publish_url, PUBLISH_URL);
    }

    #[test]
    fn test_bad_override_is_config_error() {
        let err = LandingConfig::with_target(Some("2030/01/01")).unwrap_err();
        assert!(matches!(err, LandingError::InvalidTarget(_)));
    }
}
