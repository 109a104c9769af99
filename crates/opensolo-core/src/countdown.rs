//! Launch countdown.
//!
//! Breaks the distance between "now" and a fixed launch instant into
//! days / hours / minutes / seconds. The target is a local wall-clock time
//! with no zone attached, so two visitors in different zones count down to
//! different absolute instants.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};

use crate::error::{LandingError, LandingResult};

/// Accepted format for countdown targets.
pub const TARGET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// How often the countdown is recomputed.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Parse a `YYYY-MM-DDTHH:MM:SS` local timestamp.
pub fn parse_target(raw: &str) -> LandingResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TARGET_FORMAT)
        .map_err(|e| LandingError::InvalidTarget(format!("{raw:?}: {e}")))
}

/// Remaining time split into calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Split a millisecond difference. Anything `<= 0` is zero.
    pub fn from_millis(diff_ms: i64) -> Self {
        if diff_ms <= 0 {
            return Self::ZERO;
        }

        Self {
            days: (diff_ms / MS_PER_DAY) as u64,
            hours: ((diff_ms % MS_PER_DAY) / MS_PER_HOUR) as u8,
            minutes: ((diff_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
            seconds: ((diff_ms % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Display cells: value padded to two digits plus its label.
    pub fn cells(&self) -> [(String, &'static str); 4] {
        [
            (format!("{:02}", self.days), "DAYS"),
            (format!("{:02}", self.hours), "HOURS"),
            (format!("{:02}", self.minutes), "MINUTES"),
            (format!("{:02}", self.seconds), "SECONDS"),
        ]
    }
}

/// Where the countdown stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running(TimeRemaining),
    /// `now` has reached or passed the target.
    Expired,
}

impl CountdownState {
    /// Breakdown to display. Expired shows all zeros.
    pub fn remaining(&self) -> TimeRemaining {
        match self {
            CountdownState::Running(remaining) => *remaining,
            CountdownState::Expired => TimeRemaining::ZERO,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, CountdownState::Expired)
    }
}

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Countdown towards a fixed target instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: NaiveDateTime,
}

impl Countdown {
    pub fn new(target: NaiveDateTime) -> Self {
        Self { target }
    }

    pub fn target(&self) -> NaiveDateTime {
        self.target
    }

    /// Breakdown of `target - now`, floored to whole seconds.
    pub fn remaining_at(&self, now: NaiveDateTime) -> TimeRemaining {
        let diff = self.target.signed_duration_since(now);
        TimeRemaining::from_millis(diff.num_milliseconds())
    }

    pub fn state_at(&self, now: NaiveDateTime) -> CountdownState {
        if now >= self.target {
            CountdownState::Expired
        } else {
            CountdownState::Running(self.remaining_at(now))
        }
    }

    pub fn state(&self, clock: &impl Clock) -> CountdownState {
        self.state_at(clock.now())
    }
}

/// Drive a countdown: report once immediately, then every [`TICK_INTERVAL`].
///
/// Never returns; the owner stops it by dropping (aborting) the task.
pub async fn run_countdown<C, F>(countdown: Countdown, clock: C, mut on_tick: F)
where
    C: Clock,
    F: FnMut(CountdownState),
{
    let mut interval = tokio::time::interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut was_expired = false;
    loop {
        // First tick completes immediately.
        interval.tick().await;

        let state = countdown.state(&clock);
        if state.is_expired() && !was_expired {
            tracing::info!(launch = %countdown.target(), "Countdown reached launch target");
            was_expired = true;
        }
        on_tick(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> NaiveDateTime {
        parse_target(raw).unwrap()
    }

    #[test]
    fn test_one_day_before_target() {
        let countdown = Countdown::new(at("2025-07-10T12:00:00"));
        let remaining = countdown.remaining_at(at("2025-07-09T12:00:00"));
        assert_eq!(
            remaining,
            TimeRemaining {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_mixed_breakdown() {
        let countdown = Countdown::new(at("2025-07-10T12:00:00"));
        let remaining = countdown.remaining_at(at("2025-07-07T09:58:15"));
        assert_eq!(remaining.days, 3);
        assert_eq!(remaining.hours, 2);
        assert_eq!(remaining.minutes, 1);
        assert_eq!(remaining.seconds, 45);
    }

    #[test]
    fn test_sub_second_difference_floors_to_zero() {
        assert!(TimeRemaining::from_millis(999).is_zero());
        assert_eq!(TimeRemaining::from_millis(1000).seconds, 1);
    }

    #[test]
    fn test_at_and_after_target() {
        let target = at("2025-07-10T12:00:00");
        let countdown = Countdown::new(target);

        assert!(countdown.remaining_at(target).is_zero());
        assert!(countdown.state_at(target).is_expired());

        let later = at("2026-01-01T00:00:00");
        assert_eq!(countdown.remaining_at(later), TimeRemaining::ZERO);
        assert_eq!(countdown.state_at(later).remaining(), TimeRemaining::ZERO);
    }

    #[test]
    fn test_running_state_before_target() {
        let countdown = Countdown::new(at("2025-07-10T12:00:00"));
        let state = countdown.state(&FixedClock(at("2025-07-10T11:59:59")));
        assert_eq!(
            state,
            CountdownState::Running(TimeRemaining {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 1
            })
        );
    }

    #[test]
    fn test_cells_are_zero_padded() {
        let remaining = TimeRemaining {
            days: 123,
            hours: 4,
            minutes: 0,
            seconds: 59,
        };
        let cells = remaining.cells();
        assert_eq!(cells[0], ("123".to_string(), "DAYS"));
        assert_eq!(cells[1], ("04".to_string(), "HOURS"));
        assert_eq!(cells[2], ("00".to_string(), "MINUTES"));
        assert_eq!(cells[3], ("59".to_string(), "SECONDS"));
    }

    #[test]
    fn test_parse_target_rejects_garbage() {
        let err = parse_target("next tuesday").unwrap_err();
        assert!(matches!(err, LandingError::InvalidTarget(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_countdown_ticks_every_second() {
        let countdown = Countdown::new(at("2025-07-10T12:00:00"));
        let clock = FixedClock(at("2025-07-09T12:00:00"));
        let ticks = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));

        let counter = ticks.clone();
        let task = tokio::spawn(run_countdown(countdown, clock, move |state| {
            assert!(!state.is_expired());
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }));

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(ticks.load(std::sync::atomic::Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(ticks.load(std::sync::atomic::Ordering::SeqCst), 4);

        task.abort();
    }
}
