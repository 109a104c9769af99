//! OpenSolo Landing Core Library
//!
//! Everything on the OpenSolo waitlist page that is not markup: the launch
//! countdown, the burst particles, the floating ornaments, the FAQ
//! accordion, the cursor follower and the call-to-action handlers.
//!
//! ## Overview
//!
//! The view layer owns timers and rendering. This crate owns the state those
//! timers drive and the capabilities the page talks to:
//!
//! - [`Clock`] for the current time
//! - [`Surface`] for particle drawing
//! - [`AnalyticsSink`] for best-effort event logging
//! - [`LinkOpener`] for outbound navigation
//!
//! Randomness comes in through [`rand::Rng`], so tests seed a `StdRng`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use opensolo_core::{run_countdown, LandingConfig, SystemClock};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = LandingConfig::default();
//!     run_countdown(config.countdown(), SystemClock, |state| {
//!         let left = state.remaining();
//!         println!("{}d {}h {}m {}s", left.days, left.hours, left.minutes, left.seconds);
//!     })
//!     .await;
//! }
//! ```

pub mod actions;
pub mod analytics;
pub mod config;
pub mod countdown;
pub mod cursor;
pub mod error;
pub mod faq;
pub mod ornaments;
pub mod particles;

// Re-exports
pub use actions::{LandingActions, LinkOpener, SystemBrowser, TRIGGER_PULSE};
pub use analytics::{open_sink, AnalyticsEvent, AnalyticsSink, JsonlAnalytics, NoopAnalytics};
pub use config::LandingConfig;
pub use countdown::{
    parse_target, run_countdown, Clock, Countdown, CountdownState, FixedClock, SystemClock,
    TimeRemaining,
};
pub use cursor::CursorFollower;
pub use error::{LandingError, LandingResult};
pub use faq::{FaqAccordion, FaqEntry, FAQ_ENTRIES};
pub use ornaments::{generate_ornaments, Ornament, ORNAMENT_COUNT};
pub use particles::{
    run_frames, ParticleAnimator, ParticleBatch, Sprite, SpriteSurface, Surface, Viewport,
    BATCH_SIZE,
};
