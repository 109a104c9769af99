//! UI Components for the OpenSolo landing page.
//!
//! Light, lime-accented components over a soft gray background.

mod countdown_timer;
mod cursor_dot;
mod faq_accordion;
mod floating_ornaments;
mod particle_overlay;

pub use countdown_timer::CountdownTimer;
pub use cursor_dot::CursorDot;
pub use faq_accordion::FaqAccordion;
pub use floating_ornaments::FloatingOrnaments;
pub use particle_overlay::ParticleOverlay;
