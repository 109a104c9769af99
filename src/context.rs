//! Page context provider for OpenSolo.
//!
//! Provides the bound page actions to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| build_actions(get_config()));
//!
//! // In child components
//! let actions = use_actions();
//! actions.join_waitlist()?;
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use opensolo_core::{open_sink, LandingActions, LandingConfig, SystemBrowser};

/// Get the page configuration.
/// Uses the global config set from command line args.
pub fn get_config() -> LandingConfig {
    crate::get_config()
}

/// Bind the page actions to the system browser and the configured
/// analytics sink (no-op when analytics is off or unavailable).
pub fn build_actions(config: LandingConfig) -> LandingActions {
    let analytics = open_sink(config.analytics_dir.as_deref(), &config.session);
    LandingActions::new(analytics, Arc::new(SystemBrowser), Arc::new(config))
}

/// Hook to access the page actions from context.
pub fn use_actions() -> LandingActions {
    use_context::<LandingActions>()
}

/// Record a page view when the calling component mounts.
///
/// Re-renders of the same mount record nothing.
pub fn use_page_view() {
    let actions = use_actions();
    use_hook(move || actions.page_view());
}
