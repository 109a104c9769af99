use dioxus::prelude::*;

use crate::context::{build_actions, get_config};
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The waitlist landing page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, page actions, and routing.
#[component]
pub fn App() -> Element {
    // Provide page actions to all child components
    use_context_provider(|| build_actions(get_config()));

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
