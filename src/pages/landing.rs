//! Landing page - the OpenSolo waitlist.
//!
//! Hero, join-waitlist call to action, launch countdown, FAQ and a footer
//! inviting maintainers to publish their projects.

use dioxus::prelude::*;
use opensolo_core::{CursorFollower, TRIGGER_PULSE};

use crate::components::{CountdownTimer, CursorDot, FaqAccordion, FloatingOrnaments, ParticleOverlay};
use crate::context::{use_actions, use_page_view};

/// Landing page component.
///
/// Records a page view once per mount.
#[component]
pub fn Landing() -> Element {
    let actions = use_actions();
    let countdown = actions.config().countdown();
    let mut particle_trigger = use_signal(|| false);
    let mut cursor = use_signal(CursorFollower::default);

    use_page_view();

    let join_waitlist = {
        let actions = actions.clone();
        move |_| {
            // Short pulse: the overlay reacts to the rising edge only
            particle_trigger.set(true);
            spawn(async move {
                tokio::time::sleep(TRIGGER_PULSE).await;
                particle_trigger.set(false);
            });

            if let Err(e) = actions.join_waitlist() {
                tracing::error!("Failed to open waitlist form: {}", e);
            }
        }
    };

    let publish_project = {
        let actions = actions.clone();
        move |_| {
            if let Err(e) = actions.publish_project() {
                tracing::error!("Failed to open project submission form: {}", e);
            }
        }
    };

    let visit_author = move |evt: MouseEvent| {
        evt.prevent_default();
        if let Err(e) = actions.visit_author() {
            tracing::error!("Failed to open author profile: {}", e);
        }
    };

    rsx! {
        div {
            class: "landing-root",
            onmousemove: move |evt: MouseEvent| {
                let point = evt.client_coordinates();
                cursor.write().track(point.x, point.y);
            },

            FloatingOrnaments {}
            ParticleOverlay { trigger: particle_trigger }
            CursorDot { follower: cursor() }

            main { class: "landing",
                header { class: "landing-header",
                    div { class: "logo-tile",
                        span { class: "logo-mark", "OS" }
                    }

                    div { class: "availability-badge",
                        span { class: "status-dot active" }
                        span { "AVAILABLE IN JULY 2025" }
                    }

                    h1 { class: "page-title", "OpenSolo" }
                    p { class: "tagline",
                        "OpenSolo is a platform made for people who love open-source. "
                        "It helps you find meaningful projects, contribute more easily, "
                        "and become an important part of the global open-source community."
                    }

                    button {
                        class: "btn-waitlist",
                        onclick: join_waitlist,
                        "Join waitlist"
                    }

                    p { class: "waitlist-count", "Join 299+ others on the waitlist" }
                }

                CountdownTimer { countdown }

                FaqAccordion {}

                // Background gradient orbs
                div { class: "glow-orb glow-orb-left" }
                div { class: "glow-orb glow-orb-right" }
            }

            footer { class: "landing-footer",
                div { class: "footer-cta",
                    h3 { class: "footer-title", "Have an open-source project to share?" }
                    p { class: "body-text",
                        "Submit your project and be among the first to simplify how your team "
                        "shares updates across platforms."
                    }
                    button {
                        class: "btn-publish",
                        onclick: publish_project,
                        "Publish to OpenSolo"
                    }
                }

                div { class: "footer-copyright",
                    "© 2025 OpenSolo by "
                    a {
                        href: "#",
                        class: "author-link",
                        onclick: visit_author,
                        "@Tarun"
                    }
                }
            }
        }
    }
}
