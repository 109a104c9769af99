//! FAQ Accordion
//!
//! Static questions where at most one answer is expanded. Clicking the open
//! question collapses it; clicking another one moves the expansion there.

use dioxus::prelude::*;
use opensolo_core::{FaqAccordion as AccordionState, FAQ_ENTRIES};

#[component]
pub fn FaqAccordion() -> Element {
    let mut accordion = use_signal(AccordionState::default);

    rsx! {
        section { class: "faq-section",
            h2 { class: "section-header", "Frequently asked questions" }

            div { class: "faq-list",
                for (index, entry) in FAQ_ENTRIES.iter().enumerate() {
                    {
                        let is_open = accordion.read().is_open(index);
                        let item_class = if is_open { "faq-item open" } else { "faq-item" };

                        rsx! {
                            div { key: "{index}", class: "{item_class}",
                                button {
                                    class: "faq-question",
                                    "aria-expanded": "{is_open}",
                                    onclick: move |_| {
                                        if let Err(e) = accordion.write().set_open(index, !is_open) {
                                            tracing::warn!("Ignoring FAQ toggle: {}", e);
                                        }
                                    },
                                    span { class: "faq-question-text", "{entry.question}" }
                                    span { class: "faq-toggle-icon", "+" }
                                }

                                if is_open {
                                    div { class: "faq-answer",
                                        div { class: "faq-answer-body", "{entry.answer}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
