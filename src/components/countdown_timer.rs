//! Launch countdown display.
//!
//! Four tabular cells (days, hours, minutes, seconds) refreshed once per
//! second until the page unmounts.

use dioxus::prelude::*;
use opensolo_core::{run_countdown, Countdown, CountdownState, SystemClock};

/// Countdown to the launch target.
///
/// The ticking task lives in a `use_future`, so it is cancelled together
/// with the component.
#[component]
pub fn CountdownTimer(countdown: Countdown) -> Element {
    let mut state: Signal<CountdownState> = use_signal(|| countdown.state(&SystemClock));

    use_future(move || async move {
        run_countdown(countdown, SystemClock, move |next| {
            if *state.peek() != next {
                state.set(next);
            }
        })
        .await;
    });

    let current = state();
    let expired_class = if current.is_expired() { "expired" } else { "" };

    rsx! {
        div { class: "countdown {expired_class}",
            div { class: "countdown-cells",
                for (value, label) in current.remaining().cells() {
                    div { key: "{label}", class: "countdown-cell",
                        div { class: "countdown-value", "{value}" }
                        div { class: "countdown-label", "{label}" }
                    }
                }
            }

            div { class: "countdown-caption",
                span { class: "countdown-caption-icon", "◷" }
                span { "OpenSolo Goes Live In" }
            }
        }
    }
}
