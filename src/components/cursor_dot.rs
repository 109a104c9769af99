use dioxus::prelude::*;
use opensolo_core::CursorFollower;

/// Translucent dot trailing the pointer.
#[component]
pub fn CursorDot(follower: CursorFollower) -> Element {
    rsx! {
        div {
            class: "cursor-dot",
            style: "{follower.style()}",
            "aria-hidden": "true",
        }
    }
}
