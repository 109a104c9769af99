//! Floating background circles, laid out once per mount.

use dioxus::prelude::*;
use opensolo_core::generate_ornaments;

#[component]
pub fn FloatingOrnaments() -> Element {
    // use_hook runs on first mount only, re-renders keep the same layout
    let ornaments = use_hook(|| generate_ornaments(&mut rand::rng()));

    rsx! {
        div { class: "floating-ornaments", "aria-hidden": "true",
            for ornament in ornaments {
                div {
                    key: "{ornament.id}",
                    class: "ornament",
                    style: "{ornament.style()}",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::dioxus_core::{Mutation, ScopeId, VirtualDom};
    use opensolo_core::ORNAMENT_COUNT;

    use super::*;

    fn style_writes(edits: &[Mutation]) -> usize {
        edits
            .iter()
            .filter(|edit| matches!(edit, Mutation::SetAttribute { name: "style", .. }))
            .count()
    }

    #[test]
    fn test_layout_survives_rerenders() {
        let mut dom = VirtualDom::new(FloatingOrnaments);

        let created = dom.rebuild_to_vec();
        assert_eq!(style_writes(&created.edits), ORNAMENT_COUNT);

        for _ in 0..3 {
            dom.mark_dirty(ScopeId::APP);
            let rerendered = dom.render_immediate_to_vec();
            assert_eq!(style_writes(&rerendered.edits), 0);
        }
    }
}
