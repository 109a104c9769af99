//! Particle Burst Overlay
//!
//! Full-window SVG layer that draws the waitlist burst. A rising edge on
//! `trigger` spawns a batch; frames run until every particle has faded.

use dioxus::desktop::use_window;
use dioxus::prelude::*;
use opensolo_core::{run_frames, ParticleAnimator, Sprite, SpriteSurface, Viewport};

/// Particle overlay
///
/// # Example
///
/// ```rust,ignore
/// let mut burst = use_signal(|| false);
/// rsx! {
///     ParticleOverlay { trigger: burst }
/// }
/// ```
#[component]
pub fn ParticleOverlay(trigger: ReadOnlySignal<bool>) -> Element {
    let desktop = use_window();
    let mut animator = use_signal(ParticleAnimator::new);
    let mut surface = use_signal(SpriteSurface::default);
    let mut running = use_signal(|| false);

    use_effect(move || {
        let level = trigger();

        let size = desktop
            .window
            .inner_size()
            .to_logical::<f64>(desktop.window.scale_factor());
        let viewport = Viewport::new(size.width, size.height);

        let spawned = animator.write().set_trigger(
            level,
            Some(&mut *surface.write()),
            viewport,
            &mut rand::rng(),
        );

        // One frame loop serves every live batch.
        if spawned && !*running.peek() {
            running.set(true);
            spawn(async move {
                run_frames(move || animator.write().frame(&mut *surface.write())).await;
                running.set(false);
            });
        }
    });

    let viewport = surface.read().viewport();
    let sprites: Vec<Sprite> = surface.read().sprites().to_vec();

    rsx! {
        svg {
            class: "particle-overlay",
            width: "{viewport.width}",
            height: "{viewport.height}",
            "aria-hidden": "true",

            for (index, sprite) in sprites.iter().enumerate() {
                circle {
                    key: "{index}",
                    cx: "{sprite.center.x}",
                    cy: "{sprite.center.y}",
                    r: "{sprite.radius}",
                    fill: "{sprite.color.css()}",
                }
            }
        }
    }
}
