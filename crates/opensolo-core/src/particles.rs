//! Burst particles for the waitlist button.
//!
//! A rising trigger edge spawns a batch of [`BATCH_SIZE`] particles at the
//! centre of the viewport. Every frame each particle drifts by its velocity,
//! loses one unit of life and fades with `life / max_life`. Dead particles
//! are removed; the frame loop stops once nothing is left and the surface
//! stays cleared.

use std::time::Duration;

use rand::Rng;

/// Particles per trigger edge.
pub const BATCH_SIZE: usize = 20;

/// Lifespan of a particle, in frames.
pub const PARTICLE_LIFE: u32 = 60;

/// Upper bound of each velocity component (px per frame).
pub const MAX_SPEED: f64 = 5.0;

/// Radius of a drawn particle (px).
pub const PARTICLE_RADIUS: f64 = 3.0;

/// Pacing of the frame loop (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Lime particle tint.
const PARTICLE_RGB: (u8, u8, u8) = (163, 230, 53);

/// Size of the drawing area in px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Fill colour with alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

/// Something particles can be drawn onto.
pub trait Surface {
    /// Match the surface to the viewport.
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
}

/// One filled circle recorded by a [`SpriteSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub center: Point,
    pub radius: f64,
    pub color: Rgba,
}

/// Retained-mode surface: records the circles of the latest frame so a
/// view layer can render them (the desktop page draws them as SVG).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpriteSurface {
    viewport: Viewport,
    sprites: Vec<Sprite>,
}

impl SpriteSurface {
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn is_clear(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Surface for SpriteSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn clear(&mut self) {
        self.sprites.clear();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.sprites.push(Sprite {
            center,
            radius,
            color,
        });
    }
}

/// A single decaying point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    fn advance(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.life = self.life.saturating_sub(1);
    }

    /// Fade factor, 1.0 when fresh and 0.0 when spent.
    pub fn alpha(&self) -> f64 {
        if self.max_life == 0 {
            return 0.0;
        }
        f64::from(self.life) / f64::from(self.max_life)
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    fn color(&self) -> Rgba {
        let (r, g, b) = PARTICLE_RGB;
        Rgba {
            r,
            g,
            b,
            a: self.alpha(),
        }
    }
}

/// One cohort of particles spawned by a single trigger edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBatch {
    particles: Vec<Particle>,
}

impl ParticleBatch {
    /// Spawn [`BATCH_SIZE`] particles at `origin` with random velocities.
    pub fn spawn<R: Rng>(origin: Point, rng: &mut R) -> Self {
        let particles = (0..BATCH_SIZE)
            .map(|_| Particle {
                position: origin,
                velocity: Point {
                    x: rng.random_range(-MAX_SPEED..=MAX_SPEED),
                    y: rng.random_range(-MAX_SPEED..=MAX_SPEED),
                },
                life: PARTICLE_LIFE,
                max_life: PARTICLE_LIFE,
            })
            .collect();

        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance one frame, drawing survivors and dropping the dead.
    fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for particle in &mut self.particles {
            particle.advance();
            if particle.is_alive() {
                surface.fill_circle(particle.position, PARTICLE_RADIUS, particle.color());
            }
        }
        self.particles.retain(Particle::is_alive);
    }
}

/// Edge-triggered particle emitter.
///
/// Each rising edge adds an independent batch; in-flight batches are never
/// cancelled. All live batches share one frame.
#[derive(Debug, Clone, Default)]
pub struct ParticleAnimator {
    level: bool,
    batches: Vec<ParticleBatch>,
}

impl ParticleAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current trigger level.
    ///
    /// Returns `true` if a new batch was spawned. Without a surface the edge
    /// is consumed and nothing happens.
    pub fn set_trigger<S, R>(
        &mut self,
        level: bool,
        surface: Option<&mut S>,
        viewport: Viewport,
        rng: &mut R,
    ) -> bool
    where
        S: Surface + ?Sized,
        R: Rng,
    {
        let rising = level && !self.level;
        self.level = level;
        if !rising {
            return false;
        }

        let Some(surface) = surface else {
            tracing::debug!("No particle surface available, skipping burst");
            return false;
        };

        surface.resize(viewport);
        self.batches.push(ParticleBatch::spawn(viewport.center(), rng));
        tracing::debug!(batches = self.batches.len(), "Spawned particle batch");
        true
    }

    /// Render one frame. Returns whether another frame is needed.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        surface.clear();
        for batch in &mut self.batches {
            batch.advance(surface);
        }
        self.batches.retain(|batch| !batch.is_empty());
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        !self.batches.is_empty()
    }

    pub fn batches(&self) -> &[ParticleBatch] {
        &self.batches
    }

    pub fn particle_count(&self) -> usize {
        self.batches.iter().map(ParticleBatch::len).sum()
    }
}

/// Call `frame` once per [`FRAME_INTERVAL`] until it returns `false`.
///
/// Returns the number of frames rendered.
pub async fn run_frames<F>(mut frame: F) -> usize
where
    F: FnMut() -> bool,
{
    let mut frames = 0;
    loop {
        tokio::time::sleep(FRAME_INTERVAL).await;
        frames += 1;
        if !frame() {
            break;
        }
    }
    tracing::trace!(frames, "Particle animation finished");
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn test_batch_spawns_at_origin_within_speed_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let batch = ParticleBatch::spawn(Point { x: 400.0, y: 300.0 }, &mut rng);

        assert_eq!(batch.len(), BATCH_SIZE);
        for particle in batch.particles() {
            assert_eq!(particle.position, Point { x: 400.0, y: 300.0 });
            assert!(particle.velocity.x.abs() <= MAX_SPEED);
            assert!(particle.velocity.y.abs() <= MAX_SPEED);
            assert_eq!(particle.life, PARTICLE_LIFE);
            assert_eq!(particle.max_life, PARTICLE_LIFE);
        }
    }

    #[test]
    fn test_rising_edge_only() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut surface = SpriteSurface::default();
        let mut animator = ParticleAnimator::new();

        assert!(animator.set_trigger(true, Some(&mut surface), viewport(), &mut rng));
        // Held high: no new batch.
        assert!(!animator.set_trigger(true, Some(&mut surface), viewport(), &mut rng));
        assert!(!animator.set_trigger(false, Some(&mut surface), viewport(), &mut rng));
        assert!(animator.set_trigger(true, Some(&mut surface), viewport(), &mut rng));

        assert_eq!(animator.batches().len(), 2);
        assert_eq!(animator.particle_count(), 2 * BATCH_SIZE);
        assert_eq!(surface.viewport(), viewport());
    }

    #[test]
    fn test_missing_surface_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut animator = ParticleAnimator::new();

        let spawned = animator.set_trigger::<SpriteSurface, _>(true, None, viewport(), &mut rng);
        assert!(!spawned);
        assert!(!animator.is_active());
    }

    #[test]
    fn test_particles_fade_and_drift() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut surface = SpriteSurface::default();
        let mut animator = ParticleAnimator::new();
        animator.set_trigger(true, Some(&mut surface), viewport(), &mut rng);

        let first = animator.batches()[0].particles()[0];
        assert!(animator.frame(&mut surface));

        let after = animator.batches()[0].particles()[0];
        assert_eq!(after.position.x, first.position.x + first.velocity.x);
        assert_eq!(after.position.y, first.position.y + first.velocity.y);
        assert_eq!(after.life, PARTICLE_LIFE - 1);

        assert_eq!(surface.sprites().len(), BATCH_SIZE);
        let sprite = surface.sprites()[0];
        assert_eq!(sprite.radius, PARTICLE_RADIUS);
        assert!((sprite.color.a - 59.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_batch_expires_after_lifespan_and_leaves_surface_clear() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut surface = SpriteSurface::default();
        let mut animator = ParticleAnimator::new();
        animator.set_trigger(true, Some(&mut surface), viewport(), &mut rng);

        let mut frames = 0;
        let mut previous = animator.particle_count();
        while animator.frame(&mut surface) {
            frames += 1;
            assert!(animator.particle_count() <= previous);
            previous = animator.particle_count();
        }
        frames += 1;

        assert_eq!(frames, PARTICLE_LIFE as usize);
        assert_eq!(animator.particle_count(), 0);
        assert!(surface.is_clear());
    }

    #[test]
    fn test_rgba_css() {
        let color = Rgba {
            r: 163,
            g: 230,
            b: 53,
            a: 0.5,
        };
        assert_eq!(color.css(), "rgba(163, 230, 53, 0.500)");
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_frames_stops_when_batch_is_spent() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut surface = SpriteSurface::default();
        let mut animator = ParticleAnimator::new();
        animator.set_trigger(true, Some(&mut surface), viewport(), &mut rng);

        let frames = run_frames(|| animator.frame(&mut surface)).await;

        assert_eq!(frames, PARTICLE_LIFE as usize);
        assert!(!animator.is_active());
        assert!(surface.is_clear());
    }
}
