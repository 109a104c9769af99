//! Floating background circles.
//!
//! Generated once when the page mounts and never recomputed, so the layout
//! stays put across re-renders.

use std::ops::Range;

use rand::Rng;

/// Ornaments per page.
pub const ORNAMENT_COUNT: usize = 8;

/// Position range, percent of the viewport on each axis.
pub const POSITION_RANGE: Range<f64> = 0.0..100.0;

/// Diameter range in px.
pub const SIZE_RANGE: Range<f64> = 10.0..30.0;

/// Animation start delay range in seconds.
pub const DELAY_RANGE: Range<f64> = 0.0..4.0;

/// Float animation duration range in seconds.
pub const DURATION_RANGE: Range<f64> = 6.0..10.0;

/// A decorative floating circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ornament {
    pub id: usize,
    /// Horizontal position, percent
    pub x: f64,
    /// Vertical position, percent
    pub y: f64,
    /// Diameter, px
    pub size: f64,
    /// Animation delay, seconds
    pub delay: f64,
    /// Animation duration, seconds
    pub duration: f64,
}

impl Ornament {
    /// Inline style placing and timing the circle.
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.x, self.y, self.size, self.size, self.delay, self.duration
        )
    }
}

/// Generate the page's ornaments.
pub fn generate_ornaments<R: Rng>(rng: &mut R) -> Vec<Ornament> {
    (0..ORNAMENT_COUNT)
        .map(|id| Ornament {
            id,
            x: rng.random_range(POSITION_RANGE),
            y: rng.random_range(POSITION_RANGE),
            size: rng.random_range(SIZE_RANGE),
            delay: rng.random_range(DELAY_RANGE),
            duration: rng.random_range(DURATION_RANGE),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_fixed_count_with_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(42);
        let ornaments = generate_ornaments(&mut rng);

        assert_eq!(ornaments.len(), ORNAMENT_COUNT);
        for (i, ornament) in ornaments.iter().enumerate() {
            assert_eq!(ornament.id, i);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let first = generate_ornaments(&mut StdRng::seed_from_u64(9));
        let second = generate_ornaments(&mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_style_contains_timing() {
        let ornament = Ornament {
            id: 0,
            x: 12.5,
            y: 50.0,
            size: 20.0,
            delay: 1.5,
            duration: 8.0,
        };
        let style = ornament.style();
        assert!(style.contains("left: 12.50%"));
        assert!(style.contains("width: 20.00px"));
        assert!(style.contains("animation-delay: 1.50s"));
        assert!(style.contains("animation-duration: 8.00s"));
    }
}
