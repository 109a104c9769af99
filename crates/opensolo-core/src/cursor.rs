//! Pointer-following dot.

/// Diameter of the follower dot in px.
pub const FOLLOWER_SIZE: f64 = 16.0;

/// Last known pointer position, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorFollower {
    x: f64,
    y: f64,
}

impl CursorFollower {
    pub fn track(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Top-left corner of the dot, centred on the pointer.
    pub fn offset(&self) -> (f64, f64) {
        let half = FOLLOWER_SIZE / 2.0;
        (self.x - half, self.y - half)
    }

    pub fn style(&self) -> String {
        let (left, top) = self.offset();
        format!("left: {left}px; top: {top}px;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_is_centred_on_pointer() {
        let mut follower = CursorFollower::default();
        follower.track(100.0, 40.0);
        assert_eq!(follower.offset(), (92.0, 32.0));
        assert_eq!(follower.style(), "left: 92px; top: 32px;");
    }
}
