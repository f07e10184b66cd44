use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{Result, SimError};
use glam::Vec2;

/// The viewport extent the particles are confined to, in pixels.
///
/// Owned by the host; the simulation only reads it during boundary resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportBounds {
    width: u32,
    height: u32,
}

impl ViewportBounds {
    /// Create bounds, rejecting a zero-sized viewport
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidBounds { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maximum x/y coordinate as floats
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn center(&self) -> Vec2 {
        self.extent() / 2.0
    }

    /// True when `pos` lies in the closed rectangle `[0, width] x [0, height]`
    pub fn contains(&self, pos: Vec2) -> bool {
        let extent = self.extent();
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= extent.x && pos.y <= extent.y
    }

    /// Replace the extent in place (host resize)
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        *self = Self::new(width, height)?;
        Ok(())
    }
}

impl Default for ViewportBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_extent() {
        assert!(ViewportBounds::new(0, 100).is_err());
        assert!(ViewportBounds::new(100, 0).is_err());
        assert!(ViewportBounds::new(1, 1).is_ok());
    }

    #[test]
    fn contains_is_inclusive_of_edges() {
        let b = ViewportBounds::new(640, 480).unwrap();
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(640.0, 480.0)));
        assert!(!b.contains(Vec2::new(640.5, 10.0)));
        assert!(!b.contains(Vec2::new(10.0, -0.1)));
    }

    #[test]
    fn failed_resize_keeps_previous_extent() {
        let mut b = ViewportBounds::new(640, 480).unwrap();
        assert!(b.resize(0, 10).is_err());
        assert_eq!((b.width(), b.height()), (640, 480));

        b.resize(800, 600).unwrap();
        assert_eq!(b.center(), Vec2::new(400.0, 300.0));
    }
}
