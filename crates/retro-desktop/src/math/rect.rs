//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Clamp a candidate origin for an element of this rect's size so the
    /// element stays inside `viewport`.
    ///
    /// Each axis is bounded to `[0, viewport - size]`. An element larger than
    /// the viewport pins to `0` on that axis.
    pub fn clamp_origin(&self, origin: Vec2, viewport: Size) -> Vec2 {
        let max_x = (viewport.width - self.width).max(0.0);
        let max_y = (viewport.height - self.height).max(0.0);
        Vec2::new(origin.x.clamp(0.0, max_x), origin.y.clamp(0.0, max_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_origin_right_edge() {
        let r = Rect::new(100.0, 100.0, 50.0, 50.0);
        let p = r.clamp_origin(Vec2::new(875.0, 100.0), Size::new(800.0, 600.0));
        assert!((p.x - 750.0).abs() < 0.001);
        assert!((p.y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_origin_negative() {
        let r = Rect::new(0.0, 0.0, 50.0, 50.0);
        let p = r.clamp_origin(Vec2::new(-30.0, -1.0), Size::new(800.0, 600.0));
        assert!(p.x.abs() < 0.001);
        assert!(p.y.abs() < 0.001);
    }

    #[test]
    fn test_clamp_origin_oversized_element_pins_to_zero() {
        let r = Rect::new(0.0, 0.0, 1000.0, 700.0);
        let p = r.clamp_origin(Vec2::new(40.0, 40.0), Size::new(800.0, 600.0));
        assert!(p.x.abs() < 0.001);
        assert!(p.y.abs() < 0.001);
    }
}
