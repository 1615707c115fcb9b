pub use kurbo::{Affine, BezPath, Point, Rect, Shape, Vec2};

/// Output canvas dimensions in pixels, used when placing the origin-centred composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a canvas of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Canvas centre in pixel space.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Affine mapping composition space (origin at centre) into canvas pixel space.
    pub fn to_canvas(self) -> Affine {
        Affine::translate(self.center().to_vec2())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
