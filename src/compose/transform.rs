use std::f64::consts::FRAC_PI_4;

use crate::foundation::core::{Affine, Vec2};

/// Placement of one primitive copy within one layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerTransform {
    /// Cumulative layer rotation plus the copy's fan angle, in degrees. Not reduced mod 360.
    pub rotation_deg: f64,
    /// Outward displacement from the composition centre along the rotated "up" direction.
    pub spread_distance: f64,
    /// Shear factors applied on x and y.
    pub shear: Vec2,
    pub scale: f64,
    /// Whole-composition offset, applied last.
    pub translate: Vec2,
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self {
            rotation_deg: 0.0,
            spread_distance: 0.0,
            shear: Vec2::ZERO,
            scale: 1.0,
            translate: Vec2::ZERO,
        }
    }
}

impl LayerTransform {
    pub fn to_affine(self) -> Affine {
        let t_translate = Affine::translate(self.translate);
        let t_rotate = Affine::rotate(self.rotation_deg.to_radians());
        let t_spread = Affine::translate(Vec2::new(0.0, -self.spread_distance));
        let t_skew = Affine::new([1.0, self.shear.y, self.shear.x, 1.0, 0.0, 0.0]);
        let t_scale = Affine::scale(self.scale);

        // Canonical order:
        // T(offset) * R(rotation) * T(0, -spread) * Skew * S(scale)
        t_translate * t_rotate * t_spread * t_skew * t_scale
    }
}

/// Map a `0..=100` skew dial to a shear factor: `tan(value / 100 * pi / 4)`.
pub fn shear_factor(skew: f64) -> f64 {
    (skew / 100.0 * FRAC_PI_4).tan()
}

#[cfg(test)]
#[path = "../../tests/unit/compose/transform.rs"]
mod tests;
