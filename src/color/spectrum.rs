use std::{fmt, str::FromStr};

use crate::{
    color::model::Color,
    foundation::{
        error::{KaleidoError, KaleidoResult},
        math::{finite_or, lerp, wrap_degrees},
    },
};

/// Degrees of hue shift per unit of hue adjustment; `[-1, 1]` spans one full turn.
const HUE_SHIFT_SPAN_DEG: f64 = 180.0;

/// Hue anchors for [`RainbowStyle::Cyberpunk`] as `(position, hue_deg)`: hot magenta, violet, cyan.
const CYBERPUNK_ANCHORS: [(f64, f64); 3] = [(0.0, 320.0), (50.0, 280.0), (100.0, 190.0)];

/// Procedural hue-spectrum algorithm used when the rainbow flag is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RainbowStyle {
    /// Full hue circle.
    #[default]
    Standard,
    /// Magenta/violet/cyan neon band.
    Cyberpunk,
    /// First half of the hue circle only.
    HalfSpectrum,
}

impl RainbowStyle {
    pub const ALL: [RainbowStyle; 3] = [
        RainbowStyle::Standard,
        RainbowStyle::Cyberpunk,
        RainbowStyle::HalfSpectrum,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Cyberpunk => "cyberpunk",
            Self::HalfSpectrum => "halfSpectrum",
        }
    }

    /// Unwrapped base hue in degrees for `position` percent of the run (clamped to `0..=100`).
    pub fn hue_at(self, position: f64) -> f64 {
        let position = finite_or(position, 0.0).clamp(0.0, 100.0);
        let t = position / 100.0;
        match self {
            Self::Standard => lerp(0.0, 360.0, t),
            Self::HalfSpectrum => lerp(0.0, 180.0, t),
            Self::Cyberpunk => anchored_hue(&CYBERPUNK_ANCHORS, position),
        }
    }

    fn base_saturation(self) -> f64 {
        match self {
            Self::Standard | Self::HalfSpectrum => 0.85,
            Self::Cyberpunk => 0.95,
        }
    }

    fn base_value(self) -> f64 {
        match self {
            Self::Standard | Self::HalfSpectrum => 1.0,
            Self::Cyberpunk => 0.95,
        }
    }

    /// Color for layer `position` (integer percent `0..=100`), after hue/saturation adjustment.
    ///
    /// Total: defined for every position and every adjustment value.
    pub fn color_at(self, position: u32, hue_adjustment: f64, saturation_adjustment: f64) -> Color {
        let hue = self.hue_at(f64::from(position));
        let (h, s) = apply_adjustment(
            hue,
            self.base_saturation(),
            hue_adjustment,
            saturation_adjustment,
        );
        Color::from_hsv(h, s, self.base_value(), 1.0)
    }
}

impl fmt::Display for RainbowStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RainbowStyle {
    type Err = KaleidoError;

    fn from_str(s: &str) -> KaleidoResult<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KaleidoError::validation(format!("unknown rainbow style '{s}'")))
    }
}

/// Piecewise-linear interpolation over `(position, hue)` anchors sorted by position.
fn anchored_hue(anchors: &[(f64, f64)], position: f64) -> f64 {
    let mut prev = anchors[0];
    for &next in &anchors[1..] {
        if position <= next.0 {
            let span = next.0 - prev.0;
            let t = if span > 0.0 { (position - prev.0) / span } else { 0.0 };
            return lerp(prev.1, next.1, t);
        }
        prev = next;
    }
    prev.1
}

/// Shift `hue` by `hue_shift` half-turns and scale `saturation` by `1 + saturation_scale`.
///
/// Non-finite adjustments count as zero.
pub(crate) fn apply_adjustment(
    hue: f64,
    saturation: f64,
    hue_shift: f64,
    saturation_scale: f64,
) -> (f64, f64) {
    let hue_shift = finite_or(hue_shift, 0.0);
    let saturation_scale = finite_or(saturation_scale, 0.0);
    let h = wrap_degrees(hue + hue_shift * HUE_SHIFT_SPAN_DEG);
    let s = (saturation * (1.0 + saturation_scale)).clamp(0.0, 1.0);
    (h, s)
}

/// Integer percent (`0..=100`) of layer `index` within a run of `layer_count` layers.
pub fn layer_position(index: usize, layer_count: usize) -> u32 {
    if layer_count <= 1 {
        return 0;
    }
    let last = (layer_count - 1) as f64;
    ((index.min(layer_count - 1) as f64) * 100.0 / last).round() as u32
}

/// Shift hue and scale saturation of a single fixed color (stroke, background, swatch).
///
/// With `use_procedural_rainbow` the input's hue is kept (rounded to a whole spectrum percent)
/// and only its saturation and value are replaced by the standard spectrum's `0.85` and `1.0`,
/// then the same adjustments apply. Alpha is always preserved.
pub fn adjust_color(
    color: Color,
    hue_shift: f64,
    saturation_scale: f64,
    use_procedural_rainbow: bool,
) -> Color {
    let (h, s, v) = color.to_hsv();

    if use_procedural_rainbow {
        let position = (h / 360.0 * 100.0).round() as u32;
        return RainbowStyle::Standard
            .color_at(position, hue_shift, saturation_scale)
            .with_alpha(color.a);
    }

    if finite_or(hue_shift, 0.0) == 0.0 && finite_or(saturation_scale, 0.0) == 0.0 {
        return color;
    }

    let (h, s) = apply_adjustment(h, s, hue_shift, saturation_scale);
    Color::from_hsv(h, s, v, color.a)
}

#[cfg(test)]
#[path = "../../tests/unit/color/spectrum.rs"]
mod tests;
