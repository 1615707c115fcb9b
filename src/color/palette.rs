use crate::{
    color::{
        model::Color,
        spectrum::{RainbowStyle, adjust_color, layer_position},
    },
    params::model::ArtworkParameters,
};

/// Palette used when the caller supplies no presets.
pub fn default_palette() -> Vec<Color> {
    [
        (0xFF, 0x57, 0x22),
        (0xFF, 0xC1, 0x07),
        (0x4C, 0xAF, 0x50),
        (0x21, 0x96, 0xF3),
        (0x9C, 0x27, 0xB0),
    ]
    .into_iter()
    .map(|(r, g, b)| Color::from_rgb8(r, g, b))
    .collect()
}

/// `presets[layer_index % presets.len()]`; an empty palette yields white.
pub fn palette_color(presets: &[Color], layer_index: usize) -> Color {
    if presets.is_empty() {
        return Color::WHITE;
    }
    presets[layer_index % presets.len()]
}

/// The leading presets a caller offers for selection. Cycling in [`palette_color`] is unaffected.
pub fn visible_presets(presets: &[Color], number_of_visible_presets: u32) -> &[Color] {
    let n = (number_of_visible_presets as usize).min(presets.len());
    &presets[..n]
}

/// Where per-layer fill colors come from.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSource {
    Palette(Vec<Color>),
    Procedural(RainbowStyle),
}

/// Per-layer fill color synthesis for one artwork.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSynth {
    pub source: ColorSource,
    pub hue_adjustment: f64,
    pub saturation_adjustment: f64,
    pub alpha: f64,
}

impl ColorSynth {
    /// Expects validated parameters.
    pub fn from_params(params: &ArtworkParameters) -> Self {
        let source = if params.use_procedural_rainbow {
            ColorSource::Procedural(params.rainbow_style)
        } else {
            ColorSource::Palette(params.color_presets.clone())
        };
        Self {
            source,
            hue_adjustment: params.appearance.hue_adjustment,
            saturation_adjustment: params.appearance.saturation_adjustment,
            alpha: params.appearance.shape_alpha,
        }
    }

    pub fn fill_for_layer(&self, layer_index: usize, layer_count: usize) -> Color {
        let base = match &self.source {
            ColorSource::Palette(presets) => adjust_color(
                palette_color(presets, layer_index),
                self.hue_adjustment,
                self.saturation_adjustment,
                false,
            ),
            ColorSource::Procedural(style) => style.color_at(
                layer_position(layer_index, layer_count),
                self.hue_adjustment,
                self.saturation_adjustment,
            ),
        };
        base.with_alpha(self.alpha)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
