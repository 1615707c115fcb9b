use std::collections::BTreeMap;

use crate::{
    codec::{self, keys},
    color::{model::Color, palette::default_palette, spectrum::RainbowStyle},
    params::bounds::{Field, validate, validate_count},
    shape::kind::ShapeKind,
};

/// Shared look settings (hue, saturation, stroke, alpha) passed explicitly into the kernel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Appearance {
    /// Hue shift in half-turns, `[-1, 1]`.
    pub hue_adjustment: f64,
    /// Saturation scale delta, `[-1, 1]`; saturation is multiplied by `1 + value`.
    pub saturation_adjustment: f64,
    pub stroke_color: Color,
    /// Stroke width in composition units; `0` disables the stroke.
    pub stroke_width: f64,
    /// Fill alpha applied to every layer, `0..1`.
    pub shape_alpha: f64,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            hue_adjustment: 0.0,
            saturation_adjustment: 0.0,
            stroke_color: Color::WHITE,
            stroke_width: 0.0,
            shape_alpha: 1.0,
        }
    }
}

impl Appearance {
    pub fn validated(&self) -> Self {
        Self {
            hue_adjustment: validate(Field::HueAdjustment, self.hue_adjustment),
            saturation_adjustment: validate(
                Field::SaturationAdjustment,
                self.saturation_adjustment,
            ),
            stroke_color: self.stroke_color,
            stroke_width: validate(Field::StrokeWidth, self.stroke_width),
            shape_alpha: validate(Field::ShapeAlpha, self.shape_alpha),
        }
    }
}

/// The full set of dials describing one artwork.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArtworkParameters {
    pub shape: ShapeKind,
    /// Degrees added per layer, `[0, 360]`.
    pub rotation: f64,
    /// `[0.5, 2.0]`.
    pub scale: f64,
    /// `[0, 72]`.
    pub layer_count: u32,
    /// `[0, 100]`, mapped to a shear of up to 45 degrees.
    pub skew_x: f64,
    /// `[0, 100]`, mapped to a shear of up to 45 degrees.
    pub skew_y: f64,
    /// `[0, 100]`, outward displacement growing with the layer index.
    pub spread: f64,
    /// `[-300, 300]`.
    pub horizontal_offset: f64,
    /// `[-300, 300]`.
    pub vertical_offset: f64,
    /// Shape copies per layer, `[1, 6]`.
    pub primitive_count: u32,
    /// Cycled per layer; never empty once validated.
    pub color_presets: Vec<Color>,
    pub background_color: Color,
    pub use_procedural_rainbow: bool,
    pub rainbow_style: RainbowStyle,
    /// How many presets a picker offers, `[1, 10]`.
    pub number_of_visible_presets: u32,
    pub appearance: Appearance,
}

impl Default for ArtworkParameters {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Circle,
            rotation: 15.0,
            scale: 1.0,
            layer_count: 12,
            skew_x: 0.0,
            skew_y: 0.0,
            spread: 0.0,
            horizontal_offset: 0.0,
            vertical_offset: 0.0,
            primitive_count: 1,
            color_presets: default_palette(),
            background_color: Color::BLACK,
            use_procedural_rainbow: false,
            rainbow_style: RainbowStyle::Standard,
            number_of_visible_presets: 5,
            appearance: Appearance::default(),
        }
    }
}

impl ArtworkParameters {
    /// Clamp every numeric field into its domain and restore an empty palette to the default.
    pub fn validated(&self) -> Self {
        let color_presets = if self.color_presets.is_empty() {
            default_palette()
        } else {
            self.color_presets.clone()
        };
        Self {
            shape: self.shape,
            rotation: validate(Field::Rotation, self.rotation),
            scale: validate(Field::Scale, self.scale),
            layer_count: validate_count(Field::LayerCount, f64::from(self.layer_count)),
            skew_x: validate(Field::SkewX, self.skew_x),
            skew_y: validate(Field::SkewY, self.skew_y),
            spread: validate(Field::Spread, self.spread),
            horizontal_offset: validate(Field::HorizontalOffset, self.horizontal_offset),
            vertical_offset: validate(Field::VerticalOffset, self.vertical_offset),
            primitive_count: validate_count(
                Field::PrimitiveCount,
                f64::from(self.primitive_count),
            ),
            color_presets,
            background_color: self.background_color,
            use_procedural_rainbow: self.use_procedural_rainbow,
            rainbow_style: self.rainbow_style,
            number_of_visible_presets: validate_count(
                Field::NumberOfVisiblePresets,
                f64::from(self.number_of_visible_presets),
            ),
            appearance: self.appearance.validated(),
        }
    }

    /// Numeric value of `field` as currently stored (not validated).
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Rotation => self.rotation,
            Field::Scale => self.scale,
            Field::LayerCount => f64::from(self.layer_count),
            Field::SkewX => self.skew_x,
            Field::SkewY => self.skew_y,
            Field::Spread => self.spread,
            Field::HorizontalOffset => self.horizontal_offset,
            Field::VerticalOffset => self.vertical_offset,
            Field::PrimitiveCount => f64::from(self.primitive_count),
            Field::NumberOfVisiblePresets => f64::from(self.number_of_visible_presets),
            Field::HueAdjustment => self.appearance.hue_adjustment,
            Field::SaturationAdjustment => self.appearance.saturation_adjustment,
            Field::StrokeWidth => self.appearance.stroke_width,
            Field::ShapeAlpha => self.appearance.shape_alpha,
        }
    }

    /// Set `field` from a slider value, clamping it (and rounding count fields).
    pub fn set(&mut self, field: Field, value: f64) {
        let v = validate(field, value);
        match field {
            Field::Rotation => self.rotation = v,
            Field::Scale => self.scale = v,
            Field::LayerCount => self.layer_count = validate_count(field, value),
            Field::SkewX => self.skew_x = v,
            Field::SkewY => self.skew_y = v,
            Field::Spread => self.spread = v,
            Field::HorizontalOffset => self.horizontal_offset = v,
            Field::VerticalOffset => self.vertical_offset = v,
            Field::PrimitiveCount => self.primitive_count = validate_count(field, value),
            Field::NumberOfVisiblePresets => {
                self.number_of_visible_presets = validate_count(field, value)
            }
            Field::HueAdjustment => self.appearance.hue_adjustment = v,
            Field::SaturationAdjustment => self.appearance.saturation_adjustment = v,
            Field::StrokeWidth => self.appearance.stroke_width = v,
            Field::ShapeAlpha => self.appearance.shape_alpha = v,
        }
    }

    /// Apply the fields present in a decoded mapping on top of the defaults, then validate.
    ///
    /// Fields that are missing or fail to parse keep their default value.
    pub fn from_decoded(fields: &BTreeMap<String, String>) -> Self {
        let mut params = Self::default();

        for (key, value) in fields {
            match key.as_str() {
                keys::SHAPE => match value.parse::<ShapeKind>() {
                    Ok(shape) => params.shape = shape,
                    Err(e) => tracing::debug!(%e, "keeping default shape"),
                },
                keys::COLORS => {
                    let colors = codec::reconstruct_colors(value);
                    if !colors.is_empty() {
                        params.color_presets = colors;
                    }
                }
                keys::BACKGROUND => match value.parse::<Color>() {
                    Ok(c) => params.background_color = c.with_alpha(1.0),
                    Err(e) => tracing::debug!(%e, "keeping default background"),
                },
                _ => {
                    let Ok(field) = Field::from_key(key) else {
                        tracing::debug!(key = key.as_str(), "ignoring unknown field");
                        continue;
                    };
                    match value.trim().parse::<f64>() {
                        Ok(v) => params.set(field, v),
                        Err(e) => tracing::debug!(key = key.as_str(), %e, "unparseable number"),
                    }
                }
            }
        }

        params.validated()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
