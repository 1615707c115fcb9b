use crate::foundation::error::{KaleidoError, KaleidoResult};

/// Closed `[lower, upper]` interval for one numeric dial.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// `max(lower, min(upper, value))`. NaN resolves to `lower`.
    pub fn clamp(self, value: f64) -> f64 {
        if value.is_nan() {
            return self.lower;
        }
        self.lower.max(self.upper.min(value))
    }

    pub fn contains(self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Every bounded numeric field of [`ArtworkParameters`](crate::ArtworkParameters).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum Field {
    Rotation,
    Scale,
    LayerCount,
    SkewX,
    SkewY,
    Spread,
    HorizontalOffset,
    VerticalOffset,
    PrimitiveCount,
    NumberOfVisiblePresets,
    HueAdjustment,
    SaturationAdjustment,
    StrokeWidth,
    ShapeAlpha,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::Rotation,
        Field::Scale,
        Field::LayerCount,
        Field::SkewX,
        Field::SkewY,
        Field::Spread,
        Field::HorizontalOffset,
        Field::VerticalOffset,
        Field::PrimitiveCount,
        Field::NumberOfVisiblePresets,
        Field::HueAdjustment,
        Field::SaturationAdjustment,
        Field::StrokeWidth,
        Field::ShapeAlpha,
    ];

    pub const fn bounds(self) -> Bounds {
        match self {
            Field::Rotation => Bounds::new(0.0, 360.0),
            Field::Scale => Bounds::new(0.5, 2.0),
            Field::LayerCount => Bounds::new(0.0, 72.0),
            Field::SkewX | Field::SkewY | Field::Spread => Bounds::new(0.0, 100.0),
            Field::HorizontalOffset | Field::VerticalOffset => Bounds::new(-300.0, 300.0),
            Field::PrimitiveCount => Bounds::new(1.0, 6.0),
            Field::NumberOfVisiblePresets => Bounds::new(1.0, 10.0),
            Field::HueAdjustment | Field::SaturationAdjustment => Bounds::new(-1.0, 1.0),
            Field::StrokeWidth => Bounds::new(0.0, 20.0),
            Field::ShapeAlpha => Bounds::new(0.0, 1.0),
        }
    }

    /// Whether the field is stored as an integer count.
    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            Field::LayerCount | Field::PrimitiveCount | Field::NumberOfVisiblePresets
        )
    }

    /// Key used in the text encoding, for the fields that are persisted.
    pub const fn key(self) -> Option<&'static str> {
        match self {
            Field::Rotation => Some("rotation"),
            Field::Scale => Some("scale"),
            Field::LayerCount => Some("layer"),
            Field::SkewX => Some("skewX"),
            Field::SkewY => Some("skewY"),
            Field::Spread => Some("spread"),
            Field::HorizontalOffset => Some("horizontal"),
            Field::VerticalOffset => Some("vertical"),
            Field::PrimitiveCount => Some("primitive"),
            Field::NumberOfVisiblePresets
            | Field::HueAdjustment
            | Field::SaturationAdjustment
            | Field::StrokeWidth
            | Field::ShapeAlpha => None,
        }
    }

    pub fn from_key(key: &str) -> KaleidoResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == Some(key))
            .ok_or_else(|| KaleidoError::validation(format!("unknown numeric field key '{key}'")))
    }
}

/// Clamp `value` into the legal domain of `field`.
///
/// Never fails; out-of-range input is silently clamped. Idempotent.
pub fn validate(field: Field, value: f64) -> f64 {
    field.bounds().clamp(value)
}

/// [`validate`] followed by rounding, for the integral count fields.
pub(crate) fn validate_count(field: Field, value: f64) -> u32 {
    // Bounds are non-negative for every count field, so the cast is lossless after clamping.
    validate(field, value).round() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/params/bounds.rs"]
mod tests;
