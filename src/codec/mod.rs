//! Delimited text encoding of [`ArtworkParameters`](crate::ArtworkParameters).
//!
//! ```text
//! artwork := field (";" field)*
//! field   := key ":" value
//! ```
//!
//! Encoding always clamps before formatting. Decoding is lenient and never fails: a token
//! without a `:` invalidates the whole string, everything else is returned raw for the caller
//! to validate.

pub mod decode;
pub mod encode;

pub use decode::{decode, decode_parameters, reconstruct_colors};
pub use encode::encode;

pub const FIELD_SEPARATOR: char = ';';
pub const KEY_VALUE_SEPARATOR: char = ':';
pub const COLOR_SEPARATOR: char = ',';

/// Field keys, in encoding order.
pub mod keys {
    pub const SHAPE: &str = "shape";
    pub const ROTATION: &str = "rotation";
    pub const SCALE: &str = "scale";
    pub const LAYER: &str = "layer";
    pub const SKEW_X: &str = "skewX";
    pub const SKEW_Y: &str = "skewY";
    pub const SPREAD: &str = "spread";
    pub const HORIZONTAL: &str = "horizontal";
    pub const VERTICAL: &str = "vertical";
    pub const PRIMITIVE: &str = "primitive";
    pub const COLORS: &str = "colors";
    pub const BACKGROUND: &str = "background";

    pub const ORDER: [&str; 12] = [
        SHAPE, ROTATION, SCALE, LAYER, SKEW_X, SKEW_Y, SPREAD, HORIZONTAL, VERTICAL, PRIMITIVE,
        COLORS, BACKGROUND,
    ];
}
