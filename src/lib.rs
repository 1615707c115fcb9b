//! Kaleido turns a handful of numeric dials into a deterministic layered 2D vector composition,
//! and round-trips those dials through a compact `key:value;...` text encoding.
//!
//! Pipeline:
//!
//! - [`ArtworkParameters`] (or [`decode_parameters`] from text)
//! - [`ArtworkParameters::validated`] clamps every dial into its domain
//! - [`Compositor`] resolves each layer's transform, shape and color into [`DrawOp`]s
//! - an external renderer, or [`to_svg`], paints them
//!
//! Nothing in the kernel fails: out-of-range numbers are clamped, malformed text degrades to
//! missing fields, and degenerate geometry is an empty path.
#![forbid(unsafe_code)]

pub mod codec;
pub mod color;
pub mod compose;
pub mod export;
pub mod foundation;
pub mod params;
pub mod shape;

pub use crate::codec::{decode, decode_parameters, encode, reconstruct_colors};
pub use crate::color::{
    model::Color,
    palette::{ColorSource, ColorSynth, default_palette, palette_color, visible_presets},
    spectrum::{RainbowStyle, adjust_color, layer_position},
};
pub use crate::compose::{
    layers::{ComposeConfig, Compositor, DrawOp, LayerInstance, Stroke, layers},
    transform::LayerTransform,
};
pub use crate::export::svg::to_svg;
pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Vec2};
pub use crate::foundation::error::{KaleidoError, KaleidoResult};
pub use crate::params::{
    bounds::{Bounds, Field, validate},
    model::{Appearance, ArtworkParameters},
};
pub use crate::shape::{
    geometry::{arrow, circle, closed_polyline, ellipse, polygon, ring_angles, ring_point, star},
    kind::ShapeKind,
};
