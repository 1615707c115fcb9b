use rayon::prelude::*;

use crate::{
    color::{model::Color, palette::ColorSynth, spectrum::adjust_color},
    compose::transform::{LayerTransform, shear_factor},
    foundation::{
        core::{Affine, BezPath, Point, Vec2},
        math::finite_or,
    },
    params::model::ArtworkParameters,
    shape::geometry::ring_angles,
};

/// Layout knobs that are not part of the persisted artwork.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    /// Radius of the primitive before scaling, in composition units.
    pub base_size: f64,
    /// Spread displacement per layer at `spread = 100`, as a fraction of `base_size`.
    pub spread_unit: f64,
    /// Flattening tolerance for curved primitives.
    pub tolerance: f64,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            base_size: 80.0,
            spread_unit: 0.25,
            tolerance: 0.1,
        }
    }
}

impl ComposeConfig {
    /// Copy with every knob usable by the geometry generators.
    ///
    /// Non-finite or non-positive `base_size` and `tolerance`, and a non-finite `spread_unit`,
    /// fall back to their defaults.
    pub fn validated(&self) -> Self {
        let defaults = Self::default();
        let positive_or = |v: f64, fallback: f64| {
            if v.is_finite() && v > 0.0 { v } else { fallback }
        };
        Self {
            base_size: positive_or(self.base_size, defaults.base_size),
            spread_unit: finite_or(self.spread_unit, defaults.spread_unit),
            tolerance: positive_or(self.tolerance, defaults.tolerance),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// One draw instruction: a path, where it goes, and how it is painted.
#[derive(Clone, Debug, serde::Serialize)]
pub struct DrawOp {
    pub layer: usize,
    pub primitive: usize,
    #[serde(serialize_with = "serialize_svg_path")]
    pub path: BezPath,
    pub transform: Affine,
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

fn serialize_svg_path<S>(path: &BezPath, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&path.to_svg())
}

/// Everything resolved for layer `index`. Derived from `(parameters, index)` alone.
#[derive(Clone, Debug)]
pub struct LayerInstance {
    pub index: usize,
    /// `rotation * index`, in degrees, not reduced.
    pub cumulative_rotation_deg: f64,
    pub scale: f64,
    pub shear: Vec2,
    pub spread_distance: f64,
    pub translation: Vec2,
    pub fill: Color,
    /// The primitive, centred on the origin.
    pub path: BezPath,
    /// One placement per fanned-out copy.
    pub primitives: Vec<LayerTransform>,
}

impl LayerInstance {
    pub fn draw_ops(&self, stroke: Option<&Stroke>) -> impl Iterator<Item = DrawOp> + '_ {
        let stroke = stroke.cloned();
        self.primitives
            .iter()
            .enumerate()
            .map(move |(primitive, placement)| DrawOp {
                layer: self.index,
                primitive,
                path: self.path.clone(),
                transform: placement.to_affine(),
                fill: self.fill,
                stroke: stroke.clone(),
            })
    }
}

/// Turns validated parameters into ordered draw instructions.
///
/// Pure: every layer depends only on the parameters and its index, so layers can be
/// computed in any order or in parallel with identical results.
#[derive(Clone, Debug)]
pub struct Compositor {
    params: ArtworkParameters,
    config: ComposeConfig,
    colors: ColorSynth,
    shape_path: BezPath,
    stroke: Option<Stroke>,
}

impl Compositor {
    pub fn new(params: &ArtworkParameters, config: ComposeConfig) -> Self {
        let params = params.validated();
        let config = config.validated();
        let colors = ColorSynth::from_params(&params);
        let shape_path = params
            .shape
            .path(Point::ORIGIN, config.base_size, config.tolerance);

        let appearance = &params.appearance;
        let stroke = (appearance.stroke_width > 0.0).then(|| Stroke {
            color: adjust_color(
                appearance.stroke_color,
                appearance.hue_adjustment,
                appearance.saturation_adjustment,
                params.use_procedural_rainbow,
            ),
            width: appearance.stroke_width,
        });

        Self {
            params,
            config,
            colors,
            shape_path,
            stroke,
        }
    }

    pub fn params(&self) -> &ArtworkParameters {
        &self.params
    }

    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    pub fn layer_count(&self) -> usize {
        self.params.layer_count as usize
    }

    pub fn background(&self) -> Color {
        self.params.background_color
    }

    pub fn stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }

    /// Radial displacement of layer `index`: linear in the index and in the spread dial.
    pub fn spread_distance(&self, index: usize) -> f64 {
        let per_layer = self.params.spread / 100.0 * self.config.spread_unit;
        per_layer * self.config.base_size * index as f64
    }

    /// Resolve layer `index`, or `None` past the layer count.
    pub fn layer(&self, index: usize) -> Option<LayerInstance> {
        if index >= self.layer_count() {
            return None;
        }
        let p = &self.params;

        let cumulative_rotation_deg = p.rotation * index as f64;
        let shear = Vec2::new(shear_factor(p.skew_x), shear_factor(p.skew_y));
        let spread_distance = self.spread_distance(index);
        let translation = Vec2::new(p.horizontal_offset, p.vertical_offset);

        let primitives = ring_angles(p.primitive_count as usize, 0.0)
            .map(|fan_deg| LayerTransform {
                rotation_deg: cumulative_rotation_deg + fan_deg,
                spread_distance,
                shear,
                scale: p.scale,
                translate: translation,
            })
            .collect();

        tracing::trace!(
            index,
            rotation = cumulative_rotation_deg,
            spread = spread_distance,
            "resolved layer"
        );

        Some(LayerInstance {
            index,
            cumulative_rotation_deg,
            scale: p.scale,
            shear,
            spread_distance,
            translation,
            fill: self.colors.fill_for_layer(index, self.layer_count()),
            path: self.shape_path.clone(),
            primitives,
        })
    }

    pub fn layers(&self) -> Vec<LayerInstance> {
        (0..self.layer_count())
            .filter_map(|i| self.layer(i))
            .collect()
    }

    /// Draw instructions for every layer, back to front.
    #[tracing::instrument(skip(self), fields(layers = self.layer_count()))]
    pub fn draw_ops(&self) -> Vec<DrawOp> {
        (0..self.layer_count())
            .filter_map(|i| self.layer(i))
            .flat_map(|layer| layer.draw_ops(self.stroke.as_ref()).collect::<Vec<_>>())
            .collect()
    }

    /// Same output as [`Compositor::draw_ops`], with layers resolved on the rayon pool.
    #[tracing::instrument(skip(self), fields(layers = self.layer_count()))]
    pub fn draw_ops_parallel(&self) -> Vec<DrawOp> {
        (0..self.layer_count())
            .into_par_iter()
            .filter_map(|i| self.layer(i))
            .flat_map_iter(|layer| layer.draw_ops(self.stroke.as_ref()).collect::<Vec<_>>())
            .collect()
    }
}

/// Draw instructions for `params` with the default [`ComposeConfig`].
pub fn layers(params: &ArtworkParameters) -> Vec<DrawOp> {
    Compositor::new(params, ComposeConfig::default()).draw_ops()
}

#[cfg(test)]
#[path = "../../tests/unit/compose/layers.rs"]
mod tests;
