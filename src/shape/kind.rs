use std::{fmt, str::FromStr};

use crate::{
    foundation::{
        core::{BezPath, Point, Vec2},
        error::{KaleidoError, KaleidoResult},
    },
    shape::geometry::{arrow, circle, closed_polyline, ellipse, polygon, regular_ring, star},
};

/// Inner radius of [`ShapeKind::Star`] relative to its outer radius.
const STAR_INNER_RATIO: f64 = 0.5;
const STAR_POINTS: i32 = 5;
/// Minor/major axis ratio of [`ShapeKind::Ellipse`].
const ELLIPSE_ASPECT: f64 = 0.6;

/// Every primitive an artwork can be built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Circle,
    Ellipse,
    Triangle,
    Square,
    Rectangle,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
    Arrow,
    Diamond,
    Rhombus,
    Parallelogram,
    Trapezoid,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 14] = [
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Triangle,
        ShapeKind::Square,
        ShapeKind::Rectangle,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Octagon,
        ShapeKind::Star,
        ShapeKind::Arrow,
        ShapeKind::Diamond,
        ShapeKind::Rhombus,
        ShapeKind::Parallelogram,
        ShapeKind::Trapezoid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Triangle => "triangle",
            Self::Square => "square",
            Self::Rectangle => "rectangle",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
            Self::Octagon => "octagon",
            Self::Star => "star",
            Self::Arrow => "arrow",
            Self::Diamond => "diamond",
            Self::Rhombus => "rhombus",
            Self::Parallelogram => "parallelogram",
            Self::Trapezoid => "trapezoid",
        }
    }

    /// Closed path for this shape centred on `center`, sized to fit the circle of `radius`.
    ///
    /// `tolerance` only affects curved shapes.
    pub fn path(self, center: Point, radius: f64, tolerance: f64) -> BezPath {
        let r = radius;
        let at = |dx: f64, dy: f64| Point::new(center.x + dx * r, center.y + dy * r);
        match self {
            Self::Circle => circle(center, r, 1.0, tolerance),
            Self::Ellipse => ellipse(center, Vec2::new(r, r * ELLIPSE_ASPECT), tolerance),
            Self::Triangle => polygon(center, r, 3),
            Self::Square => regular_ring(center, r, 4, -135.0),
            Self::Pentagon => polygon(center, r, 5),
            Self::Hexagon => polygon(center, r, 6),
            Self::Octagon => polygon(center, r, 8),
            Self::Diamond => polygon(center, r, 4),
            Self::Star => star(center, r * STAR_INNER_RATIO, r, STAR_POINTS),
            Self::Arrow => arrow(center, r),
            Self::Rectangle => closed_polyline([
                at(-1.0, -0.6),
                at(1.0, -0.6),
                at(1.0, 0.6),
                at(-1.0, 0.6),
            ]),
            Self::Rhombus => closed_polyline([
                at(0.0, -1.0),
                at(0.6, 0.0),
                at(0.0, 1.0),
                at(-0.6, 0.0),
            ]),
            Self::Parallelogram => closed_polyline([
                at(-0.6, -0.5),
                at(1.0, -0.5),
                at(0.6, 0.5),
                at(-1.0, 0.5),
            ]),
            Self::Trapezoid => closed_polyline([
                at(-0.5, -0.5),
                at(0.5, -0.5),
                at(1.0, 0.5),
                at(-1.0, 0.5),
            ]),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = KaleidoError;

    fn from_str(s: &str) -> KaleidoResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| KaleidoError::validation(format!("unknown shape kind '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/kind.rs"]
mod tests;
