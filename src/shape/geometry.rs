//! Closed 2D paths for the primitive generators.
//!
//! Every generator is total: degenerate requests (`sides <= 0`, `points <= 0`) return an empty
//! [`BezPath`] instead of failing, and negative or zero sizes still yield a path.

use kurbo::Ellipse;

use crate::foundation::core::{BezPath, Point, Shape as _, Vec2};

/// Angle of the first vertex of every ring: straight up.
pub const RING_START_DEG: f64 = -90.0;

/// Point on the circle of `radius` around `center` at `angle_deg` (y grows downwards).
pub fn ring_point(center: Point, radius: f64, angle_deg: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// `count` evenly spaced angles in degrees starting at `start_deg`.
pub fn ring_angles(count: usize, start_deg: f64) -> impl Iterator<Item = f64> {
    let step = if count == 0 {
        0.0
    } else {
        360.0 / count as f64
    };
    (0..count).map(move |i| start_deg + step * i as f64)
}

/// Connect `points` in order and close the path. No points, no path.
pub fn closed_polyline(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    let mut points = points.into_iter();
    let Some(first) = points.next() else {
        return path;
    };
    path.move_to(first);
    for p in points {
        path.line_to(p);
    }
    path.close_path();
    path
}

/// Regular polygon with `sides` vertices on the circle of `radius`, first vertex pointing up.
pub fn polygon(center: Point, radius: f64, sides: i32) -> BezPath {
    regular_ring(center, radius, sides, RING_START_DEG)
}

pub(crate) fn regular_ring(center: Point, radius: f64, count: i32, start_deg: f64) -> BezPath {
    if count <= 0 {
        return BezPath::new();
    }
    closed_polyline(
        ring_angles(count as usize, start_deg).map(|deg| ring_point(center, radius, deg)),
    )
}

/// Star with `points` tips, alternating outer and inner radius.
///
/// `inner_radius > outer_radius` is legal and produces an inverted star.
pub fn star(center: Point, inner_radius: f64, outer_radius: f64, points: i32) -> BezPath {
    if points <= 0 {
        return BezPath::new();
    }
    let vertices = points as usize * 2;
    closed_polyline(
        ring_angles(vertices, RING_START_DEG)
            .enumerate()
            .map(|(i, deg)| {
                let r = if i % 2 == 0 { outer_radius } else { inner_radius };
                ring_point(center, r, deg)
            }),
    )
}

/// Seven-vertex arrow pointing up: `2*size` tall, `1.5*size` wide, head over the top half.
pub fn arrow(center: Point, size: f64) -> BezPath {
    let half_w = 0.75 * size;
    let stem_half_w = 0.3 * (1.5 * size) / 2.0;
    let (cx, cy) = (center.x, center.y);
    closed_polyline([
        Point::new(cx, cy - size),
        Point::new(cx + half_w, cy),
        Point::new(cx + stem_half_w, cy),
        Point::new(cx + stem_half_w, cy + size),
        Point::new(cx - stem_half_w, cy + size),
        Point::new(cx - stem_half_w, cy),
        Point::new(cx - half_w, cy),
    ])
}

/// Ellipse centred on `center` with semi-axes `radii`, flattened to cubic Béziers.
pub fn ellipse(center: Point, radii: Vec2, tolerance: f64) -> BezPath {
    Ellipse::new(center, radii, 0.0).to_path(tolerance)
}

/// Circle centred on `center` whose bounding box is `2 * radius * scale` on each side.
pub fn circle(center: Point, radius: f64, scale: f64, tolerance: f64) -> BezPath {
    let r = radius * scale;
    ellipse(center, Vec2::new(r, r), tolerance)
}

#[cfg(test)]
#[path = "../../tests/unit/shape/geometry.rs"]
mod tests;
