use super::*;
use crate::foundation::core::Point;

fn near(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn default_is_identity() {
    assert_eq!(LayerTransform::default().to_affine(), Affine::IDENTITY);
}

#[test]
fn shear_factor_range() {
    assert_eq!(shear_factor(0.0), 0.0);
    assert!((shear_factor(100.0) - 1.0).abs() < 1e-12);
    assert!((shear_factor(50.0) - (std::f64::consts::PI / 8.0).tan()).abs() < 1e-12);
}

#[test]
fn spread_pushes_along_rotated_up() {
    let t = LayerTransform {
        rotation_deg: 90.0,
        spread_distance: 10.0,
        ..LayerTransform::default()
    };
    // Up (0, -10) rotated by 90 degrees in y-down space points right.
    assert!(near(t.to_affine() * Point::ORIGIN, Point::new(10.0, 0.0)));
}

#[test]
fn offset_applies_after_everything_else() {
    let base = LayerTransform {
        rotation_deg: 33.0,
        spread_distance: 7.0,
        shear: Vec2::new(0.3, 0.1),
        scale: 1.5,
        translate: Vec2::ZERO,
    };
    let moved = LayerTransform {
        translate: Vec2::new(-40.0, 25.0),
        ..base
    };
    let p = Point::new(3.0, -2.0);
    let a = base.to_affine() * p;
    let b = moved.to_affine() * p;
    assert!(near(b, a + Vec2::new(-40.0, 25.0)));
}

#[test]
fn skew_shears_before_rotation() {
    let t = LayerTransform {
        shear: Vec2::new(1.0, 0.0),
        ..LayerTransform::default()
    };
    assert!(near(t.to_affine() * Point::new(0.0, 2.0), Point::new(2.0, 2.0)));
}
