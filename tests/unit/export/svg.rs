use super::*;
use crate::{compose::layers::layers, params::model::ArtworkParameters};

#[test]
fn one_path_per_op_plus_background() {
    let params = ArtworkParameters {
        layer_count: 4,
        primitive_count: 2,
        ..ArtworkParameters::default()
    };
    let ops = layers(&params);
    let svg = to_svg(&ops, Color::from_rgb8(1, 2, 3), Canvas::new(200, 100));

    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r##"fill="#010203""##));
    assert!(svg.contains(r#"viewBox="0 0 200 100""#));
    assert_eq!(svg.matches("<path ").count(), 8);
}

#[test]
fn origin_maps_to_canvas_centre() {
    assert_eq!(
        svg_matrix(Canvas::new(200, 100).to_canvas()),
        "matrix(1 0 0 1 100 50)"
    );
}

#[test]
fn stroke_attributes_only_when_present() {
    let mut params = ArtworkParameters {
        layer_count: 1,
        ..ArtworkParameters::default()
    };
    let plain = to_svg(&layers(&params), Color::BLACK, Canvas::default());
    assert!(!plain.contains("stroke="));

    params.appearance.stroke_width = 1.5;
    let stroked = to_svg(&layers(&params), Color::BLACK, Canvas::default());
    assert!(stroked.contains(r##"stroke="#FFFFFF" stroke-width="1.5""##));
}
