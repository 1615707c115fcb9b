use super::*;
use crate::{color::spectrum::RainbowStyle, shape::kind::ShapeKind};

fn params() -> ArtworkParameters {
    ArtworkParameters {
        shape: ShapeKind::Hexagon,
        rotation: 30.0,
        scale: 1.5,
        layer_count: 8,
        skew_x: 50.0,
        skew_y: 10.0,
        spread: 40.0,
        horizontal_offset: 20.0,
        vertical_offset: -15.0,
        primitive_count: 3,
        ..ArtworkParameters::default()
    }
}

#[test]
fn layer_zero_has_no_rotation_or_spread() {
    let c = Compositor::new(&params(), ComposeConfig::default());
    let l0 = c.layer(0).unwrap();
    assert_eq!(l0.cumulative_rotation_deg, 0.0);
    assert_eq!(l0.spread_distance, 0.0);
    assert_eq!(l0.primitives[0].rotation_deg, 0.0);
}

#[test]
fn rotation_accumulates_without_wrapping() {
    let p = ArtworkParameters {
        rotation: 350.0,
        layer_count: 4,
        ..params()
    };
    let c = Compositor::new(&p, ComposeConfig::default());
    assert_eq!(c.layer(3).unwrap().cumulative_rotation_deg, 1050.0);
}

#[test]
fn spread_grows_with_index_and_dial() {
    let c = Compositor::new(&params(), ComposeConfig::default());
    let distances: Vec<f64> = c.layers().iter().map(|l| l.spread_distance).collect();
    assert!(distances.windows(2).all(|w| w[0] < w[1]));

    let wider = Compositor::new(
        &ArtworkParameters {
            spread: 80.0,
            ..params()
        },
        ComposeConfig::default(),
    );
    for i in 1..8 {
        assert!(wider.spread_distance(i) > c.spread_distance(i));
    }
}

#[test]
fn zero_spread_keeps_layers_centred() {
    let p = ArtworkParameters {
        spread: 0.0,
        horizontal_offset: 0.0,
        vertical_offset: 0.0,
        ..params()
    };
    for op in Compositor::new(&p, ComposeConfig::default()).draw_ops() {
        let centre = op.transform * Point::ORIGIN;
        assert!(centre.to_vec2().hypot() < 1e-9);
    }
}

#[test]
fn later_layers_sit_farther_out() {
    let p = ArtworkParameters {
        horizontal_offset: 0.0,
        vertical_offset: 0.0,
        ..params()
    };
    let c = Compositor::new(&p, ComposeConfig::default());
    let mut last = -1.0;
    for i in 0..c.layer_count() {
        let layer = c.layer(i).unwrap();
        let d = (layer.primitives[0].to_affine() * Point::ORIGIN)
            .to_vec2()
            .hypot();
        assert!(d > last);
        last = d;
    }
}

#[test]
fn primitives_fan_out_evenly() {
    let c = Compositor::new(&params(), ComposeConfig::default());
    let l2 = c.layer(2).unwrap();
    let rots: Vec<f64> = l2.primitives.iter().map(|t| t.rotation_deg).collect();
    assert_eq!(rots, vec![60.0, 180.0, 300.0]);
}

#[test]
fn skew_maps_to_tangent_shear() {
    let c = Compositor::new(&params(), ComposeConfig::default());
    let l = c.layer(1).unwrap();
    assert!((l.shear.x - (std::f64::consts::PI / 8.0).tan()).abs() < 1e-12);
    assert!((l.shear.y - (std::f64::consts::PI / 40.0).tan()).abs() < 1e-12);
}

#[test]
fn offsets_translate_every_op_uniformly() {
    let base = ArtworkParameters {
        horizontal_offset: 0.0,
        vertical_offset: 0.0,
        ..params()
    };
    let moved = ArtworkParameters {
        horizontal_offset: 100.0,
        vertical_offset: -50.0,
        ..params()
    };
    let a = Compositor::new(&base, ComposeConfig::default()).draw_ops();
    let b = Compositor::new(&moved, ComposeConfig::default()).draw_ops();
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        let pa = x.transform * Point::new(5.0, 7.0);
        let pb = y.transform * Point::new(5.0, 7.0);
        assert!((pb.x - pa.x - 100.0).abs() < 1e-9);
        assert!((pb.y - pa.y + 50.0).abs() < 1e-9);
    }
}

#[test]
fn op_count_is_layers_times_primitives() {
    let c = Compositor::new(&params(), ComposeConfig::default());
    let ops = c.draw_ops();
    assert_eq!(ops.len(), 8 * 3);
    assert_eq!((ops[4].layer, ops[4].primitive), (1, 1));
}

#[test]
fn zero_layers_is_empty_and_out_of_range_is_none() {
    let p = ArtworkParameters {
        layer_count: 0,
        ..params()
    };
    let c = Compositor::new(&p, ComposeConfig::default());
    assert!(c.draw_ops().is_empty());
    assert!(c.layer(0).is_none());
}

#[test]
fn compositor_validates_its_input() {
    let p = ArtworkParameters {
        layer_count: 500,
        primitive_count: 0,
        ..params()
    };
    let c = Compositor::new(&p, ComposeConfig::default());
    assert_eq!(c.layer_count(), 72);
    assert_eq!(c.layer(0).unwrap().primitives.len(), 1);
}

#[test]
fn palette_cycles_across_layers() {
    let red = Color::from_rgb8(255, 0, 0);
    let blue = Color::from_rgb8(0, 0, 255);
    let p = ArtworkParameters {
        color_presets: vec![red, blue],
        primitive_count: 1,
        ..params()
    };
    let fills: Vec<Color> = layers(&p).iter().map(|op| op.fill).collect();
    assert_eq!(fills[0], red);
    assert_eq!(fills[1], blue);
    assert_eq!(fills[6], red);
}

#[test]
fn rainbow_fills_walk_the_spectrum() {
    let p = ArtworkParameters {
        use_procedural_rainbow: true,
        rainbow_style: RainbowStyle::Standard,
        primitive_count: 1,
        layer_count: 3,
        ..params()
    };
    let hues: Vec<f64> = layers(&p).iter().map(|op| op.fill.to_hsv().0).collect();
    assert!(hues[0].abs() < 1e-6);
    assert!((hues[1] - 180.0).abs() < 1e-6);
    assert!(hues[2].abs() < 1e-6);
}

#[test]
fn stroke_present_only_with_width() {
    let ops = layers(&params());
    assert!(ops.iter().all(|op| op.stroke.is_none()));

    let mut p = params();
    p.appearance.stroke_width = 2.0;
    p.appearance.stroke_color = Color::from_rgb8(10, 20, 30);
    let ops = layers(&p);
    let stroke = ops[0].stroke.as_ref().unwrap();
    assert_eq!(stroke.width, 2.0);
    assert_eq!(stroke.color.to_hex(), "#0A141E");
}

#[test]
fn parallel_matches_sequential() {
    let c = Compositor::new(&params(), ComposeConfig::default());
    let seq = c.draw_ops();
    let par = c.draw_ops_parallel();
    assert_eq!(seq.len(), par.len());
    for (a, b) in seq.iter().zip(&par) {
        assert_eq!((a.layer, a.primitive), (b.layer, b.primitive));
        assert_eq!(a.transform, b.transform);
        assert_eq!(a.fill, b.fill);
        assert_eq!(a.path, b.path);
    }
}

#[test]
fn layers_are_order_independent() {
    let c = Compositor::new(&params(), ComposeConfig::default());
    let forward: Vec<LayerInstance> = (0..8).filter_map(|i| c.layer(i)).collect();
    let backward: Vec<LayerInstance> = (0..8).rev().filter_map(|i| c.layer(i)).collect();
    for (f, b) in forward.iter().zip(backward.iter().rev()) {
        assert_eq!(f.index, b.index);
        assert_eq!(f.primitives, b.primitives);
        assert_eq!(f.fill, b.fill);
    }
}

#[test]
fn draw_op_json_carries_svg_path() {
    let ops = layers(&ArtworkParameters {
        shape: ShapeKind::Triangle,
        layer_count: 1,
        ..params()
    });
    let v = serde_json::to_value(&ops[0]).unwrap();
    assert!(v["path"].as_str().unwrap().starts_with('M'));
    assert_eq!(v["fill"], "#FF5722");
}

#[test]
fn unusable_config_falls_back_to_defaults() {
    let bad = ComposeConfig {
        base_size: f64::NAN,
        spread_unit: f64::INFINITY,
        tolerance: 0.0,
    };
    assert_eq!(bad.validated(), ComposeConfig::default());

    let negative = ComposeConfig {
        base_size: -5.0,
        spread_unit: 0.5,
        tolerance: -1.0,
    };
    let v = negative.validated();
    assert_eq!(v.base_size, 80.0);
    assert_eq!(v.spread_unit, 0.5);
    assert_eq!(v.tolerance, 0.1);

    let good = ComposeConfig {
        base_size: 40.0,
        spread_unit: 0.1,
        tolerance: 0.01,
    };
    assert_eq!(good.validated(), good);
}

#[test]
fn zero_tolerance_circle_finishes() {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let p = ArtworkParameters {
            shape: ShapeKind::Circle,
            ..ArtworkParameters::default()
        };
        let config = ComposeConfig {
            tolerance: 0.0,
            ..ComposeConfig::default()
        };
        let c = Compositor::new(&p, config);
        let _ = tx.send((c.config().tolerance, c.draw_ops().len()));
    });
    let (tolerance, ops) = rx
        .recv_timeout(std::time::Duration::from_secs(10))
        .expect("compositor did not finish");
    assert_eq!(tolerance, 0.1);
    assert_eq!(ops, 12);
}
