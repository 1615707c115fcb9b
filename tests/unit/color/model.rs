use super::*;
use serde_json::json;

fn close(a: Color, b: Color) -> bool {
    (a.r - b.r).abs() < 1e-9 && (a.g - b.g).abs() < 1e-9 && (a.b - b.b).abs() < 1e-9
}

#[test]
fn hex_roundtrip_is_uppercase_without_alpha() {
    let c = Color::from_hex("#ff8000").unwrap();
    assert_eq!(c.to_hex(), "#FF8000");

    let c = Color::from_hex("#0000ff80").unwrap();
    assert_eq!(c.to_hex(), "#0000FF");
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn hex_rejects_bad_lengths_and_digits() {
    assert!(Color::from_hex("#FFF").is_err());
    assert!(Color::from_hex("#GG0000").is_err());
    assert!(Color::from_hex("").is_err());
    assert!(Color::from_hex("#ÿÿÿ").is_err());
}

#[test]
fn hsv_primaries() {
    assert!(close(Color::from_hsv(0.0, 1.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0)));
    assert!(close(Color::from_hsv(120.0, 1.0, 1.0, 1.0), Color::rgb(0.0, 1.0, 0.0)));
    assert!(close(Color::from_hsv(240.0, 1.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 1.0)));
    assert!(close(Color::from_hsv(360.0, 1.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0)));
    assert!(close(Color::from_hsv(-60.0, 1.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 1.0)));
}

#[test]
fn hsv_roundtrip_spot_check() {
    let c = Color::from_hex("#3A7BD5").unwrap();
    let (h, s, v) = c.to_hsv();
    let back = Color::from_hsv(h, s, v, 1.0);
    assert_eq!(back.to_hex(), "#3A7BD5");
}

#[test]
fn grey_has_zero_saturation() {
    let (_, s, v) = Color::rgb(0.5, 0.5, 0.5).to_hsv();
    assert_eq!(s, 0.0);
    assert!((v - 0.5).abs() < 1e-12);
}

#[test]
fn deserializes_all_representations() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));

    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgb(0.25, 0.5, 0.75));

    let c: Color = serde_json::from_value(json!({"h": 120.0, "s": 1.0, "v": 1.0})).unwrap();
    assert!(close(c, Color::rgb(0.0, 1.0, 0.0)));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<Color>(json!([1.0, 2.0])).is_err());
}

#[test]
fn serializes_as_hex_keeping_alpha_when_translucent() {
    let s = serde_json::to_string(&Color::rgb(1.0, 0.0, 0.0)).unwrap();
    assert_eq!(s, "\"#FF0000\"");

    let s = serde_json::to_string(&Color::rgba(1.0, 0.0, 0.0, 0.0)).unwrap();
    assert_eq!(s, "\"#FF000000\"");
}
