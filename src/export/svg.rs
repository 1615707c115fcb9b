use std::fmt::Write as _;

use crate::{
    color::model::Color,
    compose::layers::DrawOp,
    foundation::core::{Affine, Canvas},
};

/// Write `ops` as a standalone SVG document, composition origin at the canvas centre.
pub fn to_svg(ops: &[DrawOp], background: Color, canvas: Canvas) -> String {
    let mut out = String::new();
    let (w, h) = (canvas.width, canvas.height);

    // `write!` into a `String` cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        background.to_hex()
    );

    let to_canvas = canvas.to_canvas();
    for op in ops {
        let stroke = match &op.stroke {
            Some(s) => format!(
                r#" stroke="{}" stroke-width="{}""#,
                s.color.to_hex(),
                s.width
            ),
            None => String::new(),
        };
        let _ = writeln!(
            out,
            r#"  <path d="{}" transform="{}" fill="{}" fill-opacity="{}"{stroke}/>"#,
            op.path.to_svg(),
            svg_matrix(to_canvas * op.transform),
            op.fill.to_hex(),
            op.fill.a.clamp(0.0, 1.0),
        );
    }

    out.push_str("</svg>\n");
    out
}

fn svg_matrix(affine: Affine) -> String {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    format!("matrix({a} {b} {c} {d} {e} {f})")
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
