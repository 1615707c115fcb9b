use crate::{
    codec::{COLOR_SEPARATOR, FIELD_SEPARATOR, KEY_VALUE_SEPARATOR, keys},
    foundation::math::format_decimal,
    params::{
        bounds::{Field, validate},
        model::ArtworkParameters,
    },
};

/// Serialize `params` as `key:value` tokens joined by `;`, in [`keys::ORDER`].
///
/// Numbers are clamped first, so the emitted text is always inside the legal domain.
pub fn encode(params: &ArtworkParameters) -> String {
    let p = params.validated();

    let number = |field: Field| format_decimal(validate(field, p.get(field)));
    let colors = p
        .color_presets
        .iter()
        .map(|c| c.to_hex())
        .collect::<Vec<_>>()
        .join(COLOR_SEPARATOR.to_string().as_str());

    let values: [String; 12] = [
        p.shape.as_str().to_owned(),
        number(Field::Rotation),
        number(Field::Scale),
        number(Field::LayerCount),
        number(Field::SkewX),
        number(Field::SkewY),
        number(Field::Spread),
        number(Field::HorizontalOffset),
        number(Field::VerticalOffset),
        number(Field::PrimitiveCount),
        colors,
        p.background_color.to_hex(),
    ];

    let mut out = String::new();
    for (i, (key, value)) in keys::ORDER.iter().zip(values).enumerate() {
        if i > 0 {
            out.push(FIELD_SEPARATOR);
        }
        out.push_str(key);
        out.push(KEY_VALUE_SEPARATOR);
        out.push_str(&value);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/codec/encode.rs"]
mod tests;
