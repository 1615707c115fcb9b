use std::collections::BTreeMap;

use crate::{
    codec::{COLOR_SEPARATOR, FIELD_SEPARATOR, KEY_VALUE_SEPARATOR},
    color::model::Color,
    params::model::ArtworkParameters,
};

/// Split encoded text into raw `key -> value` pairs.
///
/// Each `;`-separated token is split on its first `:`. A token without one (including the
/// empty token of an empty string or a trailing `;`) invalidates the whole input and yields an
/// empty map. Values are not parsed or clamped; later duplicates win.
pub fn decode(text: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for (idx, token) in text.split(FIELD_SEPARATOR).enumerate() {
        let Some((key, value)) = token.split_once(KEY_VALUE_SEPARATOR) else {
            tracing::debug!(token_index = idx, "token without key separator, discarding input");
            return BTreeMap::new();
        };
        out.insert(key.to_owned(), value.to_owned());
    }
    out
}

/// Parse a comma-joined list of `#RRGGBB` colors. Unparseable tokens are dropped.
pub fn reconstruct_colors(text: &str) -> Vec<Color> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(COLOR_SEPARATOR)
        .filter_map(|token| match Color::from_hex(token) {
            Ok(c) => Some(c.with_alpha(1.0)),
            Err(e) => {
                tracing::debug!(token, %e, "dropping color token");
                None
            }
        })
        .collect()
}

/// [`decode`] followed by [`ArtworkParameters::from_decoded`].
pub fn decode_parameters(text: &str) -> ArtworkParameters {
    ArtworkParameters::from_decoded(&decode(text))
}

#[cfg(test)]
#[path = "../../tests/unit/codec/decode.rs"]
mod tests;
