use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::{
    error::{KaleidoError, KaleidoResult},
    math::wrap_degrees,
};

/// Straight-alpha RGBA color with normalized `0..1` channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Build a color from hue (degrees, wrapped), saturation and value (both clamped to 0..1).
    pub fn from_hsv(h: f64, s: f64, v: f64, a: f64) -> Self {
        let h = wrap_degrees(h) / 60.0;
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self::rgba(r + m, g + m, b + m, a)
    }

    /// Hue in degrees `[0, 360)`, saturation and value in `0..1`.
    pub fn to_hsv(self) -> (f64, f64, f64) {
        let r = self.r.clamp(0.0, 1.0);
        let g = self.g.clamp(0.0, 1.0);
        let b = self.b.clamp(0.0, 1.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta <= f64::EPSILON {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = if max <= f64::EPSILON { 0.0 } else { delta / max };
        (wrap_degrees(h), s, max)
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }

    /// `#RRGGBB`, uppercase, alpha dropped.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> KaleidoResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> KaleidoResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| KaleidoError::codec(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(KaleidoError::codec("hex color must be ASCII"));
        }
        let (r, g, b, a) = match s.len() {
            6 => (hex_byte(&s[0..2])?, hex_byte(&s[2..4])?, hex_byte(&s[4..6])?, 255),
            8 => (
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                hex_byte(&s[6..8])?,
            ),
            _ => {
                return Err(KaleidoError::codec(
                    "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
                ));
            }
        };
        Ok(Self::from_rgb8(r, g, b).with_alpha(f64::from(a) / 255.0))
    }

    fn to_hex_with_alpha(self) -> String {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        if a == 255 {
            self.to_hex()
        } else {
            format!("{}{a:02X}", self.to_hex())
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = KaleidoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex_with_alpha())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            HsvaObj {
                h: f64,
                s: f64,
                v: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Color::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Color::rgba(r, g, b, a)),
            Repr::HsvaObj { h, s, v, a } => Ok(Color::from_hsv(h, s, v, a)),
            Repr::Arr(v) => match v.as_slice() {
                &[r, g, b] => Ok(Color::rgb(r, g, b)),
                &[r, g, b, a] => Ok(Color::rgba(r, g, b, a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/model.rs"]
mod tests;
