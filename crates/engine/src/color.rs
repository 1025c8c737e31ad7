// HSL -> hex color derivation

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, Result};

/// Opaque 24-bit color, written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert from hex u32 (0xRRGGBB)
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Parse `#RRGGBB` or `RRGGBB` (either case)
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_hex_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color '{s}'")))
    }
}

/// An HSL triple: hue in degrees, saturation and lightness in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Reject out-of-range components instead of clamping them.
    pub fn validate(&self) -> Result<()> {
        check_hue(self.hue)?;
        check_percent("saturation", self.saturation)?;
        check_percent("lightness", self.lightness)?;
        Ok(())
    }

    pub fn to_color(self) -> Result<Color> {
        self.validate()?;
        let (r, g, b) = self.to_rgb_unit();
        Ok(Color::from_rgb(channel(r), channel(g), channel(b)))
    }

    /// RGB channels in [0, 1]. Assumes a validated triple.
    fn to_rgb_unit(self) -> (f64, f64, f64) {
        let h = self.hue / 360.0;
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;

        if s == 0.0 {
            return (l, l, l);
        }

        let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let t1 = 2.0 * l - t2;

        let hue_to_channel = |offset: f64| {
            let mut t3 = h + offset;
            if t3 < 0.0 {
                t3 += 1.0;
            }
            if t3 > 1.0 {
                t3 -= 1.0;
            }

            if 6.0 * t3 < 1.0 {
                t1 + (t2 - t1) * 6.0 * t3
            } else if 2.0 * t3 < 1.0 {
                t2
            } else if 3.0 * t3 < 2.0 {
                t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
            } else {
                t1
            }
        };

        (
            hue_to_channel(1.0 / 3.0),
            hue_to_channel(0.0),
            hue_to_channel(-1.0 / 3.0),
        )
    }
}

/// Convert an HSL triple to a `#RRGGBB` color.
///
/// `hue` must lie in `[0, 360)`, `saturation` and `lightness` in `[0, 100]`.
/// Anything else (including NaN) is an [`EngineError::InvalidArgument`].
pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> Result<Color> {
    Hsl::new(hue, saturation, lightness).to_color()
}

fn channel(unit: f64) -> u8 {
    // round half up, as the editor theme tooling does
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

fn check_hue(value: f64) -> Result<()> {
    if value.is_finite() && (0.0..360.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::InvalidArgument {
            component: "hue",
            value,
            range: "[0, 360)",
        })
    }
}

fn check_percent(component: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::InvalidArgument {
            component,
            value,
            range: "[0, 100]",
        })
    }
}
