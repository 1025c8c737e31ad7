// Palette derivation: five shades per theme, one hue/saturation pair

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{hsl_to_hex, Color};
use crate::error::Result;

/// Named palette slot a surface or token rule points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shade {
    #[serde(rename = "background.dark")]
    BackgroundDark,
    #[serde(rename = "background.light")]
    BackgroundLight,
    #[serde(rename = "text.dark")]
    TextDark,
    #[serde(rename = "text.normal")]
    TextNormal,
    #[serde(rename = "text.light")]
    TextLight,
}

impl Shade {
    pub const ALL: [Shade; 5] = [
        Shade::BackgroundDark,
        Shade::BackgroundLight,
        Shade::TextDark,
        Shade::TextNormal,
        Shade::TextLight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::BackgroundDark => "background.dark",
            Self::BackgroundLight => "background.light",
            Self::TextDark => "text.dark",
            Self::TextNormal => "text.normal",
            Self::TextLight => "text.light",
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lightness (percent) used for each shade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightnessScale {
    pub background_dark: f64,
    pub background_light: f64,
    pub text_dark: f64,
    pub text_normal: f64,
    pub text_light: f64,
}

impl Default for LightnessScale {
    fn default() -> Self {
        Self {
            background_dark: 10.0,
            background_light: 15.0,
            text_dark: 40.0,
            text_normal: 60.0,
            text_light: 90.0,
        }
    }
}

impl LightnessScale {
    pub fn lightness(&self, shade: Shade) -> f64 {
        match shade {
            Shade::BackgroundDark => self.background_dark,
            Shade::BackgroundLight => self.background_light,
            Shade::TextDark => self.text_dark,
            Shade::TextNormal => self.text_normal,
            Shade::TextLight => self.text_light,
        }
    }
}

/// The derived shades for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background_dark: Color,
    pub background_light: Color,
    pub text_dark: Color,
    pub text_normal: Color,
    pub text_light: Color,
}

impl Palette {
    /// Derive every shade at the given hue and saturation.
    pub fn derive(hue: f64, saturation: f64, scale: &LightnessScale) -> Result<Self> {
        let derive = |shade: Shade| {
            let color = hsl_to_hex(hue, saturation, scale.lightness(shade))?;
            tracing::debug!(%shade, hue, saturation, %color, "derived shade");
            Ok::<_, crate::EngineError>(color)
        };

        Ok(Palette {
            background_dark: derive(Shade::BackgroundDark)?,
            background_light: derive(Shade::BackgroundLight)?,
            text_dark: derive(Shade::TextDark)?,
            text_normal: derive(Shade::TextNormal)?,
            text_light: derive(Shade::TextLight)?,
        })
    }

    pub fn shade(&self, shade: Shade) -> Color {
        match shade {
            Shade::BackgroundDark => self.background_dark,
            Shade::BackgroundLight => self.background_light,
            Shade::TextDark => self.text_dark,
            Shade::TextNormal => self.text_normal,
            Shade::TextLight => self.text_light,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shade, Color)> + '_ {
        Shade::ALL.into_iter().map(move |s| (s, self.shade(s)))
    }

    pub fn contains(&self, color: Color) -> bool {
        self.iter().any(|(_, c)| c == color)
    }
}
