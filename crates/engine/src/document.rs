// Theme document: the JSON file an editor loads

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::color::Color;
use crate::error::{EngineError, Result};
use crate::palette::Palette;

/// Surface key -> color, kept in table order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceColors(Vec<(String, Color)>);

impl SurfaceColors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, key: impl Into<String>, color: Color) {
        self.0.push((key.into(), color));
    }

    pub fn get(&self, key: &str) -> Option<Color> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.0.iter().map(|(k, c)| (k.as_str(), *c))
    }
}

impl Serialize for SurfaceColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, color) in &self.0 {
            map.serialize_entry(key, color)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSettings {
    pub foreground: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenColorRule {
    pub name: String,
    pub scope: Vec<String>,
    pub settings: TokenSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeDocument {
    pub name: String,
    pub colors: SurfaceColors,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenColorRule>,
}

impl ThemeDocument {
    /// Pretty JSON, two-space indent, no trailing newline.
    pub fn render(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::Render(e.to_string()))
    }

    /// Every color in the document is one of the palette's shades.
    pub fn colors_trace_to(&self, palette: &Palette) -> bool {
        self.colors.iter().all(|(_, c)| palette.contains(c))
            && self
                .token_colors
                .iter()
                .all(|rule| palette.contains(rule.settings.foreground))
    }
}
