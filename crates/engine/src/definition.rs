use serde::Serialize;

/// One theme to generate: a display name, an output file, and the hue/saturation
/// every shade is derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeDefinition {
    pub display_name: String,
    pub output_file_name: String,
    pub hue: f64,
    pub saturation: f64,
}

impl ThemeDefinition {
    pub fn new(
        display_name: impl Into<String>,
        output_file_name: impl Into<String>,
        hue: f64,
        saturation: f64,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            output_file_name: output_file_name.into(),
            hue,
            saturation,
        }
    }

    /// `"<prefix> <key>"`, written to `"<prefix>-<key>-color-theme.json"`
    pub fn from_key(prefix: &str, key: &str, hue: f64, saturation: f64) -> Self {
        Self::new(
            format!("{prefix} {key}"),
            format!("{prefix}-{key}-color-theme.json"),
            hue,
            saturation,
        )
    }
}
