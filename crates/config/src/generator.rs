// Generator configuration
// Loaded from tiho.toml (or a .json file); falls back to the built-in theme list

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tiho_engine::{Assembler, LightnessScale, SurfaceTable, ThemeDefinition};

use crate::error::ConfigError;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "tiho.toml";

/// One theme in the config: a key (used in the name and file name) and a hue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeEntry {
    pub key: String,
    pub hue: f64,
    /// Overrides the global saturation for this theme only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
}

impl ThemeEntry {
    pub fn new(key: impl Into<String>, hue: f64) -> Self {
        Self { key: key.into(), hue, saturation: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prefix for display names and file names ("tiho" -> "tiho green")
    pub prefix: String,

    /// Saturation (percent) shared by every theme
    pub saturation: f64,

    /// Directory the theme files are written to, relative to the config
    /// file's directory when loaded from a file. The manifest uses it as-is,
    /// relative to the extension root.
    pub output_dir: PathBuf,

    /// Directory `output_dir` is resolved against; set by `load`
    #[serde(skip)]
    pub output_base: Option<PathBuf>,

    /// Lightness of each palette shade
    pub lightness: LightnessScale,

    /// Replacement surface table (TOML); built-in table when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surfaces: Option<PathBuf>,

    pub themes: Vec<ThemeEntry>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix: "tiho".into(),
            saturation: 20.0,
            output_dir: PathBuf::from("themes"),
            output_base: None,
            lightness: LightnessScale::default(),
            surfaces: None,
            themes: vec![
                ThemeEntry::new("gray", 0.0),
                ThemeEntry::new("green", 143.0),
                ThemeEntry::new("blue", 200.0),
                ThemeEntry::new("purple", 300.0),
                ThemeEntry::new("brown", 30.0),
            ],
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file.
    ///
    /// Relative `surfaces` and `output_dir` paths are taken relative to the
    /// config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content)?,
            Some("json") => Self::from_json(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        if let Some(parent) = path.parent() {
            config.surfaces = config
                .surfaces
                .take()
                .map(|s| if s.is_relative() { parent.join(s) } else { s });
            config.output_base = Some(parent.to_path_buf());
        }

        tracing::debug!(path = %path.display(), themes = config.themes.len(), "loaded config");
        Ok(config)
    }

    /// Explicit path, else `tiho.toml` in the working directory, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }

        tracing::debug!("no config file, using built-in theme list");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_key(&self.prefix) {
            return Err(ConfigError::Validation(format!(
                "prefix '{}' must be non-empty lowercase letters, digits or '-'",
                self.prefix
            )));
        }

        let mut seen = HashSet::new();
        for theme in &self.themes {
            if !is_valid_key(&theme.key) {
                return Err(ConfigError::Validation(format!(
                    "theme key '{}' must be non-empty lowercase letters, digits or '-'",
                    theme.key
                )));
            }
            if !seen.insert(theme.key.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate theme key '{}'",
                    theme.key
                )));
            }
        }

        Ok(())
    }

    /// Definitions in config order.
    pub fn definitions(&self) -> Vec<ThemeDefinition> {
        self.themes
            .iter()
            .map(|t| {
                ThemeDefinition::from_key(
                    &self.prefix,
                    &t.key,
                    t.hue,
                    t.saturation.unwrap_or(self.saturation),
                )
            })
            .collect()
    }

    /// Keep only the named themes (config order is preserved).
    pub fn only(&self, keys: &[String]) -> Result<Self, ConfigError> {
        if let Some(unknown) = keys.iter().find(|k| !self.themes.iter().any(|t| &t.key == *k)) {
            return Err(ConfigError::Validation(format!("unknown theme key '{unknown}'")));
        }

        let mut filtered = self.clone();
        filtered.themes.retain(|t| keys.contains(&t.key));
        Ok(filtered)
    }

    /// Where theme files are written.
    pub fn output_path(&self) -> PathBuf {
        match &self.output_base {
            Some(base) if self.output_dir.is_relative() => base.join(&self.output_dir),
            _ => self.output_dir.clone(),
        }
    }

    /// Replace the output directory with one given relative to the working
    /// directory (`--out`).
    pub fn override_output_dir(&mut self, dir: PathBuf) {
        self.output_dir = dir;
        self.output_base = None;
    }

    pub fn surface_table(&self) -> Result<SurfaceTable, ConfigError> {
        match &self.surfaces {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(SurfaceTable::from_toml(&content)?)
            }
            None => Ok(SurfaceTable::builtin()?),
        }
    }

    pub fn assembler(&self) -> Result<Assembler, ConfigError> {
        Ok(Assembler::new(self.surface_table()?, self.lightness))
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        let defs = config.definitions();
        let names: Vec<_> = defs.iter().map(|d| d.display_name.as_str()).collect();
        assert_eq!(names, vec!["tiho gray", "tiho green", "tiho blue", "tiho purple", "tiho brown"]);
        assert!(defs.iter().all(|d| d.saturation == 20.0));
        assert_eq!(defs[1].hue, 143.0);
        assert_eq!(defs[1].output_file_name, "tiho-green-color-theme.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = GeneratorConfig::from_toml(
            r#"
prefix = "calm"
saturation = 35
output_dir = "out"

[lightness]
background_dark = 8

[[themes]]
key = "teal"
hue = 180

[[themes]]
key = "rose"
hue = 340
saturation = 50
"#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.output_path(), PathBuf::from("out"));
        assert_eq!(config.lightness.background_dark, 8.0);
        assert_eq!(config.lightness.text_light, 90.0);

        let defs = config.definitions();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].display_name, "calm teal");
        assert_eq!(defs[0].saturation, 35.0);
        assert_eq!(defs[1].output_file_name, "calm-rose-color-theme.json");
        assert_eq!(defs[1].saturation, 50.0);
    }

    #[test]
    fn test_from_json() {
        let config = GeneratorConfig::from_json(r#"{"themes": [{"key": "gray", "hue": 0}]}"#).unwrap();
        assert_eq!(config.prefix, "tiho");
        assert_eq!(config.themes.len(), 1);
    }

    #[test]
    fn test_empty_theme_list() {
        let config = GeneratorConfig::from_toml("themes = []").unwrap();
        assert!(config.definitions().is_empty());
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let err = GeneratorConfig::from_toml(
            r#"
[[themes]]
key = "gray"
hue = 0

[[themes]]
key = "gray"
hue = 10
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate theme key 'gray'"), "{err}");
    }

    #[test]
    fn test_bad_key_rejected() {
        let err = GeneratorConfig::from_toml(
            r#"
[[themes]]
key = "Dark Gray"
hue = 0
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            GeneratorConfig::from_toml("saturation = \"lots\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_only() {
        let config = GeneratorConfig::default();
        let filtered = config.only(&["brown".into(), "green".into()]).unwrap();
        let keys: Vec<_> = filtered.themes.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["green", "brown"]);

        assert!(config.only(&["orange".into()]).is_err());
    }

    #[test]
    fn test_builtin_assembler() {
        let asm = GeneratorConfig::default().assembler().unwrap();
        assert_eq!(asm.table().version, 1);
    }
}
