//! UI-surface mapping table.
//!
//! Which editor surfaces get which palette shade is data, not code: the
//! built-in table lives in `data/surfaces.toml` and is embedded at compile
//! time. A replacement table with the same schema can be loaded at runtime.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{EngineError, Result};
use crate::palette::Shade;

/// Schema versions this build understands.
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

const BUILTIN_TABLE: &str = include_str!("../data/surfaces.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceEntry {
    pub key: String,
    pub shade: Shade,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenEntry {
    pub name: String,
    pub scopes: Vec<String>,
    pub shade: Shade,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceTable {
    pub version: u32,
    #[serde(default, rename = "surface")]
    pub surfaces: Vec<SurfaceEntry>,
    #[serde(default, rename = "token")]
    pub tokens: Vec<TokenEntry>,
}

impl SurfaceTable {
    /// The table shipped with the generator.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_TABLE)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let table: SurfaceTable =
            toml::from_str(content).map_err(|e| EngineError::Table(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version) {
            return Err(EngineError::Table(format!(
                "unsupported table version {} (supported: {:?})",
                self.version, SUPPORTED_VERSIONS
            )));
        }

        let mut seen = HashSet::new();
        for entry in &self.surfaces {
            if entry.key.trim().is_empty() {
                return Err(EngineError::Table("surface with empty key".into()));
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(EngineError::Table(format!("duplicate surface key '{}'", entry.key)));
            }
        }

        for token in &self.tokens {
            if token.scopes.is_empty() {
                return Err(EngineError::Table(format!(
                    "token rule '{}' has no scopes",
                    token.name
                )));
            }
        }

        Ok(())
    }

    pub fn shade_of(&self, key: &str) -> Option<Shade> {
        self.surfaces.iter().find(|e| e.key == key).map(|e| e.shade)
    }
}
