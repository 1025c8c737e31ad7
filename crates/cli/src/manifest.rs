// Editor extension manifest: the `contributes.themes` entries

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tiho_engine::ThemeDefinition;

/// All generated themes are dark
pub const UI_THEME: &str = "vs-dark";

#[derive(Debug, Error)]
pub enum ManifestError {
    /// Absolute paths and `..` cannot be expressed relative to the extension root.
    #[error("output directory {} is not inside the extension root", .0.display())]
    OutsideExtension(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeContribution {
    pub label: String,
    #[serde(rename = "uiTheme")]
    pub ui_theme: &'static str,
    pub path: String,
}

/// One entry per definition, paths relative to the extension root.
///
/// `output_dir` must be relative and stay below the root.
pub fn contributions(
    definitions: &[ThemeDefinition],
    output_dir: &Path,
) -> Result<Vec<ThemeContribution>, ManifestError> {
    let dir = extension_relative(output_dir)?;

    Ok(definitions
        .iter()
        .map(|d| ThemeContribution {
            label: d.display_name.clone(),
            ui_theme: UI_THEME,
            path: if dir.is_empty() {
                format!("./{}", d.output_file_name)
            } else {
                format!("./{}/{}", dir, d.output_file_name)
            },
        })
        .collect())
}

/// `/`-joined normal components; `.` segments are dropped.
fn extension_relative(dir: &Path) -> Result<String, ManifestError> {
    let mut parts = Vec::new();
    for component in dir.components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ManifestError::OutsideExtension(dir.to_path_buf()));
            }
        }
    }
    Ok(parts.join("/"))
}
