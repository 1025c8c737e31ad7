// Render, write and check theme files

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tiho_engine::{AssembledTheme, Assembler, EngineError, ThemeDefinition};

use crate::writer::ThemeWriter;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A rendered theme and the path it belongs at
#[derive(Debug, Clone)]
pub struct RenderedTheme {
    pub path: PathBuf,
    pub contents: String,
    pub theme: AssembledTheme,
}

/// Assemble and render every definition, in order.
pub fn render_all(
    assembler: &Assembler,
    definitions: &[ThemeDefinition],
    output_dir: &Path,
) -> Result<Vec<RenderedTheme>, EngineError> {
    assembler
        .assemble(definitions)?
        .into_iter()
        .map(|theme| {
            let contents = theme.document.render()?;
            let path = output_dir.join(&theme.definition.output_file_name);
            Ok::<_, EngineError>(RenderedTheme { path, contents, theme })
        })
        .collect()
}

/// Write every rendered theme. Returns the number of files written.
pub fn write_all(
    rendered: &[RenderedTheme],
    writer: &mut dyn ThemeWriter,
) -> Result<usize, GenerateError> {
    for item in rendered {
        tracing::info!("writing {}", item.path.display());
        writer
            .write(&item.path, &item.contents)
            .map_err(|source| GenerateError::Write { path: item.path.clone(), source })?;
    }
    Ok(rendered.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    UpToDate,
    Stale,
    Missing,
    /// Present but could not be read (permissions, a directory in the way, ...)
    Unreadable,
}

impl CheckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::UpToDate => "ok",
            Self::Stale => "stale",
            Self::Missing => "missing",
            Self::Unreadable => "unreadable",
        }
    }
}

/// Compare rendered output to what is on disk. Writes nothing.
pub fn check_all(rendered: &[RenderedTheme]) -> Vec<(PathBuf, CheckStatus)> {
    rendered
        .iter()
        .map(|item| {
            let status = match fs::read(&item.path) {
                Ok(existing) if existing == item.contents.as_bytes() => CheckStatus::UpToDate,
                Ok(_) => CheckStatus::Stale,
                Err(e) if e.kind() == io::ErrorKind::NotFound => CheckStatus::Missing,
                Err(_) => CheckStatus::Unreadable,
            };
            tracing::debug!(path = %item.path.display(), status = status.label(), "checked");
            (item.path.clone(), status)
        })
        .collect()
}
