// Theme assembly: definition -> palette -> document

use crate::definition::ThemeDefinition;
use crate::document::{SurfaceColors, ThemeDocument, TokenColorRule, TokenSettings};
use crate::error::Result;
use crate::palette::{LightnessScale, Palette};
use crate::surfaces::SurfaceTable;

/// A document together with what it was built from
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledTheme {
    pub definition: ThemeDefinition,
    pub palette: Palette,
    pub document: ThemeDocument,
}

/// Builds theme documents from definitions.
///
/// Holds everything that used to be a module constant (the surface table and
/// the lightness scale), so assembly is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct Assembler {
    table: SurfaceTable,
    lightness: LightnessScale,
}

impl Assembler {
    pub fn new(table: SurfaceTable, lightness: LightnessScale) -> Self {
        Self { table, lightness }
    }

    /// Built-in table, default lightness scale.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(SurfaceTable::builtin()?, LightnessScale::default()))
    }

    pub fn table(&self) -> &SurfaceTable {
        &self.table
    }

    pub fn lightness(&self) -> &LightnessScale {
        &self.lightness
    }

    pub fn assemble_one(&self, definition: &ThemeDefinition) -> Result<AssembledTheme> {
        let palette = Palette::derive(definition.hue, definition.saturation, &self.lightness)?;

        let mut colors = SurfaceColors::new();
        for entry in &self.table.surfaces {
            colors.push(entry.key.clone(), palette.shade(entry.shade));
        }

        let token_colors = self
            .table
            .tokens
            .iter()
            .map(|token| TokenColorRule {
                name: token.name.clone(),
                scope: token.scopes.clone(),
                settings: TokenSettings { foreground: palette.shade(token.shade) },
            })
            .collect();

        let document = ThemeDocument {
            name: definition.display_name.clone(),
            colors,
            token_colors,
        };

        tracing::debug!(
            theme = %definition.display_name,
            surfaces = document.colors.len(),
            tokens = document.token_colors.len(),
            "assembled theme"
        );

        Ok(AssembledTheme {
            definition: definition.clone(),
            palette,
            document,
        })
    }

    /// One theme per definition, in input order. Stops at the first invalid definition.
    pub fn assemble(&self, definitions: &[ThemeDefinition]) -> Result<Vec<AssembledTheme>> {
        definitions.iter().map(|d| self.assemble_one(d)).collect()
    }
}
