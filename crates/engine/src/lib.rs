//! `tiho-engine` — color derivation and theme document assembly.
//!
//! Pure engine crate: receives theme definitions, returns rendered documents.
//! No filesystem access; writing files is the caller's job.

pub mod assemble;
pub mod color;
pub mod definition;
pub mod document;
pub mod error;
pub mod palette;
pub mod surfaces;

pub use assemble::{AssembledTheme, Assembler};
pub use color::{hsl_to_hex, Color, Hsl};
pub use definition::ThemeDefinition;
pub use document::{SurfaceColors, ThemeDocument, TokenColorRule, TokenSettings};
pub use error::EngineError;
pub use palette::{LightnessScale, Palette, Shade};
pub use surfaces::SurfaceTable;
