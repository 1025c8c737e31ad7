//! `tiho` CLI library: writing, checking and describing generated themes.

pub mod exit_codes;
pub mod generate;
pub mod manifest;
pub mod writer;

pub use generate::{check_all, render_all, write_all, CheckStatus, GenerateError, RenderedTheme};
pub use writer::{FsWriter, MemoryWriter, ThemeWriter};
