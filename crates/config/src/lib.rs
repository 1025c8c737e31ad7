// Configuration loading

pub mod error;
pub mod generator;

pub use error::ConfigError;
pub use generator::{GeneratorConfig, ThemeEntry, DEFAULT_CONFIG_FILE};
