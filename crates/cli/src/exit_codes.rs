//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — build scripts rely on them.
//!
//! | Code | Description                                          |
//! |------|------------------------------------------------------|
//! | 0    | Success                                              |
//! | 1    | General error (unspecified)                          |
//! | 2    | CLI usage error (bad args)                           |
//! | 3    | Invalid hue / saturation / lightness                 |
//! | 4    | Config or surface table error                        |
//! | 5    | I/O error writing or reading theme files             |
//! | 6    | `generate --check` found missing or stale theme files |

use tiho_config::ConfigError;
use tiho_engine::EngineError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
/// Matches clap's own exit code for parse failures.
pub const EXIT_USAGE: u8 = 2;

/// A color component was outside its range.
pub const EXIT_INVALID_ARGUMENT: u8 = 3;

/// Config file or surface table could not be parsed or failed validation.
pub const EXIT_CONFIG: u8 = 4;

/// Filesystem error (missing output directory, permissions, ...).
pub const EXIT_IO: u8 = 5;

/// Theme files on disk differ from what would be generated.
pub const EXIT_STALE: u8 = 6;

/// Map an EngineError to its exit code.
pub fn engine_exit_code(err: &EngineError) -> u8 {
    match err {
        EngineError::InvalidArgument { .. } => EXIT_INVALID_ARGUMENT,
        EngineError::Table(_) => EXIT_CONFIG,
        EngineError::Render(_) => EXIT_ERROR,
    }
}

/// Map a ConfigError to its exit code.
pub fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::Io { .. } => EXIT_IO,
        ConfigError::Table(engine) => engine_exit_code(engine),
        ConfigError::Parse(_) | ConfigError::Validation(_) | ConfigError::UnsupportedFormat(_) => {
            EXIT_CONFIG
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_codes() {
        let err = EngineError::InvalidArgument { component: "hue", value: 400.0, range: "[0, 360)" };
        assert_eq!(engine_exit_code(&err), EXIT_INVALID_ARGUMENT);
        assert_eq!(engine_exit_code(&EngineError::Table("x".into())), EXIT_CONFIG);
    }

    #[test]
    fn test_config_codes() {
        assert_eq!(config_exit_code(&ConfigError::Validation("x".into())), EXIT_CONFIG);
        let table = ConfigError::Table(EngineError::Table("x".into()));
        assert_eq!(config_exit_code(&table), EXIT_CONFIG);
    }
}
