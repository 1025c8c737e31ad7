// tiho CLI - editor color theme generator

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tiho_cli::exit_codes::{
    config_exit_code, engine_exit_code, EXIT_CONFIG, EXIT_IO, EXIT_STALE, EXIT_SUCCESS,
};
use tiho_cli::generate::{check_all, render_all, write_all, CheckStatus, GenerateError};
use tiho_cli::manifest::contributions;
use tiho_cli::writer::FsWriter;
use tiho_config::{ConfigError, GeneratorConfig};
use tiho_engine::{EngineError, Palette};

#[derive(Parser)]
#[command(name = "tiho")]
#[command(about = "Generate editor color themes from hue/saturation pairs")]
#[command(version)]
struct Cli {
    /// Debug logging (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one theme file per configured theme
    #[command(after_help = "\
Examples:
  tiho generate
  tiho generate --out dist/themes
  tiho generate --only green --only blue
  tiho generate --check")]
    Generate {
        /// Config file (.toml or .json); defaults to ./tiho.toml, then built-in themes
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Surface table (TOML) replacing the built-in one
        #[arg(long)]
        surfaces: Option<PathBuf>,

        /// Output directory (must exist)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,

        /// Only generate these theme keys. Repeatable.
        #[arg(long, value_name = "KEY")]
        only: Vec<String>,

        /// Compare files on disk with what would be written; write nothing
        #[arg(long, conflicts_with = "dry_run")]
        check: bool,

        /// Print the paths that would be written
        #[arg(long)]
        dry_run: bool,
    },

    /// List configured themes
    List {
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the five shades derived from a hue and saturation
    Palette {
        /// Hue in degrees, [0, 360)
        hue: f64,

        /// Saturation in percent, [0, 100]
        saturation: f64,

        /// Take the lightness scale from this config
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the extension manifest `contributes.themes` array
    Manifest {
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate { config, surfaces, out, only, check, dry_run } => {
            cmd_generate(config, surfaces, out, only, check, dry_run)
        }
        Commands::List { config, json } => cmd_list(config, json),
        Commands::Palette { hue, saturation, config, json } => {
            cmd_palette(hue, saturation, config, json)
        }
        Commands::Manifest { config } => cmd_manifest(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// Logs go to stderr; stdout is reserved for command output.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("tiho={level},tiho_cli={level},tiho_engine={level},tiho_config={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn engine(err: EngineError) -> Self {
        let hint = match &err {
            EngineError::InvalidArgument { .. } => {
                Some("hue must be in [0, 360); saturation and lightness in [0, 100]".to_string())
            }
            _ => None,
        };
        Self { code: engine_exit_code(&err), message: err.to_string(), hint }
    }

    pub fn config(err: ConfigError) -> Self {
        Self { code: config_exit_code(&err), message: err.to_string(), hint: None }
    }

    pub fn generate(err: GenerateError) -> Self {
        match err {
            GenerateError::Engine(e) => Self::engine(e),
            GenerateError::Write { .. } => Self::io(err.to_string())
                .with_hint("the output directory must exist; create it or pass --out"),
        }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn load_config(path: Option<PathBuf>) -> Result<GeneratorConfig, CliError> {
    GeneratorConfig::resolve(path.as_deref()).map_err(CliError::config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| CliError::io(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

// ============================================================================
// generate
// ============================================================================

fn cmd_generate(
    config: Option<PathBuf>,
    surfaces: Option<PathBuf>,
    out: Option<PathBuf>,
    only: Vec<String>,
    check: bool,
    dry_run: bool,
) -> Result<(), CliError> {
    let mut config = load_config(config)?;
    if surfaces.is_some() {
        config.surfaces = surfaces;
    }
    if let Some(out) = out {
        config.override_output_dir(out);
    }
    if !only.is_empty() {
        config = config.only(&only).map_err(CliError::config)?;
    }

    let assembler = config.assembler().map_err(CliError::config)?;
    let rendered = render_all(&assembler, &config.definitions(), &config.output_path())
        .map_err(CliError::engine)?;

    if check {
        let statuses = check_all(&rendered);
        let outdated: Vec<_> = statuses
            .iter()
            .filter(|(_, status)| *status != CheckStatus::UpToDate)
            .collect();

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for (path, status) in &outdated {
            writeln!(handle, "{}: {}", status.label(), path.display())
                .map_err(|e| CliError::io(e.to_string()))?;
        }

        if outdated.is_empty() {
            tracing::info!("{} theme file(s) up to date", statuses.len());
            return Ok(());
        }
        let unreadable = outdated
            .iter()
            .filter(|(_, status)| *status == CheckStatus::Unreadable)
            .count();
        if unreadable > 0 {
            return Err(CliError::io(format!(
                "{} of {} theme file(s) could not be read",
                unreadable,
                statuses.len()
            )));
        }
        return Err(CliError {
            code: EXIT_STALE,
            message: format!("{} of {} theme file(s) out of date", outdated.len(), statuses.len()),
            hint: Some("run `tiho generate` to refresh them".to_string()),
        });
    }

    if dry_run {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for item in &rendered {
            writeln!(handle, "{}", item.path.display()).map_err(|e| CliError::io(e.to_string()))?;
        }
        return Ok(());
    }

    let written = write_all(&rendered, &mut FsWriter).map_err(CliError::generate)?;
    tracing::debug!("wrote {} theme file(s)", written);
    Ok(())
}

// ============================================================================
// list
// ============================================================================

#[derive(serde::Serialize)]
struct ThemeListing {
    key: String,
    name: String,
    file: String,
    hue: f64,
    saturation: f64,
}

fn cmd_list(config: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let config = load_config(config)?;
    let listings: Vec<ThemeListing> = config
        .themes
        .iter()
        .zip(config.definitions())
        .map(|(entry, def)| ThemeListing {
            key: entry.key.clone(),
            name: def.display_name,
            file: def.output_file_name,
            hue: def.hue,
            saturation: def.saturation,
        })
        .collect();

    if json {
        return print_json(&listings);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for l in &listings {
        writeln!(
            handle,
            "{:<12} {:<16} hue={:<6} sat={:<6} {}",
            l.key, l.name, l.hue, l.saturation, l.file
        )
        .map_err(|e| CliError::io(e.to_string()))?;
    }
    Ok(())
}

// ============================================================================
// palette
// ============================================================================

fn cmd_palette(hue: f64, saturation: f64, config: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let config = load_config(config)?;
    let palette = Palette::derive(hue, saturation, &config.lightness).map_err(CliError::engine)?;

    if json {
        return print_json(&palette);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for (shade, color) in palette.iter() {
        writeln!(handle, "{:<18} {}", shade.name(), color).map_err(|e| CliError::io(e.to_string()))?;
    }
    Ok(())
}

// ============================================================================
// manifest
// ============================================================================

fn cmd_manifest(config: Option<PathBuf>) -> Result<(), CliError> {
    let config = load_config(config)?;
    let entries = contributions(&config.definitions(), &config.output_dir).map_err(|e| CliError {
        code: EXIT_CONFIG,
        message: e.to_string(),
        hint: Some("set output_dir to a relative path inside the extension".to_string()),
    })?;
    print_json(&entries)
}
