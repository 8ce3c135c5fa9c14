//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pirates-calc/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::display::{DEFAULT_ERROR_TOKEN, DEFAULT_PRECISION, MAX_PRECISION};
use crate::core::state::{DEFAULT_BANNER, DEFAULT_TITLE};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub banner: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub error_token: Option<String>,
    pub precision: Option<usize>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub banner: String,
    pub error_token: String,
    pub precision: usize,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.pirates-calc/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pirates-calc").join("config.toml"))
}

/// Load config from `~/.pirates-calc/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CalcConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CalcConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CalcConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CalcConfig::default());
    }

    load_from(&path)
}

/// Parse the config file at `path`.
pub fn load_from(path: &Path) -> Result<CalcConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CalcConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# π-rates Calculator Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "π-rates Calculator"      # Or set PIRATES_CALC_TITLE
# banner = "Whitworth University"

# [display]
# error_token = "Error"             # Or set PIRATES_CALC_ERROR_TOKEN
# precision = 10                    # Fraction digits for results (0-15), or PIRATES_CALC_PRECISION
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_precision` is from the `--precision` flag (None = not specified).
pub fn resolve(config: &CalcConfig, cli_precision: Option<usize>) -> ResolvedConfig {
    resolve_with_env(config, cli_precision, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env<F>(
    config: &CalcConfig,
    cli_precision: Option<usize>,
    env: F,
) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Title: env → config → default
    let title = env("PIRATES_CALC_TITLE")
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let banner = config
        .general
        .banner
        .clone()
        .unwrap_or_else(|| DEFAULT_BANNER.to_string());

    // Error token: env → config → default
    let error_token = env("PIRATES_CALC_ERROR_TOKEN")
        .or_else(|| config.display.error_token.clone())
        .unwrap_or_else(|| DEFAULT_ERROR_TOKEN.to_string());

    // Precision: CLI → env → config → default
    let env_precision = env("PIRATES_CALC_PRECISION")
        .and_then(|s| match s.trim().parse::<usize>() {
            Ok(p) => Some(p),
            Err(e) => {
                warn!("Ignoring PIRATES_CALC_PRECISION={:?}: {}", s, e);
                None
            }
        });
    let requested = cli_precision
        .or(env_precision)
        .or(config.display.precision)
        .unwrap_or(DEFAULT_PRECISION);
    if requested > MAX_PRECISION {
        warn!(
            "Precision {} exceeds maximum, clamping to {}",
            requested, MAX_PRECISION
        );
    }

    ResolvedConfig {
        title,
        banner,
        error_token,
        precision: requested.min(MAX_PRECISION),
    }
}
