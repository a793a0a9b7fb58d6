//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.ddeum/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::transform::{
    DEFAULT_MARQUEE_COLS, DEFAULT_MARQUEE_MAX_ITEMS, DEFAULT_MARQUEE_VISIBLE_ROWS,
    DEFAULT_METRICS_CAPACITY, MarqueeLayout, TransformSettings,
};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DdeumConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub admin: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SheetsConfig {
    pub metrics: Option<String>,
    pub names: Option<String>,
    pub universities: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MarqueeConfig {
    pub cols: Option<usize>,
    pub visible_rows: Option<usize>,
    pub max_items: Option<usize>,
    pub row_height_px: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MetricsConfig {
    pub capacity: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

const SHEET_BASE_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQH5yGKWWaPSmqvWJJtbR2yNtVU4EaYoIyXReUWaWIllKPorVY1Q2AEfBYoN3JBYxDUq-vaN0Pwe973/pub";

pub const DEFAULT_ROW_HEIGHT_PX: u32 = 40;

pub fn default_sheet_url(gid: u64) -> String {
    format!("{SHEET_BASE_URL}?gid={gid}&single=true&output=csv")
}

const METRICS_GID: u64 = 2046441648;
const NAMES_GID: u64 = 0;
const UNIVERSITIES_GID: u64 = 1842660855;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub metrics_url: String,
    pub names_url: String,
    pub universities_url: String,
    pub settings: TransformSettings,
    pub row_height_px: u32,
    pub admin: bool,
}

/// Values given on the command line. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub metrics_url: Option<String>,
    pub names_url: Option<String>,
    pub universities_url: Option<String>,
    pub admin: bool,
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

/// Returns the path to `~/.ddeum/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".ddeum").join("config.toml"))
}

/// Load config from `~/.ddeum/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DdeumConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DdeumConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DdeumConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DdeumConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. Missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<DdeumConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DdeumConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Ddeum homepage loader configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# admin = false                      # Or set DDEUM_ADMIN=1

# [sheets]
# Published CSV exports. Env: DDEUM_METRICS_URL, DDEUM_NAMES_URL, DDEUM_UNIVERSITIES_URL
# metrics = "https://docs.google.com/spreadsheets/d/e/.../pub?gid=2046441648&single=true&output=csv"
# names = "https://docs.google.com/spreadsheets/d/e/.../pub?gid=0&single=true&output=csv"
# universities = "https://docs.google.com/spreadsheets/d/e/.../pub?gid=1842660855&single=true&output=csv"

# [marquee]
# cols = 4
# visible_rows = 5
# max_items = 400                  # Rounded down to a multiple of 2 * cols
# row_height_px = 40                 # Used for the --shift value in HTML output

# [metrics]
# capacity = 4
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DdeumConfig, cli: &CliOverrides) -> ResolvedConfig {
    let metrics_url = resolve_url(
        cli.metrics_url.as_deref(),
        "DDEUM_METRICS_URL",
        config.sheets.metrics.as_deref(),
        METRICS_GID,
    );
    let names_url = resolve_url(
        cli.names_url.as_deref(),
        "DDEUM_NAMES_URL",
        config.sheets.names.as_deref(),
        NAMES_GID,
    );
    let universities_url = resolve_url(
        cli.universities_url.as_deref(),
        "DDEUM_UNIVERSITIES_URL",
        config.sheets.universities.as_deref(),
        UNIVERSITIES_GID,
    );

    // Admin: CLI flag → env → config → off
    let admin = cli.admin
        || std::env::var("DDEUM_ADMIN")
            .ok()
            .map(|v| parse_flag(&v))
            .or(config.general.admin)
            .unwrap_or(false);

    let cols = config.marquee.cols.unwrap_or(DEFAULT_MARQUEE_COLS);
    let marquee = MarqueeLayout {
        cols,
        visible_rows: config
            .marquee
            .visible_rows
            .unwrap_or(DEFAULT_MARQUEE_VISIBLE_ROWS),
        max_items: align_max_items(
            config.marquee.max_items.unwrap_or(DEFAULT_MARQUEE_MAX_ITEMS),
            cols,
        ),
    };

    ResolvedConfig {
        metrics_url,
        names_url,
        universities_url,
        settings: TransformSettings {
            metrics_capacity: config.metrics.capacity.unwrap_or(DEFAULT_METRICS_CAPACITY),
            marquee,
        },
        row_height_px: config
            .marquee
            .row_height_px
            .unwrap_or(DEFAULT_ROW_HEIGHT_PX),
        admin,
    }
}

/// Rounds `max_items` down to a multiple of `2 * cols` (at least one row per
/// half) so the doubled marquee list splits on a row boundary.
fn align_max_items(max_items: usize, cols: usize) -> usize {
    let step = 2 * cols.max(1);
    (max_items / step).max(1) * step
}

/// URL: CLI → env → config → published default.
fn resolve_url(cli: Option<&str>, env_key: &str, file: Option<&str>, gid: u64) -> String {
    cli.map(str::to_string)
        .or_else(|| std::env::var(env_key).ok())
        .or_else(|| file.map(str::to_string))
        .unwrap_or_else(|| default_sheet_url(gid))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
