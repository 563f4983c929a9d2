//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.systemic/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The log file and level come from this config, so nothing here can log
//! directly. Loading and resolution collect `Notice`s instead, and `main`
//! replays them once the logger is up.

use log::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::clock::ClockFormat;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SystemicConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub user_name: Option<String>,
    pub user_initials: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub clock: Option<ClockFormat>,
    pub wide_layout_min_width: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SeedConfig {
    pub file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_USER_NAME: &str = "Jordan Doe";
pub const DEFAULT_USER_INITIALS: &str = "JD";
pub const DEFAULT_WIDE_LAYOUT_MIN_WIDTH: u16 = 110;
pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_LOG_FILE: &str = "systemic.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub user_name: String,
    pub user_initials: String,
    pub clock: ClockFormat,
    pub wide_layout_min_width: u16,
    pub log_level: log::LevelFilter,
    pub log_file: PathBuf,
    pub seed_file: Option<PathBuf>,
    /// Messages produced while resolving, for logging after init
    pub notices: Vec<Notice>,
}

/// A log line deferred until the logger exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// A parsed config file plus the notices from finding and reading it.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: SystemicConfig,
    pub notices: Vec<Notice>,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub clock: Option<ClockFormat>,
    pub seed_file: Option<PathBuf>,
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

/// Returns the path to `~/.systemic/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".systemic").join("config.toml"))
}

/// Load config from `path`, or from `~/.systemic/config.toml` when `None`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `SystemicConfig::default()`. An explicit path that doesn't exist
/// is an I/O error. A malformed file returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    if let Some(explicit) = path {
        return read_config(explicit);
    }

    let Some(path) = config_path() else {
        return Ok(LoadedConfig {
            config: SystemicConfig::default(),
            notices: vec![Notice::new(
                Level::Warn,
                "Could not determine home directory, using default config",
            )],
        });
    };

    if !path.exists() {
        let mut notices = vec![Notice::new(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        )];
        notices.extend(generate_default_config(&path));
        return Ok(LoadedConfig {
            config: SystemicConfig::default(),
            notices,
        });
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SystemicConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    let notices = vec![
        Notice::new(Level::Info, format!("Loaded config from {}", path.display())),
        Notice::new(Level::Debug, format!("Config: {:?}", config)),
    ];
    Ok(LoadedConfig { config, notices })
}

/// Generates a commented-out default config file at the given path.
/// Returns a warning if it could not be written.
fn generate_default_config(path: &Path) -> Option<Notice> {
    let default_content = r#"# Systemic Messenger Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# user_name = "Jordan Doe"
# user_initials = "JD"

# [display]
# clock = "24h"                      # "24h" or "12h"
# wide_layout_min_width = 110        # show all panels side by side at this width

# [logging]
# level = "debug"                    # Or set SYSTEMIC_LOG_LEVEL env var
# file = "systemic.log"

# [seed]
# file = "/path/to/conversations.toml"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        return Some(Notice::new(
            Level::Warn,
            format!("Failed to create config directory: {e}"),
        ));
    }
    fs::write(path, default_content).err().map(|e| {
        Notice::new(Level::Warn, format!("Failed to write default config: {e}"))
    })
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SystemicConfig, cli: &CliOverrides) -> ResolvedConfig {
    let mut notices = Vec::new();

    let user_name = config
        .general
        .user_name
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());

    // Initials: config → derived from user name → default
    let user_initials = config
        .general
        .user_initials
        .clone()
        .or_else(|| initials(&user_name))
        .unwrap_or_else(|| DEFAULT_USER_INITIALS.to_string());

    // Clock: CLI → config → default
    let clock = cli
        .clock
        .or(config.display.clock)
        .unwrap_or_default();

    // Log level: CLI → env → config → default
    let level_name = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("SYSTEMIC_LOG_LEVEL").ok())
        .or_else(|| config.logging.level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let log_level = parse_level(&level_name).unwrap_or_else(|| {
        notices.push(Notice::new(
            Level::Warn,
            format!("Unknown log level '{level_name}', using {DEFAULT_LOG_LEVEL}"),
        ));
        log::LevelFilter::Debug
    });

    // Seed file: CLI → config
    let seed_file = cli.seed_file.clone().or_else(|| config.seed.file.clone());

    ResolvedConfig {
        user_name,
        user_initials,
        clock,
        wide_layout_min_width: config
            .display
            .wide_layout_min_width
            .unwrap_or(DEFAULT_WIDE_LAYOUT_MIN_WIDTH),
        log_level,
        log_file: config
            .logging
            .file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        seed_file,
        notices,
    }
}

fn parse_level(name: &str) -> Option<log::LevelFilter> {
    name.parse::<log::LevelFilter>().ok()
}

/// "Jordan Doe" → "JD". Uses at most two words.
fn initials(name: &str) -> Option<String> {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    (!letters.is_empty()).then_some(letters)
}
