//! nfdqr runtime configuration handling

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default base URL of the NFD lookup API.
pub const DEFAULT_NFD_API_URL: &str = "https://api.nf.domains/nfd/";

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NfdQrConfig {
    /// NFD lookup configuration overrides
    pub resolver: ResolverOptions,
    /// QR rendering and composition configuration
    pub render: RenderOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl Default for NfdQrConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverOptions::default(),
            render: RenderOptions::default(),
            logging: LoggingOptions::default(),
        }
    }
}

impl NfdQrConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No nfdqr.toml / nfdqr.yaml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["nfdqr.toml", "nfdqr.yaml", "nfdqr.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("nfdqr");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) {
        self.resolver.apply_env_overrides();
        self.render.apply_env_overrides();
        self.logging.apply_env_overrides();
    }
}

/// NFD lookup service options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Base URL of the NFD API; the looked-up name is appended to it
    pub base_url: String,
    /// Optional request timeout in seconds; unset means transport defaults
    pub timeout_secs: Option<u64>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NFD_API_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ResolverOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("NFDQR_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(timeout) = env::var("NFDQR_HTTP_TIMEOUT") {
            self.timeout_secs = timeout.parse::<u64>().ok();
        }
    }
}

/// QR rendering and composition options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Output canvas edge length in pixels (the image is always square)
    pub size: u32,
    /// Rendered size of one QR module in device pixels
    pub module_size: u32,
    /// Whether to render the 4-module quiet zone around the pattern
    pub quiet_zone: bool,
    /// Radius in pixels of the white clear zone painted at the canvas center
    pub clear_radius: u32,
    /// Edge length in pixels the logo is resized to before compositing
    pub logo_size: u32,
    /// Corner radius in pixels of the rounded-rectangle alpha mask; 0 keeps square corners
    pub corner_radius: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 256,
            module_size: 10,
            quiet_zone: true,
            clear_radius: 46,
            logo_size: 90,
            corner_radius: 0,
        }
    }
}

impl RenderOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(radius) = env::var("NFDQR_CORNER_RADIUS") {
            if let Ok(parsed) = radius.parse::<u32>() {
                self.corner_radius = parsed;
            }
        }
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `NFDQR_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stdout logging
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            color: true,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("NFDQR_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("NFDQR_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("NFDQR_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Ok(rotation) = env::var("NFDQR_LOG_ROTATION") {
            if let Some(parsed) = LogRotation::from_str(&rotation) {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl LogRotation {
    fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}
