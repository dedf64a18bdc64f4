//! Configuration file loading and resolution.
//!
//! Resolution order: explicit path (CLI) → `SWOLIGHT_CONFIG` → XDG config
//! directory → built-in defaults. An explicit or env path that cannot be
//! loaded is an error; a missing XDG file is not.

use std::fmt;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sl_common::{Error, Result};
use tracing::{debug, warn};

use crate::geometry::MountGeometry;
use crate::sensor::SensorConfig;

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "SWOLIGHT_CONFIG";

const CONFIG_DIR_NAME: &str = "swolight";
const CONFIG_FILE_NAME: &str = "config.json";

/// On-disk configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigFile {
    #[serde(default)]
    pub sensor: SensorConfig,

    #[serde(default)]
    pub geometry: Option<MountGeometry>,
}

impl ConfigFile {
    /// Parse a config file from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load from file with full error reporting.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load from file, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(file) => file,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "config unreadable, using defaults");
                Self::default()
            }
        }
    }
}

/// Where the resolved configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum ConfigSource {
    Explicit(PathBuf),
    Env(PathBuf),
    Xdg(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(p) => write!(f, "explicit ({})", p.display()),
            ConfigSource::Env(p) => write!(f, "{} ({})", CONFIG_ENV_VAR, p.display()),
            ConfigSource::Xdg(p) => write!(f, "xdg ({})", p.display()),
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub sensor: SensorConfig,
    pub geometry: Option<MountGeometry>,
    pub source: ConfigSource,
}

impl ResolvedConfig {
    /// Whether nothing was loaded from disk.
    pub fn using_defaults(&self) -> bool {
        self.source == ConfigSource::Defaults
    }
}

/// Resolve configuration from the process environment.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    let xdg_path = dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    resolve_from(explicit, env_path, xdg_path)
}

fn resolve_from(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    xdg_path: Option<PathBuf>,
) -> Result<ResolvedConfig> {
    let (file, source) = if let Some(path) = explicit {
        (
            ConfigFile::load_from_file(path)?,
            ConfigSource::Explicit(path.to_path_buf()),
        )
    } else if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
        (ConfigFile::load_from_file(&path)?, ConfigSource::Env(path))
    } else if let Some(path) = xdg_path.filter(|p| p.is_file()) {
        (ConfigFile::load_or_default(&path), ConfigSource::Xdg(path))
    } else {
        (ConfigFile::default(), ConfigSource::Defaults)
    };

    debug!(source = %source, table = %file.sensor.name, "resolved configuration");

    Ok(ResolvedConfig {
        sensor: file.sensor,
        geometry: file.geometry,
        source,
    })
}

/// JSON schema describing the config file.
pub fn config_schema() -> Result<serde_json::Value> {
    Ok(serde_json::to_value(schemars::schema_for!(ConfigFile))?)
}
