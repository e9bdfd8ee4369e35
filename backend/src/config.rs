//! Server and dataset configuration.
//!
//! Settings come from an optional `transit.toml` file, then environment
//! variables override individual fields:
//!
//! - `HOST`: bind host (default: 0.0.0.0)
//! - `PORT`: bind port (default: 8080)
//! - `SETTLEMENTS_FILE`: JSON settlement catalogue replacing the bundled one
//!
//! The destination is not configurable: every travel time in the transport
//! table is measured to Pécs.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{TransitError, TransitResult};

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Which settlements get classified, and when.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetSettings {
    /// Replacement settlement catalogue; the bundled one is used when unset
    #[serde(default)]
    pub settlements_file: Option<PathBuf>,
    #[serde(default)]
    pub window: ReachabilityWindow,
}

/// Morning period in which arrivals at the destination count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReachabilityWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ReachabilityWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
        }
    }
}

impl TransitConfig {
    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> TransitResult<Self> {
        let config: TransitConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> TransitResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| TransitError::io(path, e))?;
        Self::parse(&content)
    }

    /// Load `transit.toml` from the first standard location that has one.
    ///
    /// Searches the current directory, `backend/`, then the parent directory.
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> TransitResult<Option<Self>> {
        let search_paths = [
            PathBuf::from("transit.toml"),
            PathBuf::from("backend/transit.toml"),
            PathBuf::from("../transit.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                info!(path = %path.display(), "loading configuration file");
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// File configuration (or defaults) with environment overrides applied.
    pub fn load() -> TransitResult<Self> {
        let mut config = Self::from_default_location()?.unwrap_or_default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> TransitResult<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> TransitResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| TransitError::validation("PORT must be a valid port number"))?;
        }
        if let Some(path) = lookup("SETTLEMENTS_FILE") {
            self.dataset.settlements_file = Some(PathBuf::from(path));
        }
        self.validate()
    }

    pub fn validate(&self) -> TransitResult<()> {
        let window = &self.dataset.window;
        if window.start >= window.end {
            return Err(TransitError::validation(format!(
                "reachability window start {} must be before end {}",
                window.start, window.end
            )));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
