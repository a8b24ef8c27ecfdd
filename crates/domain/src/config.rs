use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

const LOCAL_CONFIG: &str = "geoblock.toml";
const SYSTEM_CONFIG: &str = "/etc/geoblock/config.toml";

/// Main configuration structure for the geoblock filter
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Filter inputs (blacklist file, GeoIP database)
    #[serde(default)]
    pub filter: FilterConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The two switches the filter is initialized from.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Text file with one country code per line
    pub blacklist: Option<String>,

    /// GeoIP country database file
    pub geoipdb: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl FilterConfig {
    /// Parse host-style plugin switches.
    ///
    /// Accepts `--blacklist=<file>` and `--geoipdb=<file>` (or the value as
    /// the following argument) in any order. Later occurrences win. Any
    /// other argument is rejected.
    pub fn from_switches<I, S>(args: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = FilterConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            let (name, inline_value) = match arg.strip_prefix("--") {
                Some(rest) => match rest.split_once('=') {
                    Some((name, value)) => (name, Some(value.to_string())),
                    None => (rest, None),
                },
                None => return Err(DomainError::UnknownSwitch(arg.to_string())),
            };

            let slot = match name {
                "blacklist" => &mut config.blacklist,
                "geoipdb" => &mut config.geoipdb,
                _ => return Err(DomainError::UnknownSwitch(arg.to_string())),
            };

            let value = match inline_value {
                Some(value) => value,
                None => args
                    .next()
                    .map(|v| v.as_ref().to_string())
                    .ok_or_else(|| DomainError::UnknownSwitch(arg.to_string()))?,
            };
            *slot = Some(value);
        }

        Ok(config)
    }

    pub fn blacklist_path(&self) -> Result<&str, DomainError> {
        self.blacklist
            .as_deref()
            .ok_or(DomainError::MissingSwitch("blacklist"))
    }

    pub fn geoipdb_path(&self) -> Result<&str, DomainError> {
        self.geoipdb
            .as_deref()
            .ok_or(DomainError::MissingSwitch("geoipdb"))
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. geoblock.toml in current directory
    /// 3. /etc/geoblock/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG).exists() {
            Self::from_file(LOCAL_CONFIG)?
        } else if std::path::Path::new(SYSTEM_CONFIG).exists() {
            Self::from_file(SYSTEM_CONFIG)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(blacklist) = overrides.blacklist {
            self.filter.blacklist = Some(blacklist);
        }
        if let Some(geoipdb) = overrides.geoipdb {
            self.filter.geoipdb = Some(geoipdb);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Both filter inputs are mandatory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.filter.blacklist.is_none() {
            return Err(ConfigError::Validation(
                "No blacklist file configured".to_string(),
            ));
        }
        if self.filter.geoipdb.is_none() {
            return Err(ConfigError::Validation(
                "No GeoIP database configured".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub blacklist: Option<String>,
    pub geoipdb: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
