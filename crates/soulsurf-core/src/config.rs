use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Forecast fetch settings
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// Map viewport defaults consumed by the UI layer
    #[serde(default)]
    pub map: MapConfig,

    /// Community view settings
    #[serde(default)]
    pub community: CommunityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Forecast API base URL
    pub base_url: String,

    /// Forecast horizon in days
    pub forecast_days: u8,

    /// Refresh interval in minutes (0 disables refresh; startup fetch only)
    pub refresh_minutes: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.open-meteo.com".to_string(),
            forecast_days: 3,
            refresh_minutes: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial viewport center latitude (Fortaleza by default)
    pub center_latitude: f64,

    /// Initial viewport center longitude
    pub center_longitude: f64,

    /// Initial zoom level
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_latitude: -3.7319,
            center_longitude: -38.5267,
            zoom: 13,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityConfig {
    /// How many comments the beach panel shows
    #[serde(default = "default_recent_comments")]
    pub recent_comments: usize,
}

fn default_recent_comments() -> usize {
    5
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            recent_comments: default_recent_comments(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("soulsurf");

        Self {
            config_dir,
            forecast: ForecastConfig::default(),
            map: MapConfig::default(),
            community: CommunityConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns an error if validation fails with critical errors; warnings
    /// are logged and tolerated.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.forecast.base_url, "forecast.base_url", &mut result);

        // Open-Meteo serves at most 16 days ahead
        if self.forecast.forecast_days == 0 {
            result.add_error("forecast.forecast_days", "Forecast horizon must be at least 1 day");
        } else if self.forecast.forecast_days > 16 {
            result.add_warning(
                "forecast.forecast_days",
                "Forecast horizon beyond 16 days is not served upstream",
            );
        }

        if self.forecast.refresh_minutes == 0 {
            result.add_warning(
                "forecast.refresh_minutes",
                "Forecast refresh disabled (startup fetch only)",
            );
        } else if self.forecast.refresh_minutes > 1440 {
            result.add_warning(
                "forecast.refresh_minutes",
                "Forecast refresh interval is more than 24 hours",
            );
        }

        if !(-90.0..=90.0).contains(&self.map.center_latitude) {
            result.add_error("map.center_latitude", "Latitude must be within -90..=90");
        }
        if !(-180.0..=180.0).contains(&self.map.center_longitude) {
            result.add_error("map.center_longitude", "Longitude must be within -180..=180");
        }
        if self.map.zoom == 0 || self.map.zoom > 19 {
            result.add_warning("map.zoom", "Zoom outside the usual 1..=19 tile range");
        }

        if self.community.recent_comments == 0 {
            result.add_warning(
                "community.recent_comments",
                "Comment list hidden (limit is 0)",
            );
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }
                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("soulsurf");

        Ok(config_dir.join("config.toml"))
    }
}
