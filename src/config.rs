use crate::error::{AdvisorError, Result};
use crate::models::{Crop, ProfileOverrides};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub farm: FarmConfig,
    /// Per-farm threshold overrides keyed by crop name
    #[serde(default)]
    pub crops: BTreeMap<String, ProfileOverrides>,
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmConfig {
    pub name: String,
    /// Crop used when a snapshot does not name one
    pub crop: Option<String>,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            name: "Main Farm".into(),
            crop: None,
        }
    }
}

/// Sensor selection for telemetry aggregation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AggregationConfig {
    /// Device allow-list; empty means every device
    #[serde(default)]
    pub devices: Vec<String>,
    /// Readings older than this (relative to the snapshot time) are ignored
    #[serde(default)]
    pub max_age_minutes: Option<i64>,
    /// Air temperature (°C) assumed when no air sensor reported
    #[serde(default = "default_fallback_temp")]
    pub fallback_temp: f64,
}

/// Ten years; anything longer is a typo, not a retention policy.
pub const MAX_READING_AGE_MINUTES: i64 = 10 * 365 * 24 * 60;

fn default_fallback_temp() -> f64 {
    15.0
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            devices: Vec::new(),
            max_age_minutes: None,
            fallback_temp: default_fallback_temp(),
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AdvisorError::Config(format!(
                "Config file not found at {:?}",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str)?;

        let config: Config = serde_yaml::from_str(&config_str)?;

        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but falls back to built-in defaults when no
    /// config file exists anywhere.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if config_override.is_none() && !Self::exists(None) {
            tracing::info!("No config file found, using built-in defaults");
            return Ok(Self::default());
        }
        Self::load(config_override)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("agroadvisor").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        let default_path = dirs::config_dir()
            .ok_or_else(|| AdvisorError::Config("Cannot determine config directory".into()))?
            .join("agroadvisor")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (crop, overrides) in &self.crops {
            if let Some(field) = overrides.first_non_finite() {
                return Err(AdvisorError::Config(format!(
                    "crops.{}.{} must be a finite number",
                    crop, field
                )));
            }
        }

        if !self.aggregation.fallback_temp.is_finite() {
            return Err(AdvisorError::Config(
                "aggregation.fallback_temp must be a finite number".into(),
            ));
        }

        if let Some(m) = self.aggregation.max_age_minutes {
            if m < 0 {
                return Err(AdvisorError::Config(
                    "aggregation.max_age_minutes cannot be negative".into(),
                ));
            }
            if m > MAX_READING_AGE_MINUTES {
                return Err(AdvisorError::Config(format!(
                    "aggregation.max_age_minutes must be at most {}",
                    MAX_READING_AGE_MINUTES
                )));
            }
        }

        Ok(())
    }

    /// Overrides persisted for `crop`. Keys match case-insensitively and by
    /// crop alias ("maize" finds a "Corn" entry).
    pub fn overrides_for(&self, crop: &str) -> ProfileOverrides {
        let wanted = Crop::from_str(crop);
        self.crops
            .iter()
            .find(|(name, _)| {
                name.trim().eq_ignore_ascii_case(crop.trim())
                    || (wanted.is_some() && Crop::from_str(name) == wanted)
            })
            .map(|(_, overrides)| *overrides)
            .unwrap_or_default()
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| AdvisorError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}
